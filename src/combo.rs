//! Combo rules and hand predicates.

use core::fmt;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;

/// A combo rule that a hand can satisfy.
///
/// Rules are ranked; [`Combo::PRIORITY`] lists them strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combo {
    /// Every card shares one color.
    Color,
    /// Every card shares one value.
    Value,
    /// Exactly one value appears twice; the rest are distinct.
    Pair,
}

impl Combo {
    /// Evaluation order, strongest rule first.
    pub const PRIORITY: [Self; 3] = [Self::Color, Self::Value, Self::Pair];

    /// Returns the rule's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color combo",
            Self::Value => "value combo",
            Self::Pair => "pair combo",
        }
    }

    /// Returns whether `hand` satisfies this rule.
    ///
    /// Distinctness is what counts: duplicate cards collapse. An empty hand
    /// satisfies no rule; a single card counts as one color and one value.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::{Card, Combo};
    ///
    /// let hand = [
    ///     Card::of(1, "red").unwrap(),
    ///     Card::of(4, "red").unwrap(),
    ///     Card::of(9, "red").unwrap(),
    /// ];
    /// assert!(Combo::Color.matches(&hand));
    /// assert!(!Combo::Value.matches(&hand));
    /// assert!(!Combo::Pair.matches(&hand));
    /// ```
    #[must_use]
    pub fn matches(self, hand: &[Card]) -> bool {
        match self {
            Self::Color => distinct_colors(hand) == 1,
            Self::Value => distinct_values(hand) == 1,
            Self::Pair => distinct_values(hand) + 1 == hand.len(),
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn distinct_colors(hand: &[Card]) -> usize {
    hand.iter()
        .map(|card| card.color)
        .collect::<HashSet<_>>()
        .len()
}

fn distinct_values(hand: &[Card]) -> usize {
    hand.iter()
        .map(|card| card.value)
        .collect::<HashSet<_>>()
        .len()
}
