//! Player state.

use alloc::vec::Vec;

use crate::card::Card;

/// A player holding a hand of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Cards in dealt order.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with the given hand.
    #[must_use]
    pub const fn new(hand: Vec<Card>) -> Self {
        Self { hand }
    }

    /// Returns the player's hand in dealt order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
}
