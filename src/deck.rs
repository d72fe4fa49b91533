//! Deck construction and shuffling.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Color, DECK_SIZE, Value};

/// A full deck of cards, shuffled at construction.
///
/// The deck holds exactly one card per (value, color) pair. The order is
/// deterministic for a given seed and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in shuffled order.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates and shuffles a full deck with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(Deck::new(42), deck);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for color in Color::ALL {
            for value in Value::all() {
                cards.push(Card::new(value, color));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Returns the cards in their shuffled order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the deck, returning the shuffled cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
