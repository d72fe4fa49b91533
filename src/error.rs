//! Error types for card construction and dealing.

use alloc::string::String;

use thiserror::Error;

/// Error for a card value outside the legal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value out of range 0..=9: {value}")]
pub struct ValueError {
    /// The rejected value.
    pub value: i64,
}

/// Error for a color name that matches no color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color name: {name:?}")]
pub struct ParseColorError {
    /// The rejected name.
    pub name: String,
}

/// Errors that can occur when building a card from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The value part was out of range.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// The color part was not a known color name.
    #[error(transparent)]
    Color(#[from] ParseColorError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
