//! A tri-color combo card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled 30-card deck
//! (values `0..=9` in red, green, and blue) to a set of players and
//! resolves the round by a ranked list of combo rules: color combo, then
//! value combo, then pair combo.
//!
//! # Example
//!
//! ```
//! use trico::{Card, Combo, Game, Player};
//!
//! let reds = Player::new(vec![
//!     Card::of(3, "red").unwrap(),
//!     Card::of(7, "red").unwrap(),
//!     Card::of(9, "red").unwrap(),
//! ]);
//! let mixed = Player::new(vec![
//!     Card::of(0, "green").unwrap(),
//!     Card::of(4, "blue").unwrap(),
//!     Card::of(8, "red").unwrap(),
//! ]);
//!
//! let game = Game::with_players(vec![reds, mixed]);
//! let result = game.resolve().expect("one hand holds a color combo");
//! assert_eq!(result.combo, Combo::Color);
//! assert_eq!(result.winners, vec![0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod combo;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Value};
pub use combo::Combo;
pub use dealer::deal;
pub use deck::Deck;
pub use error::{CardError, DealError, ParseColorError, ValueError};
pub use game::Game;
pub use options::{DEFAULT_HAND_SIZE, GameOptions};
pub use player::Player;
pub use result::RoundResult;
