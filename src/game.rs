//! Round orchestration and winner resolution.

use alloc::vec::Vec;

use crate::combo::Combo;
use crate::dealer::deal;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;

/// A single round of the game: a set of seated players.
///
/// Winner resolution walks [`Combo::PRIORITY`] in order and stops at the
/// first rule any hand satisfies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Seated players, in seat order.
    players: Vec<Player>,
}

impl Game {
    /// Creates a game by dealing hands from a fresh shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover `player_count` hands of the
    /// configured size.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 4, 42).unwrap();
    /// assert_eq!(game.player_count(), 4);
    /// ```
    pub fn new(options: GameOptions, player_count: usize, seed: u64) -> Result<Self, DealError> {
        let players = deal(player_count, Deck::new(seed), usize::from(options.hand_size))?;
        Ok(Self { players })
    }

    /// Creates a game from explicit players.
    #[must_use]
    pub const fn with_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Resolves the round against the ranked combo rules.
    ///
    /// Rules are tried in [`Combo::PRIORITY`] order; the first rule with at
    /// least one matching hand selects the winners, and every player whose
    /// hand matches that rule wins. Lower rules are never consulted.
    ///
    /// Returns `None` when no hand satisfies any rule.
    ///
    /// # Example
    ///
    /// ```
    /// use trico::{Card, Combo, Game, Player};
    ///
    /// let pair = Player::new(vec![
    ///     Card::of(2, "red").unwrap(),
    ///     Card::of(2, "green").unwrap(),
    ///     Card::of(8, "blue").unwrap(),
    /// ]);
    /// let game = Game::with_players(vec![pair]);
    ///
    /// let result = game.resolve().unwrap();
    /// assert_eq!(result.combo, Combo::Pair);
    /// assert_eq!(result.winners, vec![0]);
    /// ```
    #[must_use]
    pub fn resolve(&self) -> Option<RoundResult> {
        for combo in Combo::PRIORITY {
            let winners: Vec<usize> = self
                .players
                .iter()
                .enumerate()
                .filter_map(|(seat, player)| combo.matches(player.hand()).then_some(seat))
                .collect();

            if !winners.is_empty() {
                return Some(RoundResult { combo, winners });
            }
        }

        None
    }

    /// Returns the winning players, in seating order.
    ///
    /// Returns `None` when no hand satisfies any rule.
    #[must_use]
    pub fn find_winners(&self) -> Option<Vec<&Player>> {
        let result = self.resolve()?;
        Some(
            result
                .winners
                .iter()
                .map(|&seat| &self.players[seat])
                .collect(),
        )
    }
}
