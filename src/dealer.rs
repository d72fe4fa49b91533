//! Hand dealing.

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;

/// Deals `hand_size` cards from `deck` to each of `player_count` players.
///
/// Hands are consecutive, non-overlapping slices of the shuffled deck:
/// player `i` receives the cards at `i * hand_size` through
/// `i * hand_size + hand_size - 1`, so no card is ever shared between
/// players.
///
/// # Errors
///
/// Returns an error if the deck holds fewer than
/// `player_count * hand_size` cards.
///
/// # Example
///
/// ```
/// use trico::{Deck, deal};
///
/// let players = deal(4, Deck::new(7), 3).unwrap();
/// assert_eq!(players.len(), 4);
/// assert!(players.iter().all(|player| player.hand().len() == 3));
/// ```
pub fn deal(player_count: usize, deck: Deck, hand_size: usize) -> Result<Vec<Player>, DealError> {
    let needed = player_count
        .checked_mul(hand_size)
        .ok_or(DealError::NotEnoughCards)?;
    let cards = deck.into_cards();
    if cards.len() < needed {
        return Err(DealError::NotEnoughCards);
    }

    let mut players = Vec::with_capacity(player_count);
    for seat in 0..player_count {
        let start = seat * hand_size;
        players.push(Player::new(cards[start..start + hand_size].to_vec()));
    }

    Ok(players)
}
