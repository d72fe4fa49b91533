//! CLI demo: shuffle a deck, deal a round, and resolve the winners.
//!
//! Pass a player count as the first argument (default 4). Set `RUST_LOG`
//! to see dealing internals.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;
use trico::{Card, Color, Deck, Game, GameOptions, RoundResult, deal};

fn main() {
    env_logger::init();

    let player_count = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(4);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    info!("seed {seed}, {player_count} players");

    let options = GameOptions::default();
    let deck = Deck::new(seed);
    println!("Deck ({} cards): {}", deck.len(), format_cards(deck.cards()));

    let players = match deal(player_count, deck, usize::from(options.hand_size)) {
        Ok(players) => players,
        Err(err) => {
            eprintln!("Deal error: {err}");
            return;
        }
    };
    info!("dealt {} hands of {}", players.len(), options.hand_size);

    println!();
    for (seat, player) in players.iter().enumerate() {
        println!("Player {seat}: {}", format_cards(player.hand()));
    }

    let game = Game::with_players(players);
    match game.resolve() {
        Some(RoundResult { combo, winners }) => {
            println!("\nWinner(s) by {combo}:");
            for seat in winners {
                let hand = format_cards(game.players()[seat].hand());
                println!("  Player {seat}: {hand}");
            }
        }
        None => println!("\nNo winner this round."),
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (initial, color_code) = match card.color {
        Color::Red => ("R", "31"),
        Color::Green => ("G", "32"),
        Color::Blue => ("B", "34"),
    };

    colorize(&format!("{}{initial}", card.value.get()), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
