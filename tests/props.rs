//! Property tests for values, decks, dealing, and combo resolution.

use std::collections::HashSet;

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use proptest::sample::subsequence;

use trico::{Card, Color, Combo, DECK_SIZE, Deck, Game, Player, Value, deal};

fn any_value() -> impl Strategy<Value = Value> {
    (Value::MIN..=Value::MAX).prop_map(|raw| Value::new(raw).unwrap())
}

fn any_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Green), Just(Color::Blue)]
}

/// Hand of unique values in a single color. Always a color combo.
fn one_color_hand() -> impl Strategy<Value = Vec<Card>> {
    (any_color(), btree_set(any_value(), 1..=5)).prop_map(|(color, values)| {
        values
            .into_iter()
            .map(|value| Card::new(value, color))
            .collect()
    })
}

/// Hand of one value across at least two colors. Always a value combo and
/// never a color combo.
fn one_value_hand() -> impl Strategy<Value = Vec<Card>> {
    (any_value(), subsequence(Color::ALL.to_vec(), 2..=3)).prop_map(|(value, colors)| {
        colors
            .into_iter()
            .map(|color| Card::new(value, color))
            .collect()
    })
}

/// Hand where exactly one value repeats once, spread over at least two
/// colors. Matches the pair rule and nothing stronger.
fn pair_hand() -> impl Strategy<Value = Vec<Card>> {
    btree_set(any_value(), 2..=5)
        .prop_map(|values| {
            let values: Vec<Value> = values.into_iter().collect();
            let mut hand = Vec::with_capacity(values.len() + 1);
            hand.push(Card::new(values[0], Color::Red));
            hand.push(Card::new(values[0], Color::Green));
            for (offset, &value) in values.iter().enumerate().skip(1) {
                hand.push(Card::new(value, Color::ALL[offset % Color::COUNT]));
            }
            hand
        })
        .prop_shuffle()
}

/// Hand of three distinct values in three distinct colors. Matches no rule.
fn comboless_hand() -> impl Strategy<Value = Vec<Card>> {
    btree_set(any_value(), 3)
        .prop_map(|values| {
            values
                .into_iter()
                .zip(Color::ALL)
                .map(|(value, color)| Card::new(value, color))
                .collect()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn value_roundtrips_in_range(raw in Value::MIN..=Value::MAX) {
        let value = Value::new(raw).unwrap();
        prop_assert_eq!(value.get(), raw);
        prop_assert_eq!(u8::from(value), raw);
    }

    #[test]
    fn value_rejects_integers_outside_range(
        raw in any::<i64>().prop_filter("outside 0..=9", |raw| !(0..=9).contains(raw)),
    ) {
        let err = Value::try_from(raw).unwrap_err();
        prop_assert_eq!(err.value, raw);
    }

    #[test]
    fn deck_is_complete_for_any_seed(seed in any::<u64>()) {
        let deck = Deck::new(seed);
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(distinct.len(), DECK_SIZE);
    }

    #[test]
    fn deck_shuffle_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(Deck::new(seed), Deck::new(seed));
    }

    #[test]
    fn dealing_partitions_the_deck(seed in any::<u64>(), player_count in 0usize..=10) {
        let players = deal(player_count, Deck::new(seed), 3).unwrap();
        prop_assert_eq!(players.len(), player_count);

        let mut seen = HashSet::new();
        for player in &players {
            prop_assert_eq!(player.hand().len(), 3);
            for card in player.hand() {
                prop_assert!(seen.insert(*card), "card dealt twice: {:?}", card);
            }
        }
    }

    #[test]
    fn one_color_players_always_tie(hands in vec(one_color_hand(), 1..=6)) {
        let game = Game::with_players(hands.into_iter().map(Player::new).collect());

        let result = game.resolve().unwrap();
        prop_assert_eq!(result.combo, Combo::Color);
        prop_assert_eq!(result.winners, (0..game.player_count()).collect::<Vec<_>>());
    }

    #[test]
    fn color_combo_outranks_value_combo(
        color_hand in one_color_hand(),
        value_hand in one_value_hand(),
    ) {
        let game = Game::with_players(vec![Player::new(value_hand), Player::new(color_hand)]);

        let result = game.resolve().unwrap();
        prop_assert_eq!(result.combo, Combo::Color);
        prop_assert_eq!(result.winners, vec![1]);
    }

    #[test]
    fn pair_hand_matches_only_the_pair_rule(hand in pair_hand()) {
        prop_assert!(Combo::Pair.matches(&hand));
        prop_assert!(!Combo::Color.matches(&hand));
        prop_assert!(!Combo::Value.matches(&hand));

        let game = Game::with_players(vec![Player::new(hand)]);
        let result = game.resolve().unwrap();
        prop_assert_eq!(result.combo, Combo::Pair);
        prop_assert_eq!(result.winners, vec![0]);
    }

    #[test]
    fn pair_player_beats_comboless_players(
        pair in pair_hand(),
        others in vec(comboless_hand(), 0..=4),
    ) {
        let mut players: Vec<Player> = others.into_iter().map(Player::new).collect();
        players.push(Player::new(pair));
        let last_seat = players.len() - 1;

        let game = Game::with_players(players);
        let result = game.resolve().unwrap();
        prop_assert_eq!(result.combo, Combo::Pair);
        prop_assert_eq!(result.winners, vec![last_seat]);
    }

    #[test]
    fn comboless_game_has_no_winner(hands in vec(comboless_hand(), 0..=6)) {
        let game = Game::with_players(hands.into_iter().map(Player::new).collect());
        prop_assert_eq!(game.resolve(), None);
        prop_assert!(game.find_winners().is_none());
    }
}
