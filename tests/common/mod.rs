//! Shared fixtures for integration tests.

#![allow(dead_code)]

use splendid::cards::{DevelopmentCard, GameComponents, Noble};
use splendid::core::{ChipColor, ChipSet, Color, ColorCounts};
use splendid::rules::{Game, NOBLE_VICTORY_POINTS};

pub fn card(vp: u8, color: Color, price: &[(Color, u8)]) -> DevelopmentCard {
    DevelopmentCard::new(vp, color, ColorCounts::of(price))
}

pub fn noble(requirements: &[(Color, u8)]) -> Noble {
    Noble::new(NOBLE_VICTORY_POINTS, ColorCounts::of(requirements))
}

pub fn chips(counts: &[(ChipColor, u8)]) -> ChipSet {
    counts
        .iter()
        .fold(ChipSet::EMPTY, |set, &(chip, n)| set.with_copies(chip, n))
}

/// The open cards of the fixed test game, four per row.
pub fn test_open_cards() -> Vec<DevelopmentCard> {
    use Color::{Black, Blue, Green, Red, White};
    vec![
        // row one
        card(0, Red, &[(White, 3)]),
        card(1, Blue, &[(Red, 4)]),
        card(0, White, &[(Blue, 1), (Green, 2), (Red, 1), (Black, 1)]),
        card(0, Green, &[(White, 1), (Blue, 3), (Green, 1)]),
        // row two
        card(2, Green, &[(White, 4), (Blue, 2), (Black, 1)]),
        card(3, Black, &[(Black, 6)]),
        card(1, Red, &[(Blue, 3), (Red, 2), (Black, 3)]),
        card(2, Black, &[(Green, 5), (Red, 3)]),
        // row three
        card(4, Blue, &[(White, 6), (Blue, 3), (Black, 3)]),
        card(4, Black, &[(Red, 7)]),
        card(5, Blue, &[(White, 7), (Blue, 3)]),
        card(3, Black, &[(White, 3), (Blue, 3), (Green, 5), (Red, 3)]),
    ]
}

pub fn test_nobles() -> Vec<Noble> {
    use Color::{Black, Green, Red, White};
    vec![
        noble(&[(Black, 3), (Red, 3), (White, 3)]),
        noble(&[(Black, 4), (White, 4)]),
        noble(&[(Black, 3), (Red, 3), (Green, 3)]),
    ]
}

/// A deterministic game over the standard catalog.
pub fn standard_test_game() -> Game {
    GameComponents::standard()
        .unwrap()
        .start_fixed_game(&test_open_cards(), &test_nobles())
        .unwrap()
}

/// Bank plus both players' chips.
pub fn chips_in_play(game: &Game) -> ChipSet {
    game.tableaux()
        .iter()
        .fold(*game.chips(), |total, (_, tableau)| total.plus(tableau.chips()))
}

/// Every card on the table or in a tableau, sorted.
pub fn cards_in_play(game: &Game) -> Vec<DevelopmentCard> {
    let mut cards: Vec<DevelopmentCard> = game.developments().all_cards().copied().collect();
    for (_, tableau) in game.tableaux().iter() {
        cards.extend(tableau.developments().copied());
        cards.extend(tableau.reserved_developments().copied());
    }
    cards.sort();
    cards
}
