//! Rules integration tests over the fixed test game.

mod common;

use common::{card, chips, noble, standard_test_game, test_open_cards};
use splendid::cards::{Deck, DevelopmentRow, Developments, Row};
use splendid::core::{ChipColor, ChipSet, Color, Player, PlayerMap, Turn};
use splendid::error::RulesError;
use splendid::rules::{Game, Move, Tableau, MAX_TOKENS, OPEN_DEVELOPMENT_CARD_COUNT, STARTING_CHIPS};

use ChipColor::{Black, Blue, Gold, Green, Red, White};

fn take_moves(game: &Game) -> Vec<(ChipSet, ChipSet)> {
    game.moves()
        .into_iter()
        .filter_map(|m| match m {
            Move::TakeTokens { tokens, returned } => Some((tokens, returned)),
            _ => None,
        })
        .collect()
}

fn nine_chip_game() -> Game {
    standard_test_game()
        .take_chips(Player::One, &chips(&[(Green, 4), (Red, 3), (White, 2)]))
        .unwrap()
}

// =============================================================================
// Taking chips
// =============================================================================

#[test]
fn test_take_chips_has_expected_moves() {
    let takes = take_moves(&standard_test_game());

    assert!(takes.contains(&(ChipSet::of(&[Red, Black, White]), ChipSet::EMPTY)));
    assert!(takes.contains(&(ChipSet::of(&[Red, Red]), ChipSet::EMPTY)));
    assert!(takes.iter().all(|(tokens, _)| tokens.count(Gold) == 0));
}

#[test]
fn test_take_chips_utility() {
    let game = standard_test_game()
        .take_chips(Player::Two, &ChipSet::of(&[Green, Green, Green, Blue, Gold]))
        .unwrap();

    assert_eq!(game.chips(), &chips(&[(Green, 1), (Blue, 3), (Red, 4), (White, 4), (Black, 4), (Gold, 4)]));
    assert!(game.tableau(Player::One).chips().is_empty());
    assert_eq!(game.tableau(Player::Two).chips(), &chips(&[(Green, 3), (Blue, 1), (Gold, 1)]));
    assert_eq!(game.turn(), Turn::START);
}

#[test]
fn test_move_takes_chips() {
    let game = standard_test_game()
        .take_move(&Move::take_tokens(ChipSet::of(&[Red, Black, White]), ChipSet::EMPTY))
        .unwrap();

    assert_eq!(game.turn(), Turn::new(0, Player::Two));
    assert_eq!(game.chips(), &chips(&[(Green, 4), (Blue, 4), (Red, 3), (White, 3), (Black, 3), (Gold, 5)]));
    assert_eq!(game.tableau(Player::One).chips(), &ChipSet::of(&[Red, Black, White]));
    assert!(game.tableau(Player::Two).chips().is_empty());
}

#[test]
fn test_has_expected_moves_when_returning_chips() {
    let takes = take_moves(&nine_chip_game());

    assert!(!takes.contains(&(ChipSet::of(&[White, Blue, Black]), ChipSet::EMPTY)));
    assert!(!takes.contains(&(ChipSet::of(&[Green, Green]), ChipSet::EMPTY)));
    assert!(!takes.contains(&(ChipSet::of(&[Red, Red]), ChipSet::EMPTY)));

    assert!(takes.contains(&(ChipSet::of(&[White, Blue, Black]), ChipSet::of(&[Green, Green]))));
    assert!(takes.contains(&(ChipSet::of(&[Black, Black]), ChipSet::of(&[Red]))));
    // took and gave back red and white
    assert!(takes.contains(&(ChipSet::of(&[Blue]), ChipSet::EMPTY)));
}

#[test]
fn test_nine_chips_pairs_every_give_back() {
    let game = nine_chip_game();
    let takes = take_moves(&game);
    let held = game.tableau(Player::One).chips().total();

    for (tokens, returned) in &takes {
        assert!(!tokens.overlaps(returned), "{tokens} / {returned}");
        assert!(held + tokens.total() - returned.total() <= MAX_TOKENS);
    }

    let taken = ChipSet::of(&[White, Blue, Black]);
    let mut give_backs: Vec<ChipSet> = takes
        .iter()
        .filter(|(tokens, _)| *tokens == taken)
        .map(|(_, returned)| *returned)
        .collect();
    give_backs.sort();

    let mut expected = vec![
        ChipSet::of(&[Green, Green]),
        ChipSet::of(&[Green, Red]),
        ChipSet::of(&[Red, Red]),
    ];
    expected.sort();
    assert_eq!(give_backs, expected);
}

#[test]
fn test_move_returns_chips() {
    let game = nine_chip_game()
        .take_move(&Move::take_tokens(
            ChipSet::of(&[White, Red, Blue]),
            ChipSet::of(&[Green, Green]),
        ))
        .unwrap();

    assert_eq!(game.chips(), &chips(&[(Green, 2), (Blue, 3), (White, 1), (Black, 4), (Gold, 5)]));
    assert_eq!(game.tableau(Player::One).chips(), &chips(&[(Green, 2), (Blue, 1), (Red, 4), (White, 3)]));
}

#[test]
fn test_take_moves_are_unique() {
    let takes = take_moves(&nine_chip_game());
    let mut deduped = takes.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), takes.len());
}

// =============================================================================
// Buying and reserving
// =============================================================================

#[test]
fn test_buy_development_card() {
    let game = standard_test_game()
        .take_chips(Player::One, &ChipSet::of(&[White, White, White]))
        .unwrap();
    let buys: Vec<Move> = game.moves().into_iter().filter(Move::is_buy).collect();

    assert_eq!(
        buys,
        vec![Move::BuyDevelopment {
            card: card(0, Color::Red, &[(Color::White, 3)]),
            reserved: false,
            price: ChipSet::of(&[White, White, White]),
            noble: None,
        }]
    );

    let next = game.take_move(&buys[0]).unwrap();
    assert_eq!(next.tableau(Player::One).development_count(), 1);
    assert_eq!(next.developments().row(Row::One).len(), OPEN_DEVELOPMENT_CARD_COUNT);
    assert_eq!(next.chips(), &STARTING_CHIPS);
}

#[test]
fn test_reserve_development_card() {
    let game = standard_test_game();
    let target = card(0, Color::Red, &[(Color::White, 3)]);
    let reserve = Move::ReserveDevelopment { card: target };

    let moves = game.moves();
    assert!(moves.contains(&reserve));
    assert_eq!(
        moves.iter().filter(|m| matches!(m, Move::ReserveDevelopment { .. })).count(),
        OPEN_DEVELOPMENT_CARD_COUNT * 3
    );

    let next = game.take_move(&reserve).unwrap();
    assert_eq!(next.chips().count(Gold), 4);

    let row_one = next.developments().row(Row::One);
    assert_eq!(row_one.len(), OPEN_DEVELOPMENT_CARD_COUNT);
    assert!(!row_one.contains(&target));

    let tableau = next.tableau(Player::One);
    assert_eq!(tableau.reserved_developments().copied().collect::<Vec<_>>(), vec![target]);
    assert_eq!(tableau.chips(), &ChipSet::of(&[Gold]));
}

#[test]
fn test_reserve_cap() {
    let open = test_open_cards();
    let mut game = standard_test_game();
    for target in &open[8..11] {
        game = game
            .take_move(&Move::ReserveDevelopment { card: *target })
            .and_then(|g| g.take_move(&Move::DoNothing))
            .unwrap();
    }

    let tableau = game.tableau(Player::One);
    assert_eq!(tableau.reserved_count(), 3);
    assert!(!game.moves().iter().any(|m| matches!(m, Move::ReserveDevelopment { .. })));

    let fourth = Move::ReserveDevelopment { card: open[11] };
    assert_eq!(game.take_move(&fourth), Err(RulesError::ReserveLimit { limit: 3 }));
}

#[test]
fn test_reserve_from_empty_deck_shrinks_row() {
    let kept = card(0, Color::Blue, &[(Color::Black, 3)]);
    let target = card(0, Color::Red, &[(Color::White, 3)]);
    let refill = card(0, Color::Green, &[(Color::Red, 3)]);

    let developments = Developments::new([
        DevelopmentRow::new([target, kept], Deck::default()),
        DevelopmentRow::new([target, kept], Deck::new([refill])),
        DevelopmentRow::new([], Deck::default()),
    ]);
    let game = Game::new(developments, vec![]);

    let next = game.take_move(&Move::ReserveDevelopment { card: target }).unwrap();
    // the first row showing the card loses it
    assert_eq!(next.developments().row(Row::One).cards().copied().collect::<Vec<_>>(), vec![kept]);
    assert_eq!(next.developments().row(Row::Two).len(), 2);

    let again = next
        .take_move(&Move::ReserveDevelopment { card: target })
        .unwrap();
    let row_two = again.developments().row(Row::Two);
    assert_eq!(row_two.len(), 2);
    assert!(row_two.contains(&refill));
    assert!(row_two.deck().is_empty());
}

#[test]
fn test_buy_with_noble_visit() {
    let black = card(3, Color::Black, &[(Color::Black, 6)]);
    let mut tableau = Tableau::default().to_builder();
    for _ in 0..2 {
        tableau = tableau.add_development(card(0, Color::Black, &[]));
    }
    for color in [Color::Red, Color::White] {
        for _ in 0..3 {
            tableau = tableau.add_development(card(0, color, &[]));
        }
    }
    let tableau = tableau.add_chips(&ChipSet::EMPTY.with_copies(Black, 4)).build();

    let base = standard_test_game();
    let game = Game::from_parts(
        Turn::START,
        base.developments().clone(),
        base.nobles().iter().copied(),
        *base.chips(),
        PlayerMap::from_values(tableau, Tableau::default()),
    );

    let buys: Vec<Move> = game
        .moves()
        .into_iter()
        .filter(|m| matches!(m, Move::BuyDevelopment { card, .. } if *card == black))
        .collect();
    let visiting = noble(&[(Color::Black, 3), (Color::Red, 3), (Color::White, 3)]);
    assert_eq!(
        buys,
        vec![Move::BuyDevelopment {
            card: black,
            reserved: false,
            price: ChipSet::EMPTY.with_copies(Black, 4),
            noble: Some(visiting),
        }]
    );

    let next = game.take_move(&buys[0]).unwrap();
    assert_eq!(next.nobles().len(), 2);
    assert!(!next.nobles().contains(&visiting));
    assert_eq!(next.tableau(Player::One).victory_points(), 6);
}

// =============================================================================
// Game end and the safety valve
// =============================================================================

fn scored(points: u8) -> Tableau {
    Tableau::default()
        .to_builder()
        .add_development(card(points, Color::Black, &[]))
        .build()
}

#[test]
fn test_winner_waits_for_the_round_to_finish() {
    let base = standard_test_game();
    let position = |turn, one: Tableau, two: Tableau| {
        Game::from_parts(
            turn,
            base.developments().clone(),
            base.nobles().iter().copied(),
            *base.chips(),
            PlayerMap::from_values(one, two),
        )
    };

    let crossed = position(Turn::new(6, Player::Two), scored(15), scored(4));
    assert_eq!(crossed.winner(), None);
    assert!(crossed.take_move(&Move::DoNothing).is_ok());

    let finished = position(Turn::new(7, Player::One), scored(15), scored(4));
    assert_eq!(finished.winner(), Some(Player::One));
    assert_eq!(
        finished.take_move(&Move::DoNothing),
        Err(RulesError::GameOver { winner: Player::One })
    );
}

#[test]
fn test_do_nothing_is_the_only_move_when_stuck() {
    let base = standard_test_game();
    let open = test_open_cards();

    let stuck = open[8..11]
        .iter()
        .try_fold(Tableau::default().to_builder(), |builder, card| {
            builder.add_reserved_development(*card)
        })
        .unwrap()
        .build();
    let hoarder = Tableau::default()
        .to_builder()
        .add_chips(&STARTING_CHIPS.regular())
        .build();

    let game = Game::from_parts(
        Turn::new(3, Player::Two),
        base.developments().clone(),
        base.nobles().iter().copied(),
        ChipSet::EMPTY.with_copies(Gold, 5),
        PlayerMap::from_values(hoarder, stuck),
    );

    assert_eq!(game.moves(), vec![Move::DoNothing]);

    let next = game.take_move(&Move::DoNothing).unwrap();
    assert_eq!(next.turn(), Turn::new(4, Player::One));
    assert_eq!(next.chips(), game.chips());
    assert_eq!(next.tableaux(), game.tableaux());
}

#[test]
fn test_every_generated_move_applies() {
    let games = [standard_test_game(), nine_chip_game()];
    for game in &games {
        for m in game.moves() {
            assert!(game.take_move(&m).is_ok(), "{m} failed");
        }
    }
}
