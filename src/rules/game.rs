//! The game state machine: legal move generation and pure transitions.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::combinations::{take_different_chips, take_same_chips, TakeChipsResult};
use super::moves::Move;
use super::tableau::Tableau;
use super::{
    DIFFERENT_CHIPS_TAKEN, IDENTICAL_CHIPS_TAKEN, MAX_RESERVED_DEVELOPMENTS, MAX_TOKENS,
    STARTING_CHIPS, VICTORY_POINT_THRESHOLD,
};
use crate::cards::{DevelopmentCard, Developments, Noble};
use crate::core::{ChipColor, ChipSet, Player, PlayerMap, Turn};
use crate::error::RulesError;

/// A complete, immutable game position.
///
/// Cloning is cheap: card collections are persistent vectors shared between
/// a position and its successors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    turn: Turn,
    developments: Developments,
    nobles: Vector<Noble>,
    chips: ChipSet,
    tableaux: PlayerMap<Tableau>,
}

impl Game {
    /// A fresh game: full bank, empty tableaux, player one to move.
    #[must_use]
    pub fn new(developments: Developments, nobles: Vec<Noble>) -> Self {
        Self::from_parts(
            Turn::START,
            developments,
            nobles,
            STARTING_CHIPS,
            PlayerMap::new(|_| Tableau::default()),
        )
    }

    /// Assemble an arbitrary position. Nothing is validated.
    #[must_use]
    pub fn from_parts(
        turn: Turn,
        developments: Developments,
        nobles: impl IntoIterator<Item = Noble>,
        chips: ChipSet,
        tableaux: PlayerMap<Tableau>,
    ) -> Self {
        Self {
            turn,
            developments,
            nobles: nobles.into_iter().collect(),
            chips,
            tableaux,
        }
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.player
    }

    #[must_use]
    pub fn developments(&self) -> &Developments {
        &self.developments
    }

    /// Nobles still available.
    #[must_use]
    pub fn nobles(&self) -> &Vector<Noble> {
        &self.nobles
    }

    /// The bank.
    #[must_use]
    pub fn chips(&self) -> &ChipSet {
        &self.chips
    }

    /// The bank without gold.
    #[must_use]
    pub fn regular_chips(&self) -> ChipSet {
        self.chips.regular()
    }

    #[must_use]
    pub fn tableau(&self, player: Player) -> &Tableau {
        &self.tableaux[player]
    }

    #[must_use]
    pub fn tableaux(&self) -> &PlayerMap<Tableau> {
        &self.tableaux
    }

    /// The same position over different development decks.
    #[must_use]
    pub fn with_developments(&self, developments: Developments) -> Game {
        Game {
            developments,
            ..self.clone()
        }
    }

    /// The winner, decided only once both players have had the same number
    /// of turns.
    ///
    /// More victory points wins, then fewer developments. A full tie goes to
    /// player two.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if self.turn.player != Player::One {
            return None;
        }

        let one = &self.tableaux[Player::One];
        let two = &self.tableaux[Player::Two];
        let (one_points, two_points) = (one.victory_points(), two.victory_points());
        if one_points.max(two_points) < VICTORY_POINT_THRESHOLD {
            return None;
        }

        let winner = match one_points.cmp(&two_points) {
            std::cmp::Ordering::Greater => Player::One,
            std::cmp::Ordering::Less => Player::Two,
            std::cmp::Ordering::Equal => {
                if one.development_count() < two.development_count() {
                    Player::One
                } else {
                    Player::Two
                }
            }
        };
        Some(winner)
    }

    /// Every legal move for the player to move. Never empty.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        let tableau = &self.tableaux[self.turn.player];

        let mut moves = self.take_chip_moves(tableau);
        moves.extend(self.buy_moves(tableau));
        moves.extend(self.reserve_moves(tableau));

        if moves.is_empty() {
            moves.push(Move::DoNothing);
        }
        moves
    }

    fn take_chip_moves(&self, tableau: &Tableau) -> Vec<Move> {
        let available = self.regular_chips();
        let colors = available.distinct().count() as u32;
        if colors == 0 {
            return Vec::new();
        }

        let mine = tableau.chips();
        let take = colors.min(DIFFERENT_CHIPS_TAKEN);
        let mut results = take_different_chips(&available, mine, take, give_back(mine, take));
        results.extend(take_same_chips(
            &available,
            mine,
            IDENTICAL_CHIPS_TAKEN,
            give_back(mine, IDENTICAL_CHIPS_TAKEN),
        ));

        let mut seen = FxHashSet::default();
        results
            .into_iter()
            .filter(|result| seen.insert(*result))
            .map(|TakeChipsResult { take, give }| Move::take_tokens(take, give))
            .collect()
    }

    fn buy_moves(&self, tableau: &Tableau) -> Vec<Move> {
        let visible = self.developments.cards().map(|card| (card, false));
        let reserved = tableau.reserved_developments().map(|card| (card, true));

        visible
            .chain(reserved)
            .flat_map(|(card, reserved)| self.moves_to_buy(tableau, card, reserved))
            .collect()
    }

    fn moves_to_buy(&self, tableau: &Tableau, card: &DevelopmentCard, reserved: bool) -> Vec<Move> {
        if !tableau.can_afford(card) {
            return Vec::new();
        }
        let Ok(price) = tableau.minimal_price(card) else {
            return Vec::new();
        };

        let buy = |noble| Move::BuyDevelopment {
            card: *card,
            reserved,
            price,
            noble,
        };

        let visits: Vec<Move> = self
            .nobles
            .iter()
            .filter(|noble| tableau.receives_visit(card, noble))
            .map(|noble| buy(Some(*noble)))
            .collect();

        if visits.is_empty() {
            vec![buy(None)]
        } else {
            visits
        }
    }

    fn reserve_moves(&self, tableau: &Tableau) -> Vec<Move> {
        if tableau.reserved_count() >= MAX_RESERVED_DEVELOPMENTS {
            return Vec::new();
        }
        self.developments
            .cards()
            .map(|card| Move::ReserveDevelopment { card: *card })
            .collect()
    }

    /// Apply a move for the player to move, returning the next position.
    pub fn take_move(&self, m: &Move) -> Result<Game, RulesError> {
        if let Some(winner) = self.winner() {
            return Err(RulesError::GameOver { winner });
        }

        let player = self.turn.player;
        let tableau = &self.tableaux[player];

        let next = match *m {
            Move::TakeTokens { tokens, returned } => {
                let tableau = tableau
                    .to_builder()
                    .add_chips(&tokens)
                    .subtract_chips(&returned)?
                    .build();
                Game {
                    chips: self.withdraw(&tokens)?.plus(&returned),
                    tableaux: self.tableaux.with(player, tableau),
                    ..self.clone()
                }
            }

            Move::ReserveDevelopment { card } => {
                let gold = if self.chips.count(ChipColor::Gold) > 0 {
                    ChipSet::of(&[ChipColor::Gold])
                } else {
                    ChipSet::EMPTY
                };
                let tableau = tableau
                    .to_builder()
                    .add_reserved_development(card)?
                    .add_chips(&gold)
                    .build();
                Game {
                    developments: self.developments.remove_card(&card)?,
                    chips: self.withdraw(&gold)?,
                    tableaux: self.tableaux.with(player, tableau),
                    ..self.clone()
                }
            }

            Move::BuyDevelopment {
                card,
                reserved,
                price,
                noble,
            } => {
                let mut builder = tableau.to_builder().subtract_chips(&price)?;
                let developments = if reserved {
                    builder = builder.remove_reserved_development(&card)?;
                    self.developments.clone()
                } else {
                    self.developments.remove_card(&card)?
                };
                builder = builder.add_development(card);

                let mut nobles = self.nobles.clone();
                if let Some(noble) = noble {
                    let position = nobles
                        .index_of(&noble)
                        .ok_or(RulesError::NobleNotAvailable(noble))?;
                    nobles.remove(position);
                    builder = builder.add_noble(noble);
                }

                Game {
                    developments,
                    nobles,
                    chips: self.chips.plus(&price),
                    tableaux: self.tableaux.with(player, builder.build()),
                    ..self.clone()
                }
            }

            Move::DoNothing => self.clone(),
        };

        Ok(Game {
            turn: self.turn.next(),
            ..next
        })
    }

    /// Move chips from the bank to a player without using a turn.
    ///
    /// For setting up positions; ignores the chip cap.
    pub fn take_chips(&self, player: Player, chips: &ChipSet) -> Result<Game, RulesError> {
        let tableau = self.tableaux[player].to_builder().add_chips(chips).build();
        Ok(Game {
            chips: self.withdraw(chips)?,
            tableaux: self.tableaux.with(player, tableau),
            ..self.clone()
        })
    }

    fn withdraw(&self, chips: &ChipSet) -> Result<ChipSet, RulesError> {
        self.chips
            .checked_minus(chips)
            .ok_or(RulesError::InsufficientChips {
                needed: *chips,
                held: self.chips,
            })
    }
}

/// Chips a player holding `held` must return after taking `taking` more.
fn give_back(held: &ChipSet, taking: u32) -> u32 {
    (held.total() + taking).saturating_sub(MAX_TOKENS)
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn {}, bank {}", self.turn, self.chips)?;
        for (player, tableau) in self.tableaux.iter() {
            write!(
                f,
                "; {player}: {} VP, {} developments, {} reserved, chips {}",
                tableau.victory_points(),
                tableau.development_count(),
                tableau.reserved_count(),
                tableau.chips()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, DevelopmentRow};
    use crate::core::{Color, ColorCounts};

    fn card(vp: u8, color: Color, price: &[(Color, u8)]) -> DevelopmentCard {
        DevelopmentCard::new(vp, color, ColorCounts::of(price))
    }

    fn small_game() -> Game {
        let rows = [
            DevelopmentRow::new(
                [card(0, Color::Red, &[(Color::White, 3)]), card(0, Color::Blue, &[(Color::Black, 3)])],
                Deck::new([card(0, Color::Green, &[(Color::Red, 3)])]),
            ),
            DevelopmentRow::new([card(2, Color::Black, &[(Color::Green, 5)])], Deck::default()),
            DevelopmentRow::new([card(4, Color::White, &[(Color::Red, 7)])], Deck::default()),
        ];
        let nobles = vec![Noble::new(3, ColorCounts::of(&[(Color::Red, 1)]))];
        Game::new(Developments::new(rows), nobles)
    }

    fn points(vp: u8, developments: usize) -> Tableau {
        let mut builder = Tableau::default().to_builder();
        for i in 0..developments {
            let value = if i == 0 { vp } else { 0 };
            builder = builder.add_development(card(value, Color::Red, &[]));
        }
        builder.build()
    }

    fn with_tableaux(game: &Game, turn: Turn, one: Tableau, two: Tableau) -> Game {
        Game::from_parts(
            turn,
            game.developments().clone(),
            game.nobles().iter().copied(),
            *game.chips(),
            PlayerMap::new(|player| if player == Player::One { one.clone() } else { two.clone() }),
        )
    }

    #[test]
    fn test_no_winner_on_second_players_turn() {
        let game = small_game();
        let position = with_tableaux(&game, Turn::new(4, Player::Two), points(15, 1), points(0, 0));
        assert_eq!(position.winner(), None);

        let completed = with_tableaux(&game, Turn::new(5, Player::One), points(15, 1), points(0, 0));
        assert_eq!(completed.winner(), Some(Player::One));
    }

    #[test]
    fn test_winner_tie_breaks() {
        let game = small_game();
        let turn = Turn::new(8, Player::One);

        let more_points = with_tableaux(&game, turn, points(15, 1), points(16, 1));
        assert_eq!(more_points.winner(), Some(Player::Two));

        let fewer_cards = with_tableaux(&game, turn, points(15, 2), points(15, 3));
        assert_eq!(fewer_cards.winner(), Some(Player::One));

        let full_tie = with_tableaux(&game, turn, points(15, 2), points(15, 2));
        assert_eq!(full_tie.winner(), Some(Player::Two));
    }

    #[test]
    fn test_take_move_after_game_over() {
        let game = small_game();
        let finished = with_tableaux(&game, Turn::new(3, Player::One), points(0, 0), points(15, 1));
        assert_eq!(
            finished.take_move(&Move::DoNothing),
            Err(RulesError::GameOver { winner: Player::Two })
        );
    }

    #[test]
    fn test_take_chips_does_not_advance_turn() {
        let game = small_game();
        let next = game
            .take_chips(Player::Two, &ChipSet::of(&[ChipColor::Gold]))
            .unwrap();

        assert_eq!(next.turn(), Turn::START);
        assert_eq!(next.chips().count(ChipColor::Gold), 4);
        assert_eq!(next.tableau(Player::Two).chips().count(ChipColor::Gold), 1);
    }

    #[test]
    fn test_take_chips_over_bank() {
        let game = small_game();
        let greedy = ChipSet::EMPTY.with_copies(ChipColor::Red, 5);
        assert!(matches!(
            game.take_chips(Player::One, &greedy),
            Err(RulesError::InsufficientChips { .. })
        ));
    }

    #[test]
    fn test_buy_with_noble() {
        let game = small_game()
            .take_chips(Player::One, &ChipSet::of(&[ChipColor::White; 3]))
            .unwrap();
        let red = card(0, Color::Red, &[(Color::White, 3)]);

        let buys: Vec<Move> = game.moves().into_iter().filter(Move::is_buy).collect();
        let noble = game.nobles()[0];
        assert_eq!(
            buys,
            vec![Move::BuyDevelopment {
                card: red,
                reserved: false,
                price: ChipSet::of(&[ChipColor::White; 3]),
                noble: Some(noble),
            }]
        );

        let next = game.take_move(&buys[0]).unwrap();
        assert!(next.nobles().is_empty());
        assert_eq!(next.tableau(Player::One).victory_points(), 3);
        assert_eq!(next.chips(), &STARTING_CHIPS);
        assert!(next.developments().row(crate::cards::Row::One).contains(&card(0, Color::Green, &[(Color::Red, 3)])));
    }

    #[test]
    fn test_buy_reserved_card() {
        let blue = card(0, Color::Blue, &[(Color::Black, 3)]);
        let game = small_game()
            .take_move(&Move::ReserveDevelopment { card: blue })
            .and_then(|g| g.take_move(&Move::DoNothing))
            .and_then(|g| g.take_chips(Player::One, &ChipSet::of(&[ChipColor::Black; 2])))
            .unwrap();

        let buy = Move::BuyDevelopment {
            card: blue,
            reserved: true,
            price: ChipSet::of(&[ChipColor::Black, ChipColor::Black, ChipColor::Gold]),
            noble: None,
        };
        assert!(game.moves().contains(&buy));

        let next = game.take_move(&buy).unwrap();
        let tableau = next.tableau(Player::One);
        assert_eq!(tableau.reserved_count(), 0);
        assert_eq!(tableau.development_count(), 1);
        assert!(tableau.chips().is_empty());
        assert_eq!(next.chips(), &STARTING_CHIPS);
    }

    #[test]
    fn test_unknown_noble_rejected() {
        let game = small_game()
            .take_chips(Player::One, &ChipSet::of(&[ChipColor::White; 3]))
            .unwrap();
        let stranger = Noble::new(3, ColorCounts::of(&[(Color::Green, 4)]));
        let buy = Move::BuyDevelopment {
            card: card(0, Color::Red, &[(Color::White, 3)]),
            reserved: false,
            price: ChipSet::of(&[ChipColor::White; 3]),
            noble: Some(stranger),
        };
        assert_eq!(game.take_move(&buy), Err(RulesError::NobleNotAvailable(stranger)));
    }

    #[test]
    fn test_reserve_without_gold() {
        let game = small_game()
            .take_chips(Player::Two, &ChipSet::EMPTY.with_copies(ChipColor::Gold, 5))
            .unwrap();
        let target = card(4, Color::White, &[(Color::Red, 7)]);

        let next = game.take_move(&Move::ReserveDevelopment { card: target }).unwrap();
        assert!(next.tableau(Player::One).chips().is_empty());
        assert_eq!(next.tableau(Player::One).reserved_count(), 1);
        // empty deck, so the row shrinks
        assert!(next.developments().row(crate::cards::Row::Three).is_empty());
    }

    #[test]
    fn test_no_take_moves_from_gold_only_bank() {
        let game = small_game()
            .take_chips(Player::Two, &STARTING_CHIPS.regular())
            .unwrap();
        assert!(!game
            .moves()
            .iter()
            .any(|m| matches!(m, Move::TakeTokens { .. })));
    }

    #[test]
    fn test_give_back() {
        let nine = ChipSet::EMPTY.with_copies(ChipColor::Green, 9);
        assert_eq!(give_back(&nine, 3), 2);
        assert_eq!(give_back(&ChipSet::EMPTY, 3), 0);
    }

    #[test]
    fn test_display_summary() {
        let text = small_game().to_string();
        assert!(text.starts_with("turn 0, bank"));
        assert!(text.contains("Player Two: 0 VP"));
    }
}
