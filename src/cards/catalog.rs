//! The card and noble catalog, and game setup from it.
//!
//! The standard catalog is embedded as CSV text:
//!
//! - developments: `row,green,blue,red,white,black,colour,victory points`
//! - nobles: `green,blue,red,white,black`
//!
//! Empty price cells mean zero.

use serde::{Deserialize, Serialize};

use super::deck::{Deck, DevelopmentRow, Developments};
use super::development::{DevelopmentCard, Noble, Row};
use crate::core::{Color, ColorCounts, GameRng};
use crate::rules::{Game, NOBLE_COUNT, NOBLE_VICTORY_POINTS, OPEN_DEVELOPMENT_CARD_COUNT};

const STANDARD_DEVELOPMENTS: &str = include_str!("../../data/developments.csv");
const STANDARD_NOBLES: &str = include_str!("../../data/nobles.csv");

/// Errors raised while loading a catalog or dealing a game from it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unknown colour {value:?}")]
    UnknownColor { line: usize, value: String },

    #[error("line {line}: unknown row {value}")]
    UnknownRow { line: usize, value: u8 },

    #[error("row {row:?} has {found} cards, needs at least {needed}")]
    TooFewCards { row: Row, found: usize, needed: usize },

    #[error("catalog has {found} nobles, needs at least {needed}")]
    TooFewNobles { found: usize, needed: usize },

    #[error("development {0} is not in the catalog")]
    UnknownDevelopment(DevelopmentCard),

    #[error("development {0} was dealt more often than the catalog holds it")]
    NoCopiesLeft(DevelopmentCard),

    #[error("row {row:?} was dealt {found} open cards, expected {expected}")]
    WrongOpenCount { row: Row, found: usize, expected: usize },
}

/// The full set of components a game is dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameComponents {
    developments: [Vec<DevelopmentCard>; 3],
    nobles: Vec<Noble>,
}

impl GameComponents {
    /// Build a catalog, checking it has enough cards and nobles to deal a game.
    pub fn new(
        developments: [Vec<DevelopmentCard>; 3],
        nobles: Vec<Noble>,
    ) -> Result<Self, CatalogError> {
        for row in Row::ALL {
            let found = developments[row.index()].len();
            if found < OPEN_DEVELOPMENT_CARD_COUNT {
                return Err(CatalogError::TooFewCards {
                    row,
                    found,
                    needed: OPEN_DEVELOPMENT_CARD_COUNT,
                });
            }
        }
        if nobles.len() < NOBLE_COUNT {
            return Err(CatalogError::TooFewNobles {
                found: nobles.len(),
                needed: NOBLE_COUNT,
            });
        }
        Ok(Self {
            developments,
            nobles,
        })
    }

    /// The standard 90-card, 10-noble catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_csv(STANDARD_DEVELOPMENTS, STANDARD_NOBLES)
    }

    /// Parse a catalog from development and noble CSV text.
    pub fn from_csv(developments: &str, nobles: &str) -> Result<Self, CatalogError> {
        let mut rows: [Vec<DevelopmentCard>; 3] = Default::default();
        for (line, text) in non_blank_lines(developments) {
            let (row, card) = parse_development(line, text)?;
            rows[row.index()].push(card);
        }

        let nobles = non_blank_lines(nobles)
            .map(|(line, text)| parse_noble(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows, nobles)
    }

    /// Cards belonging to one row.
    #[must_use]
    pub fn developments(&self, row: Row) -> &[DevelopmentCard] {
        &self.developments[row.index()]
    }

    #[must_use]
    pub fn nobles(&self) -> &[Noble] {
        &self.nobles
    }

    /// Every development card in the catalog.
    pub fn all_developments(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.developments.iter().flatten()
    }

    /// Shuffle every row and the nobles, then deal a new game.
    #[must_use]
    pub fn start_game(&self, rng: &mut GameRng) -> Game {
        let rows = Row::ALL.map(|row| {
            let mut cards = self.developments(row).to_vec();
            rng.shuffle(&mut cards);
            let deck = Deck::new(cards[OPEN_DEVELOPMENT_CARD_COUNT..].iter().copied());
            DevelopmentRow::new(cards[..OPEN_DEVELOPMENT_CARD_COUNT].iter().copied(), deck)
        });

        let mut nobles = self.nobles.clone();
        rng.shuffle(&mut nobles);
        nobles.truncate(NOBLE_COUNT);

        Game::new(Developments::new(rows), nobles)
    }

    /// Deal a fixed game: the given open cards and nobles, with each deck
    /// holding that row's remaining cards in card order (highest on top).
    ///
    /// Always returns the same game for the same input.
    pub fn start_fixed_game(
        &self,
        open_cards: &[DevelopmentCard],
        nobles: &[Noble],
    ) -> Result<Game, CatalogError> {
        let mut open: [Vec<DevelopmentCard>; 3] = Default::default();
        let mut remaining: [Vec<DevelopmentCard>; 3] =
            Row::ALL.map(|row| self.developments(row).to_vec());
        for card in open_cards {
            let row = Row::ALL
                .into_iter()
                .find(|row| self.developments(*row).contains(card))
                .ok_or(CatalogError::UnknownDevelopment(*card))?;

            // one catalog copy per dealt card
            let left = &mut remaining[row.index()];
            let position = left
                .iter()
                .position(|candidate| candidate == card)
                .ok_or(CatalogError::NoCopiesLeft(*card))?;
            left.remove(position);
            open[row.index()].push(*card);
        }

        for row in Row::ALL {
            let found = open[row.index()].len();
            if found != OPEN_DEVELOPMENT_CARD_COUNT {
                return Err(CatalogError::WrongOpenCount {
                    row,
                    found,
                    expected: OPEN_DEVELOPMENT_CARD_COUNT,
                });
            }
        }

        let rows = Row::ALL.map(|row| {
            let mut deck = std::mem::take(&mut remaining[row.index()]);
            deck.sort();
            DevelopmentRow::new(open[row.index()].iter().copied(), Deck::new(deck))
        });

        Ok(Game::new(Developments::new(rows), nobles.to_vec()))
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_count(line: usize, value: &str) -> Result<u8, CatalogError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| CatalogError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_counts(line: usize, fields: &[&str]) -> Result<ColorCounts, CatalogError> {
    let mut counts = ColorCounts::EMPTY;
    for (color, field) in Color::ALL.into_iter().zip(fields) {
        counts = counts.with_copies(color, parse_count(line, field)?);
    }
    Ok(counts)
}

fn parse_development(line: usize, text: &str) -> Result<(Row, DevelopmentCard), CatalogError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 8 {
        return Err(CatalogError::FieldCount {
            line,
            expected: 8,
            found: fields.len(),
        });
    }

    let number = parse_count(line, fields[0])?;
    let row = Row::from_number(number).ok_or(CatalogError::UnknownRow { line, value: number })?;
    let price = parse_counts(line, &fields[1..6])?;
    let color = Color::from_name(fields[6]).ok_or_else(|| CatalogError::UnknownColor {
        line,
        value: fields[6].to_string(),
    })?;
    let victory_points = parse_count(line, fields[7])?;

    Ok((row, DevelopmentCard::new(victory_points, color, price)))
}

fn parse_noble(line: usize, text: &str) -> Result<Noble, CatalogError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 5 {
        return Err(CatalogError::FieldCount {
            line,
            expected: 5,
            found: fields.len(),
        });
    }
    Ok(Noble::new(NOBLE_VICTORY_POINTS, parse_counts(line, &fields)?))
}
