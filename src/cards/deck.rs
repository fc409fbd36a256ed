//! Decks, development rows, and the central display.
//!
//! All three are persistent values backed by `im::Vector`: removing a card
//! returns a new value and leaves the old one untouched, sharing structure.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::development::{DevelopmentCard, Row};
use crate::error::RulesError;

/// A face-down stack of development cards. The last element is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<DevelopmentCard>,
}

impl Deck {
    /// Create a deck; the last card is on top.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = DevelopmentCard>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draw the top card, returning it and the remaining deck.
    pub fn draw(&self) -> Result<(DevelopmentCard, Deck), RulesError> {
        let mut rest = self.cards.clone();
        let card = rest.pop_back().ok_or(RulesError::EmptyDeck)?;
        Ok((card, Deck { cards: rest }))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Cards from bottom to top.
    pub fn cards(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.cards.iter()
    }

    /// A deck with the same cards in a new order.
    #[must_use]
    pub fn reorder(&self, order: Vec<DevelopmentCard>) -> Deck {
        debug_assert_eq!(order.len(), self.cards.len());
        Deck::new(order)
    }
}

/// The visible cards of one tier, paired with that tier's deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevelopmentRow {
    cards: Vector<DevelopmentCard>,
    deck: Deck,
}

impl DevelopmentRow {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = DevelopmentCard>, deck: Deck) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            deck,
        }
    }

    /// Visible cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn contains(&self, card: &DevelopmentCard) -> bool {
        self.cards.contains(card)
    }

    /// Remove one copy of a visible card and refill from the deck if possible.
    pub fn remove_card(&self, card: &DevelopmentCard) -> Result<DevelopmentRow, RulesError> {
        let position = self
            .cards
            .index_of(card)
            .ok_or(RulesError::CardNotFound(*card))?;

        let mut cards = self.cards.clone();
        cards.remove(position);

        if self.deck.is_empty() {
            return Ok(DevelopmentRow {
                cards,
                deck: self.deck.clone(),
            });
        }

        let (drawn, deck) = self.deck.draw()?;
        cards.push_back(drawn);
        Ok(DevelopmentRow { cards, deck })
    }

    /// Same visible cards over a different deck.
    #[must_use]
    pub fn with_deck(&self, deck: Deck) -> DevelopmentRow {
        DevelopmentRow {
            cards: self.cards.clone(),
            deck,
        }
    }
}

/// The centre of the table: one `DevelopmentRow` per tier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Developments {
    rows: [DevelopmentRow; 3],
}

impl Developments {
    #[must_use]
    pub fn new(rows: [DevelopmentRow; 3]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn row(&self, row: Row) -> &DevelopmentRow {
        &self.rows[row.index()]
    }

    /// All visible cards, row by row.
    pub fn cards(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.rows.iter().flat_map(DevelopmentRow::cards)
    }

    /// Every card still on the table, visible or in a deck.
    pub fn all_cards(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.rows
            .iter()
            .flat_map(|row| row.cards().chain(row.deck().cards()))
    }

    /// Remove a visible card from whichever row shows it.
    pub fn remove_card(&self, card: &DevelopmentCard) -> Result<Developments, RulesError> {
        let index = self
            .rows
            .iter()
            .position(|row| row.contains(card))
            .ok_or(RulesError::CardNotFound(*card))?;

        let mut rows = self.rows.clone();
        rows[index] = self.rows[index].remove_card(card)?;
        Ok(Developments { rows })
    }

    /// Replace every deck, keeping the visible cards.
    #[must_use]
    pub fn map_decks(&self, mut f: impl FnMut(Row, &Deck) -> Deck) -> Developments {
        let rows = Row::ALL.map(|row| {
            let current = self.row(row);
            current.with_deck(f(row, current.deck()))
        });
        Developments { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ColorCounts};

    fn card(vp: u8, color: Color) -> DevelopmentCard {
        DevelopmentCard::new(vp, color, ColorCounts::of(&[(Color::Red, vp + 1)]))
    }

    #[test]
    fn test_draw_takes_last_card() {
        let deck = Deck::new([card(0, Color::Red), card(1, Color::Blue)]);
        let (drawn, rest) = deck.draw().unwrap();

        assert_eq!(drawn, card(1, Color::Blue));
        assert_eq!(rest.len(), 1);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_draw_empty_deck() {
        assert_eq!(Deck::default().draw(), Err(RulesError::EmptyDeck));
    }

    #[test]
    fn test_remove_refills_from_deck() {
        let row = DevelopmentRow::new(
            [card(0, Color::Red), card(0, Color::Green)],
            Deck::new([card(2, Color::White)]),
        );

        let next = row.remove_card(&card(0, Color::Red)).unwrap();
        assert_eq!(next.len(), 2);
        assert!(next.contains(&card(2, Color::White)));
        assert!(next.deck().is_empty());
    }

    #[test]
    fn test_remove_from_empty_deck_shrinks_row() {
        let row = DevelopmentRow::new([card(0, Color::Red), card(0, Color::Green)], Deck::default());

        let next = row.remove_card(&card(0, Color::Green)).unwrap();
        assert_eq!(next.len(), 1);
        assert!(!next.contains(&card(0, Color::Green)));
    }

    #[test]
    fn test_remove_missing_card() {
        let row = DevelopmentRow::new([card(0, Color::Red)], Deck::default());
        let missing = card(3, Color::Black);
        assert_eq!(row.remove_card(&missing), Err(RulesError::CardNotFound(missing)));
    }

    #[test]
    fn test_developments_remove_card_touches_one_row() {
        let developments = Developments::new([
            DevelopmentRow::new([card(0, Color::Red)], Deck::default()),
            DevelopmentRow::new([card(1, Color::Red)], Deck::new([card(1, Color::Blue)])),
            DevelopmentRow::new([card(2, Color::Red)], Deck::default()),
        ]);

        let next = developments.remove_card(&card(1, Color::Red)).unwrap();
        assert_eq!(next.row(Row::One), developments.row(Row::One));
        assert_eq!(next.row(Row::Two).cards().copied().collect::<Vec<_>>(), vec![card(1, Color::Blue)]);
        assert_eq!(next.all_cards().count(), 3);
    }
}
