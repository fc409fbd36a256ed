//! A player's holdings: chips, owned and reserved developments, nobles.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::MAX_RESERVED_DEVELOPMENTS;
use crate::cards::{DevelopmentCard, Noble};
use crate::core::{ChipColor, ChipSet, Color, ColorCounts};
use crate::error::RulesError;

/// One player's side of the table.
///
/// Immutable. Changes go through [`TableauBuilder`], which checks each
/// precondition and yields a new value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tableau {
    chips: ChipSet,
    developments: Vector<DevelopmentCard>,
    /// Owned development count per colour.
    production: ColorCounts,
    nobles: Vector<Noble>,
    reserved: Vector<DevelopmentCard>,
}

impl Tableau {
    #[must_use]
    pub fn chips(&self) -> &ChipSet {
        &self.chips
    }

    pub fn developments(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.developments.iter()
    }

    #[must_use]
    pub fn development_count(&self) -> usize {
        self.developments.len()
    }

    /// Owned development count per colour.
    #[must_use]
    pub fn production(&self) -> &ColorCounts {
        &self.production
    }

    pub fn nobles(&self) -> impl Iterator<Item = &Noble> {
        self.nobles.iter()
    }

    pub fn reserved_developments(&self) -> impl Iterator<Item = &DevelopmentCard> {
        self.reserved.iter()
    }

    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }

    /// Points from owned developments plus nobles.
    #[must_use]
    pub fn victory_points(&self) -> u32 {
        let developments: u32 = self
            .developments
            .iter()
            .map(|card| u32::from(card.victory_points))
            .sum();
        let nobles: u32 = self
            .nobles
            .iter()
            .map(|noble| u32::from(noble.victory_points))
            .sum();
        developments + nobles
    }

    /// Chips of `color` still needed for `card` once production is counted.
    fn production_shortfall(&self, card: &DevelopmentCard, color: Color) -> u8 {
        card.price
            .count(color)
            .saturating_sub(self.production.count(color))
    }

    /// Whether the card can be paid for, using gold for any shortfall.
    #[must_use]
    pub fn can_afford(&self, card: &DevelopmentCard) -> bool {
        let missing: u32 = Color::ALL
            .into_iter()
            .map(|color| {
                let shortfall = self.production_shortfall(card, color);
                u32::from(shortfall.saturating_sub(self.chips.count(color.to_chip())))
            })
            .sum();
        missing <= u32::from(self.chips.count(ChipColor::Gold))
    }

    /// The cheapest chips to pay for `card`: matching colours first, gold
    /// only for what they cannot cover.
    pub fn minimal_price(&self, card: &DevelopmentCard) -> Result<ChipSet, RulesError> {
        let mut price = ChipSet::EMPTY;
        let mut gold = 0u8;

        for color in Color::ALL {
            let chip = color.to_chip();
            let shortfall = self.production_shortfall(card, color);
            let paid = shortfall.min(self.chips.count(chip));
            price = price.with_copies(chip, paid);
            gold += shortfall - paid;
        }

        if gold > self.chips.count(ChipColor::Gold) {
            return Err(RulesError::CannotAfford(*card));
        }
        Ok(price.with_copies(ChipColor::Gold, gold))
    }

    /// Whether buying `card` brings production up to `noble`'s requirements.
    #[must_use]
    pub fn receives_visit(&self, card: &DevelopmentCard, noble: &Noble) -> bool {
        let production = self.production.with_copies(card.color, 1);
        production.covers(&noble.requirements)
    }

    /// Start a builder from this tableau.
    #[must_use]
    pub fn to_builder(&self) -> TableauBuilder {
        TableauBuilder {
            tableau: self.clone(),
        }
    }
}

/// Validating builder for [`Tableau`] changes.
///
/// ```
/// use splendid::core::{ChipColor, ChipSet};
/// use splendid::rules::Tableau;
///
/// let tableau = Tableau::default()
///     .to_builder()
///     .add_chips(&ChipSet::of(&[ChipColor::Red, ChipColor::Red]))
///     .subtract_chips(&ChipSet::of(&[ChipColor::Red]))
///     .unwrap()
///     .build();
///
/// assert_eq!(tableau.chips().count(ChipColor::Red), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TableauBuilder {
    tableau: Tableau,
}

impl TableauBuilder {
    #[must_use]
    pub fn add_chips(mut self, chips: &ChipSet) -> Self {
        self.tableau.chips = self.tableau.chips.plus(chips);
        self
    }

    /// Remove chips; fails if any are not held.
    pub fn subtract_chips(mut self, chips: &ChipSet) -> Result<Self, RulesError> {
        let held = self.tableau.chips;
        self.tableau.chips = held
            .checked_minus(chips)
            .ok_or(RulesError::InsufficientChips {
                needed: *chips,
                held,
            })?;
        Ok(self)
    }

    #[must_use]
    pub fn add_development(mut self, card: DevelopmentCard) -> Self {
        self.tableau.production = self.tableau.production.with_copies(card.color, 1);
        self.tableau.developments.push_back(card);
        self
    }

    /// Reserve a card; fails once the reserve is full.
    pub fn add_reserved_development(mut self, card: DevelopmentCard) -> Result<Self, RulesError> {
        if self.tableau.reserved.len() >= MAX_RESERVED_DEVELOPMENTS {
            return Err(RulesError::ReserveLimit {
                limit: MAX_RESERVED_DEVELOPMENTS,
            });
        }
        self.tableau.reserved.push_back(card);
        Ok(self)
    }

    /// Remove one copy of a reserved card.
    pub fn remove_reserved_development(mut self, card: &DevelopmentCard) -> Result<Self, RulesError> {
        let position = self
            .tableau
            .reserved
            .index_of(card)
            .ok_or(RulesError::ReservedCardNotFound(*card))?;
        self.tableau.reserved.remove(position);
        Ok(self)
    }

    #[must_use]
    pub fn add_noble(mut self, noble: Noble) -> Self {
        self.tableau.nobles.push_back(noble);
        self
    }

    #[must_use]
    pub fn build(self) -> Tableau {
        self.tableau
    }
}
