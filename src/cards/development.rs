//! Development cards, rows, and nobles.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorCounts};

/// One of the three development tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Row {
    One,
    Two,
    Three,
}

impl Row {
    /// All rows, cheapest first.
    pub const ALL: [Row; 3] = [Row::One, Row::Two, Row::Three];

    /// Position in `Row::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row from its 1-based number as printed on the cards.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Row::One),
            2 => Some(Row::Two),
            3 => Some(Row::Three),
            _ => None,
        }
    }
}

/// A purchasable card granting victory points and a permanent colour bonus.
///
/// Identity is structural: two cards with identical fields are
/// interchangeable. Cards order by victory points, then colour, then price
/// counts per colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DevelopmentCard {
    pub victory_points: u8,
    pub color: Color,
    pub price: ColorCounts,
}

impl DevelopmentCard {
    #[must_use]
    pub const fn new(victory_points: u8, color: Color, price: ColorCounts) -> Self {
        Self {
            victory_points,
            color,
            price,
        }
    }
}

impl std::fmt::Display for DevelopmentCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} VP, costs {})", self.color, self.victory_points, self.price)
    }
}

/// A bonus tile awarded once a tableau's development colours meet its requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Noble {
    pub victory_points: u8,
    pub requirements: ColorCounts,
}

impl Noble {
    #[must_use]
    pub const fn new(victory_points: u8, requirements: ColorCounts) -> Self {
        Self {
            victory_points,
            requirements,
        }
    }
}

impl std::fmt::Display for Noble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "noble ({} VP, needs {})", self.victory_points, self.requirements)
    }
}
