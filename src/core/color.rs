//! Card colours and chip colours.
//!
//! Every `Color` has a matching `ChipColor`. `ChipColor::Gold` is the wild
//! chip and has no `Color` counterpart.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// The colours development cards produce and prices are paid in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Blue,
    Red,
    White,
    Black,
}

impl Color {
    /// All colours in canonical order.
    pub const ALL: [Color; 5] = [
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::White,
        Color::Black,
    ];

    /// Position in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The chip of the same colour.
    #[must_use]
    pub const fn to_chip(self) -> ChipColor {
        match self {
            Color::Green => ChipColor::Green,
            Color::Blue => ChipColor::Blue,
            Color::Red => ChipColor::Red,
            Color::White => ChipColor::White,
            Color::Black => ChipColor::Black,
        }
    }

    /// Parse a case-insensitive colour name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Lower-case colour name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Red => "red",
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The colours chips come in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChipColor {
    Green,
    Blue,
    Red,
    White,
    Black,
    Gold,
}

impl ChipColor {
    /// All chip colours in canonical order, gold last.
    pub const ALL: [ChipColor; 6] = [
        ChipColor::Green,
        ChipColor::Blue,
        ChipColor::Red,
        ChipColor::White,
        ChipColor::Black,
        ChipColor::Gold,
    ];

    /// Chip colours that can be taken from the bank directly.
    pub const REGULAR: [ChipColor; 5] = [
        ChipColor::Green,
        ChipColor::Blue,
        ChipColor::Red,
        ChipColor::White,
        ChipColor::Black,
    ];

    /// Position in `ChipColor::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The card colour of a non-gold chip.
    pub fn to_color(self) -> Result<Color, RulesError> {
        match self {
            ChipColor::Green => Ok(Color::Green),
            ChipColor::Blue => Ok(Color::Blue),
            ChipColor::Red => Ok(Color::Red),
            ChipColor::White => Ok(Color::White),
            ChipColor::Black => Ok(Color::Black),
            ChipColor::Gold => Err(RulesError::GoldHasNoColor),
        }
    }
}

impl From<Color> for ChipColor {
    fn from(color: Color) -> Self {
        color.to_chip()
    }
}

impl std::fmt::Display for ChipColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_color() {
            Ok(color) => f.write_str(color.name()),
            Err(_) => f.write_str("gold"),
        }
    }
}
