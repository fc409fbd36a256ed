//! Multisets of chips and colours.
//!
//! Both are fixed-size count arrays: `Copy`, hashable and totally ordered,
//! so moves that carry them can be sorted, deduplicated and used as map keys.

use serde::{Deserialize, Serialize};

use super::color::{ChipColor, Color};

/// A multiset of chips, one count per `ChipColor`.
///
/// ```
/// use splendid::core::{ChipColor, ChipSet};
///
/// let taken = ChipSet::of(&[ChipColor::Red, ChipColor::Red, ChipColor::Black]);
/// assert_eq!(taken.count(ChipColor::Red), 2);
/// assert_eq!(taken.total(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChipSet {
    counts: [u8; 6],
}

impl ChipSet {
    /// The empty multiset.
    pub const EMPTY: ChipSet = ChipSet { counts: [0; 6] };

    /// Build from raw counts in `ChipColor::ALL` order.
    #[must_use]
    pub const fn from_counts(counts: [u8; 6]) -> Self {
        Self { counts }
    }

    /// Build from a list of chips, counting repeats.
    #[must_use]
    pub fn of(chips: &[ChipColor]) -> Self {
        chips
            .iter()
            .fold(Self::EMPTY, |set, &chip| set.with_copies(chip, 1))
    }

    /// Number of chips of one colour.
    #[must_use]
    pub const fn count(&self, chip: ChipColor) -> u8 {
        self.counts[chip.index()]
    }

    /// Total number of chips.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Whether no chips are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Add `copies` chips of one colour.
    #[must_use]
    pub fn with_copies(mut self, chip: ChipColor, copies: u8) -> Self {
        self.counts[chip.index()] += copies;
        self
    }

    /// Remove every chip of one colour.
    #[must_use]
    pub fn without(mut self, chip: ChipColor) -> Self {
        self.counts[chip.index()] = 0;
        self
    }

    /// Remove every chip whose colour appears in `other`.
    #[must_use]
    pub fn without_colors_of(&self, other: &ChipSet) -> Self {
        other
            .distinct()
            .fold(*self, |set, chip| set.without(chip))
    }

    /// Only the non-gold chips.
    #[must_use]
    pub fn regular(&self) -> Self {
        self.without(ChipColor::Gold)
    }

    /// Multiset sum.
    #[must_use]
    pub fn plus(&self, other: &ChipSet) -> Self {
        let mut counts = self.counts;
        for (count, add) in counts.iter_mut().zip(other.counts) {
            *count += add;
        }
        Self { counts }
    }

    /// Multiset difference, or `None` if `other` is not contained in `self`.
    #[must_use]
    pub fn checked_minus(&self, other: &ChipSet) -> Option<Self> {
        let mut counts = self.counts;
        for (count, sub) in counts.iter_mut().zip(other.counts) {
            *count = count.checked_sub(sub)?;
        }
        Some(Self { counts })
    }

    /// Whether every chip in `other` is also in `self`, with multiplicity.
    #[must_use]
    pub fn contains_all(&self, other: &ChipSet) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Whether `self` and `other` share any colour.
    #[must_use]
    pub fn overlaps(&self, other: &ChipSet) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .any(|(&a, &b)| a > 0 && b > 0)
    }

    /// Colours present at least once, in canonical order.
    pub fn distinct(&self) -> impl Iterator<Item = ChipColor> + '_ {
        ChipColor::ALL
            .into_iter()
            .filter(move |&chip| self.count(chip) > 0)
    }

    /// (colour, count) pairs for colours present, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (ChipColor, u8)> + '_ {
        self.distinct().map(move |chip| (chip, self.count(chip)))
    }
}

impl std::fmt::Display for ChipSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (chip, count) in self.entries() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{count} {chip}")?;
        }
        write!(f, "}}")
    }
}

/// A multiset of card colours: prices, noble requirements, production.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorCounts {
    counts: [u8; 5],
}

impl ColorCounts {
    /// The empty multiset.
    pub const EMPTY: ColorCounts = ColorCounts { counts: [0; 5] };

    /// Build from raw counts in `Color::ALL` order.
    #[must_use]
    pub const fn from_counts(counts: [u8; 5]) -> Self {
        Self { counts }
    }

    /// Build from (colour, copies) pairs.
    #[must_use]
    pub fn of(pairs: &[(Color, u8)]) -> Self {
        pairs
            .iter()
            .fold(Self::EMPTY, |set, &(color, copies)| set.with_copies(color, copies))
    }

    /// Number of copies of one colour.
    #[must_use]
    pub const fn count(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    /// Total number of elements.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Add `copies` of one colour.
    #[must_use]
    pub fn with_copies(mut self, color: Color, copies: u8) -> Self {
        self.counts[color.index()] += copies;
        self
    }

    /// Whether every count in `self` meets or exceeds the one in `required`.
    #[must_use]
    pub fn covers(&self, required: &ColorCounts) -> bool {
        self.counts
            .iter()
            .zip(required.counts.iter())
            .all(|(have, need)| have >= need)
    }

    /// (colour, count) pairs for colours present, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (Color, u8)> + '_ {
        Color::ALL
            .into_iter()
            .filter(move |&c| self.count(c) > 0)
            .map(move |c| (c, self.count(c)))
    }
}

impl std::fmt::Display for ColorCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries()
            .map(|(color, count)| format!("{count} {color}"))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
