//! Enumeration of legal token takes, including giving back excess chips.
//!
//! A player near the 10-chip cap must return chips after taking. Both
//! enumerators also produce partial takes: taking `i` fewer chips and
//! returning `i` fewer, for every `i` in `1..=min(take, give)`. A chip colour
//! just taken is never returned in the same move.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::THRESHOLD_TO_TAKE_IDENTICAL_CHIPS;
use crate::core::{ChipColor, ChipSet};

/// One way to take chips from the bank and return chips to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TakeChipsResult {
    pub take: ChipSet,
    pub give: ChipSet,
}

impl TakeChipsResult {
    #[must_use]
    pub const fn new(take: ChipSet, give: ChipSet) -> Self {
        Self { take, give }
    }
}

/// Every way to take `take` chips of distinct non-gold colours from `open`
/// while returning `give` of the player's chips (`mine`).
///
/// Results are sorted and free of duplicates.
///
/// ```
/// use splendid::core::{ChipColor, ChipSet};
/// use splendid::rules::take_different_chips;
///
/// let bank = ChipSet::of(&[ChipColor::Green]);
/// let mine = ChipSet::of(&[ChipColor::Red]);
/// let options = take_different_chips(&bank, &mine, 1, 1);
///
/// // Take nothing, or take a green and give back the red.
/// assert_eq!(options.len(), 2);
/// ```
#[must_use]
pub fn take_different_chips(
    open: &ChipSet,
    mine: &ChipSet,
    take: u32,
    give: u32,
) -> Vec<TakeChipsResult> {
    let mut results = FxHashSet::default();
    collect_different(&open.regular(), mine, take, give, &mut results);
    into_sorted(results)
}

/// Every way to take `take` chips of a single colour, offered only for
/// colours the bank holds at least four of, while returning `give` chips.
///
/// Results are sorted and free of duplicates.
#[must_use]
pub fn take_same_chips(open: &ChipSet, mine: &ChipSet, take: u32, give: u32) -> Vec<TakeChipsResult> {
    let eligible = open
        .regular()
        .entries()
        .filter(|&(_, count)| count >= THRESHOLD_TO_TAKE_IDENTICAL_CHIPS)
        .fold(ChipSet::EMPTY, |set, (chip, count)| set.with_copies(chip, count));

    let mut results = FxHashSet::default();
    collect_same(&eligible, mine, take, give, &mut results);
    into_sorted(results)
}

fn collect_different(
    open: &ChipSet,
    mine: &ChipSet,
    take: u32,
    give: u32,
    results: &mut FxHashSet<TakeChipsResult>,
) {
    for i in 1..=take.min(give) {
        collect_different(open, mine, take - i, give - i, results);
    }

    let colors: SmallVec<[ChipColor; 6]> = open.distinct().collect();
    if colors.len() < take as usize {
        return;
    }

    for option in color_combinations(&colors, take as usize) {
        let taken = ChipSet::of(&option);
        add_give_backs(taken, &mine.without_colors_of(&taken), give, results);
    }
}

fn collect_same(
    open: &ChipSet,
    mine: &ChipSet,
    take: u32,
    give: u32,
    results: &mut FxHashSet<TakeChipsResult>,
) {
    for i in 1..=take.min(give) {
        collect_same(open, mine, take - i, give - i, results);
    }

    for (chip, count) in open.entries() {
        if u32::from(count) < take {
            continue;
        }
        // take never exceeds the two-chip identical take
        let taken = ChipSet::EMPTY.with_copies(chip, take as u8);
        add_give_backs(taken, &mine.without(chip), give, results);
    }
}

fn add_give_backs(
    taken: ChipSet,
    returnable: &ChipSet,
    give: u32,
    results: &mut FxHashSet<TakeChipsResult>,
) {
    for returned in multiset_combinations(returnable, give) {
        results.insert(TakeChipsResult::new(taken, returned));
    }
}

fn into_sorted(results: FxHashSet<TakeChipsResult>) -> Vec<TakeChipsResult> {
    let mut sorted: Vec<_> = results.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// All `k`-element subsets of distinct colours, in lexicographic order.
fn color_combinations(colors: &[ChipColor], k: usize) -> Vec<SmallVec<[ChipColor; 3]>> {
    if k == 0 {
        return vec![SmallVec::new()];
    }
    if colors.len() < k {
        return Vec::new();
    }

    let (first, rest) = (colors[0], &colors[1..]);
    let mut combinations: Vec<SmallVec<[ChipColor; 3]>> = color_combinations(rest, k - 1)
        .into_iter()
        .map(|mut combination| {
            combination.insert(0, first);
            combination
        })
        .collect();
    combinations.extend(color_combinations(rest, k));
    combinations
}

/// All distinct sub-multisets of `chips` with exactly `count` elements.
fn multiset_combinations(chips: &ChipSet, count: u32) -> Vec<ChipSet> {
    if count == 0 {
        return vec![ChipSet::EMPTY];
    }
    if chips.total() < count {
        return Vec::new();
    }

    let Some((chip, copies)) = chips.entries().next() else {
        return Vec::new();
    };
    let rest = chips.without(chip);

    let mut combinations = Vec::new();
    for used in 0..=u32::from(copies).min(count) {
        for combination in multiset_combinations(&rest, count - used) {
            combinations.push(combination.with_copies(chip, used as u8));
        }
    }
    combinations
}
