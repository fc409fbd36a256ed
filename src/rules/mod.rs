//! Game rules: chip economy, tableaux, moves and the game state machine.
//!
//! Every transition is pure: applying a move returns a new `Game` and leaves
//! the original untouched. Structure is shared between the two through
//! persistent vectors, so search can hold many near-identical positions.

pub mod combinations;
pub mod game;
pub mod moves;
pub mod tableau;

pub use combinations::{take_different_chips, take_same_chips, TakeChipsResult};
pub use game::Game;
pub use moves::Move;
pub use tableau::{Tableau, TableauBuilder};

use crate::core::ChipSet;

/// Victory points needed to trigger the end of the game.
pub const VICTORY_POINT_THRESHOLD: u32 = 15;

/// Most chips a tableau may hold at the end of a turn.
pub const MAX_TOKENS: u32 = 10;

/// Nobles dealt at the start of a game.
pub const NOBLE_COUNT: usize = 3;

/// Victory points every noble is worth.
pub const NOBLE_VICTORY_POINTS: u8 = 3;

/// Visible cards per development row.
pub const OPEN_DEVELOPMENT_CARD_COUNT: usize = 4;

/// Most developments a tableau may hold in reserve.
pub const MAX_RESERVED_DEVELOPMENTS: usize = 3;

/// Bank count a colour needs before two of it may be taken at once.
pub const THRESHOLD_TO_TAKE_IDENTICAL_CHIPS: u8 = 4;

/// Chips taken by a three-colour take.
pub const DIFFERENT_CHIPS_TAKEN: u32 = 3;

/// Chips taken by a single-colour take.
pub const IDENTICAL_CHIPS_TAKEN: u32 = 2;

/// The bank at the start of a two-player game: four of each colour, five gold.
pub const STARTING_CHIPS: ChipSet = ChipSet::from_counts([4, 4, 4, 4, 4, 5]);
