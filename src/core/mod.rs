//! Core types: players, turns, colours, chip multisets, RNG.
//!
//! These are the leaf building blocks every other module is written in terms of.

pub mod chips;
pub mod color;
pub mod player;
pub mod rng;

pub use chips::{ChipSet, ColorCounts};
pub use color::{ChipColor, Color};
pub use player::{Player, PlayerMap, Turn};
pub use rng::GameRng;
