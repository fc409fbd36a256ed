//! Minimax search with alpha-beta pruning.
//!
//! ## Overview
//!
//! - **Iterative deepening**: depth 1, 2, 3, ... until the tree is solved,
//!   the configured depth is reached, or the operation budget runs out
//! - **Operation budget**: a count of visited positions, not wall-clock time,
//!   so a search is deterministic for a given position and budget
//! - **Graceful degradation**: an interrupted iteration is discarded; the
//!   deepest completed one answers, and with none completed the first legal
//!   move is played
//! - **Move ordering**: purchases, then takes, then reserves, so cutoffs come
//!   early and equal-scoring purchases win ties at the root
//!
//! ## Usage
//!
//! ```rust
//! use splendid::ai::{MinimaxConfig, MinimaxPlayer, ValueFunction};
//! use splendid::cards::GameComponents;
//! use splendid::core::GameRng;
//!
//! let game = GameComponents::standard().unwrap().start_game(&mut GameRng::new(1));
//! let search = MinimaxPlayer::new(ValueFunction::default(), MinimaxConfig::default()).unwrap();
//!
//! let outcome = search.search(&game);
//! println!("{} after {} plies", outcome.best_move, outcome.stats.completed_depth);
//! ```

mod budget;
pub mod config;
pub mod search;
pub mod stats;

pub use config::MinimaxConfig;
pub use search::{Evaluation, MinimaxPlayer, SearchOutcome};
pub use stats::SearchStats;
