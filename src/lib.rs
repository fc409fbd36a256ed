//! # splendid
//!
//! A two-player Splendor-style board game engine with search-based AI.
//!
//! ## Design Principles
//!
//! 1. **Immutable Positions**: Applying a move returns a new `Game`.
//!    Persistent vectors from `im-rs` make that cheap enough for tree search.
//!
//! 2. **Enumerable Rules**: `Game::moves` lists every legal move, including
//!    every way to give back chips over the ten-chip cap.
//!
//! 3. **Deterministic Search**: Search effort is an operation count, not a
//!    clock, so the same position and budget always give the same move.
//!
//! ## Architecture
//!
//! - **Iterative-Deepening Alpha-Beta**: deepen until solved or out of budget,
//!   answering with the deepest completed iteration.
//!
//! - **Hidden Decks**: deck order is hidden; shufflers reorder decks between
//!   selection and application so selectors cannot exploit it.
//!
//! ## Modules
//!
//! - `core`: Players, turns, colours, chip multisets, RNG
//! - `cards`: Development cards, nobles, decks, the component catalog
//! - `rules`: Chip economy, tableaux, moves, the game state machine
//! - `ai`: Move selection, value function, minimax search
//! - `engine`: Self-play loop, shufflers, reporters, game records
//! - `error`: Rules and configuration errors

pub mod ai;
pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ChipColor, ChipSet, Color, ColorCounts, GameRng, Player, PlayerMap, Turn,
};

pub use crate::cards::{
    CatalogError, Deck, DevelopmentCard, DevelopmentRow, Developments, GameComponents, Noble, Row,
};

pub use crate::rules::{Game, Move, Tableau, TableauBuilder, TakeChipsResult};

pub use crate::ai::{
    DirectValuePlayer, Evaluation, Feature, FeatureWeights, GreedyRandomPlayer, MinimaxConfig,
    MinimaxPlayer, MoveSelector, RandomPlayer, SearchOutcome, SearchStats, ShufflingEnsemble,
    ValueFunction,
};

pub use crate::engine::{
    GameRecord, NullReporter, NullShuffler, RandomShuffler, RecordError, RecordingReporter,
    Reporter, SelfPlayConfig, SelfPlayEngine, Shuffler, TracingReporter,
};

pub use crate::error::{ConfigError, RulesError};
