//! Running games: the self-play loop, deck shufflers, reporters and records.
//!
//! Single-threaded. Independent games can run on separate threads, each with
//! its own engine.

pub mod record;
pub mod reporter;
pub mod self_play;
pub mod shuffler;

pub use record::{GameRecord, RecordError};
pub use reporter::{NullReporter, RecordingReporter, Reporter, TracingReporter};
pub use self_play::{SelfPlayConfig, SelfPlayEngine};
pub use shuffler::{NullShuffler, RandomShuffler, Shuffler};
