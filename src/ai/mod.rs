//! Move selection.
//!
//! Every strategy implements [`MoveSelector`]: given a position, return one
//! of its legal moves.

pub mod minimax;
pub mod players;
pub mod value;

pub use minimax::{Evaluation, MinimaxConfig, MinimaxPlayer, SearchOutcome, SearchStats};
pub use players::{DirectValuePlayer, GreedyRandomPlayer, RandomPlayer, ShufflingEnsemble};
pub use value::{Feature, FeatureWeights, ValueFunction};

use crate::rules::{Game, Move};

/// A strategy that picks a move for the player to move.
///
/// Implementations must return a member of `game.moves()`.
pub trait MoveSelector: Send {
    fn select_move(&mut self, game: &Game) -> Move;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&mut self, game: &Game) -> Move {
        (**self).select_move(game)
    }
}
