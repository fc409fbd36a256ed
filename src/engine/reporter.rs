//! Passive observers of a game in progress.

use tracing::info;

use crate::rules::{Game, Move};

/// Receives each position and the move chosen in it. Never consulted.
pub trait Reporter {
    fn describe_game(&mut self, game: &Game);
    fn report_move(&mut self, game: &Game, chosen: &Move);
}

/// Reports nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn describe_game(&mut self, _game: &Game) {}

    fn report_move(&mut self, _game: &Game, _chosen: &Move) {}
}

/// Logs each move at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn describe_game(&mut self, game: &Game) {
        info!("{game}");
    }

    fn report_move(&mut self, game: &Game, chosen: &Move) {
        info!(turn = %game.turn(), player = %game.current_player(), "{chosen}");
    }
}

/// Keeps every reported (position, move) pair.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    described: Vec<Game>,
    moves: Vec<(Game, Move)>,
}

impl RecordingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Games passed to `describe_game`.
    #[must_use]
    pub fn described(&self) -> &[Game] {
        &self.described
    }

    #[must_use]
    pub fn moves(&self) -> &[(Game, Move)] {
        &self.moves
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<(Game, Move)> {
        self.moves
    }
}

impl Reporter for RecordingReporter {
    fn describe_game(&mut self, game: &Game) {
        self.described.push(game.clone());
    }

    fn report_move(&mut self, game: &Game, chosen: &Move) {
        self.moves.push((game.clone(), *chosen));
    }
}
