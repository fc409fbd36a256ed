//! Finished-game records and their binary encoding.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::Move;

/// Errors encoding or decoding a [`GameRecord`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to encode game record")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game record")]
    Decode(#[source] bincode::Error),
}

/// The outcome of one self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Player,
    /// Every move played, in order.
    pub history: Vec<Move>,
    /// Whether the game hit the turn cutoff and `winner` was assigned.
    pub cut_off: bool,
}

impl GameRecord {
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        bincode::serialize(self).map_err(RecordError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        bincode::deserialize(bytes).map_err(RecordError::Decode)
    }

    /// Rounds played, counting a partial final round.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len().div_ceil(2)
    }
}
