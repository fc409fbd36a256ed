//! Minimax search configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Positions the search may visit before it stops and answers with the
    /// deepest completed iteration.
    pub ops: u64,

    /// Alpha-beta pruning. Off runs plain minimax, for comparison.
    pub pruning: bool,

    /// Deepest iteration to run (0 = until solved or out of budget).
    pub max_depth: u32,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            ops: 10_000,
            pruning: true,
            max_depth: 0,
        }
    }
}

impl MinimaxConfig {
    pub fn with_ops(mut self, ops: u64) -> Self {
        self.ops = ops;
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ops == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}
