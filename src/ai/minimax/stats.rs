//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Deepest iteration that finished within budget.
    pub completed_depth: u32,

    /// Positions visited, each charged against the budget.
    pub positions_evaluated: u64,

    /// Positions whose moves were generated and searched.
    pub nodes_expanded: u64,

    /// Cutoffs at minimizing nodes.
    pub alpha_cutoffs: u64,

    /// Cutoffs at maximizing nodes.
    pub beta_cutoffs: u64,

    /// Whether the deepest completed iteration reached only finished games.
    pub solved: bool,

    /// Root score of the deepest completed iteration.
    pub root_score: Option<f64>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn cutoffs(&self) -> u64 {
        self.alpha_cutoffs + self.beta_cutoffs
    }

    /// Average searched moves per expanded node.
    #[must_use]
    pub fn effective_branching(&self) -> f64 {
        if self.nodes_expanded == 0 {
            0.0
        } else {
            self.positions_evaluated.saturating_sub(1) as f64 / self.nodes_expanded as f64
        }
    }
}
