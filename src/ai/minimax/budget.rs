//! The per-search operation budget.

/// Why a search iteration stopped before finishing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchInterrupt {
    /// The operation budget ran out.
    BudgetExhausted,
    /// A generated move failed to apply.
    RulesViolation,
}

/// Counts down once per visited position.
#[derive(Clone, Debug)]
pub(crate) struct OperationBudget {
    remaining: u64,
}

impl OperationBudget {
    pub(crate) fn new(ops: u64) -> Self {
        Self { remaining: ops }
    }

    /// Spend one operation; fails once the budget is used up.
    pub(crate) fn spend(&mut self) -> Result<(), SearchInterrupt> {
        self.remaining = self
            .remaining
            .checked_sub(1)
            .ok_or(SearchInterrupt::BudgetExhausted)?;
        Ok(())
    }

    pub(crate) fn remaining(&self) -> u64 {
        self.remaining
    }
}
