//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How the game tree is traversed.
///
/// Every strategy returns the same move for the same position; they differ
/// only in how much of the tree is visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Plain full-width minimax.
    #[default]
    Exhaustive,
    /// Minimax with alpha-beta pruning.
    AlphaBeta,
    /// Full-width minimax with a per-search transposition table.
    Memoized,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tree traversal strategy.
    pub strategy: Strategy,

    /// Initial capacity of the transposition table.
    /// Only used by `Strategy::Memoized`.
    pub table_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            table_capacity: 4096,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with a custom table capacity.
    #[must_use]
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }
}
