//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Configuration for the exhaustive minimax search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies the search may look ahead before scoring a position neutral.
    ///
    /// Worst-case node count is 18^depth_budget, so keep this small; the
    /// default matches the console game.
    pub depth_budget: u8,

    /// Memoize subtree scores across the current search.
    ///
    /// The same position can be reached through different move orders;
    /// with the table on it is scored once instead of re-searched. The
    /// chosen move is identical either way.
    pub use_table: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_budget: 8,
            use_table: false,
        }
    }
}

impl SearchConfig {
    /// Config with a custom depth budget.
    #[must_use]
    pub fn with_depth_budget(mut self, depth_budget: u8) -> Self {
        self.depth_budget = depth_budget;
        self
    }

    /// Config with the transposition table switched on or off.
    #[must_use]
    pub fn with_table(mut self, use_table: bool) -> Self {
        self.use_table = use_table;
        self
    }
}
