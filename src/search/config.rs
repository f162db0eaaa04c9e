//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Default recursion bound.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies explored below the root before the position is scored as-is.
    /// Every recursion step counts, including skipped turns of a side
    /// that has already stopped.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}
