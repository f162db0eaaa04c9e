//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one top-level decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited (every recursive call).
    pub nodes: u64,

    /// Positions scored directly (both stopped or depth bound reached).
    pub leaves: u64,

    /// Positions cut short by a decisive branch.
    pub cutoffs: u64,

    /// Deepest recursion depth reached.
    pub max_depth: u32,

    /// Wall time of the decision (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another decision's statistics into these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    /// Positions visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
