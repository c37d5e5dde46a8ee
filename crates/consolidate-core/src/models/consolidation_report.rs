use serde::{Deserialize, Serialize};

use crate::config::IndexStrategy;

/// Summary of one consolidation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidationReport {
    /// Number of input elements consumed.
    pub input_len: usize,
    /// Number of distinct groups (output length).
    pub groups: usize,
    /// Strategy actually used. Never `Auto`.
    pub strategy: IndexStrategy,
}

impl ConsolidationReport {
    /// Elements folded into an existing slot rather than opening a new one.
    /// Zero for a report whose `groups` exceeds `input_len`.
    pub fn merges(&self) -> usize {
        self.input_len.saturating_sub(self.groups)
    }

    /// Input length over output length. 1.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.groups == 0 {
            return 1.0;
        }
        self.input_len as f64 / self.groups as f64
    }
}
