/// Consolidation errors.
///
/// Only the single-result entry points can fail on their own; every other
/// operation is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsolidationError {
    /// The grouped output did not collapse to exactly one element.
    /// `groups == 0` means the input was empty.
    #[error("expected exactly one consolidation group, found {groups}")]
    NotSingleGroup { groups: usize },
}

impl ConsolidationError {
    /// Number of distinct groups the consolidation actually produced.
    pub fn groups(&self) -> usize {
        match self {
            Self::NotSingleGroup { groups } => *groups,
        }
    }

    /// Whether the failure was caused by an empty input.
    pub fn is_empty_input(&self) -> bool {
        self.groups() == 0
    }
}
