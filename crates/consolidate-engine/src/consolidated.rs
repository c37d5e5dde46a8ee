use consolidate_core::{ConsolidationError, ConsolidationReport, ConsolidationResult, IndexStrategy};

/// Output of a consolidation run: one representative per group, in
/// first-occurrence order, plus a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Consolidated<T> {
    items: Vec<T>,
    report: ConsolidationReport,
}

impl<T> Consolidated<T> {
    pub(crate) fn new(items: Vec<T>, input_len: usize, strategy: IndexStrategy) -> Self {
        let report = ConsolidationReport {
            input_len,
            groups: items.len(),
            strategy,
        };
        Self { items, report }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn report(&self) -> &ConsolidationReport {
        &self.report
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sole representative, or `NotSingleGroup` carrying the group count.
    pub fn into_single(self) -> ConsolidationResult<T> {
        let groups = self.items.len();
        let mut items = self.items.into_iter();
        match (items.next(), items.next()) {
            (Some(item), None) => Ok(item),
            _ => Err(ConsolidationError::NotSingleGroup { groups }),
        }
    }
}

impl<T> From<Consolidated<T>> for Vec<T> {
    fn from(consolidated: Consolidated<T>) -> Self {
        consolidated.into_items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_group_unwraps() {
        let c = Consolidated::new(vec![7], 3, IndexStrategy::Scan);
        assert_eq!(c.report().merges(), 2);
        assert_eq!(c.into_single(), Ok(7));
    }

    #[test]
    fn zero_or_many_groups_fail_with_count() {
        let empty: Consolidated<i32> = Consolidated::new(vec![], 0, IndexStrategy::Scan);
        assert_eq!(
            empty.into_single(),
            Err(ConsolidationError::NotSingleGroup { groups: 0 })
        );

        let many = Consolidated::new(vec![1, 2, 3], 3, IndexStrategy::Hashed);
        assert_eq!(many.len(), 3);
        assert_eq!(
            many.into_single(),
            Err(ConsolidationError::NotSingleGroup { groups: 3 })
        );
    }
}
