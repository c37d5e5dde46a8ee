use consolidate_core::{Consolidatable, ConsolidationResult};

use crate::api::consolidate_by_self_equivalence;
use crate::consolidator::Consolidator;

/// `.consolidated()` on any collection or iterator of [`Consolidatable`] items.
///
/// ```
/// use consolidate_engine::{Consolidatable, ConsolidateExt};
///
/// #[derive(Debug, PartialEq)]
/// struct Vote { option: char, count: u32 }
///
/// impl Consolidatable for Vote {
///     type Key = char;
///     fn group_key(&self) -> char { self.option }
///     fn merged_with(self, other: Self) -> Self {
///         Vote { option: self.option, count: self.count + other.count }
///     }
/// }
///
/// let votes = vec![
///     Vote { option: 'b', count: 1 },
///     Vote { option: 'a', count: 1 },
///     Vote { option: 'b', count: 2 },
/// ];
/// assert_eq!(
///     votes.consolidated(),
///     vec![Vote { option: 'b', count: 3 }, Vote { option: 'a', count: 1 }]
/// );
/// ```
pub trait ConsolidateExt: IntoIterator + Sized {
    fn consolidated(self) -> Vec<Self::Item>
    where
        Self::Item: Consolidatable,
    {
        consolidate_by_self_equivalence(self)
    }

    fn consolidated_single(self) -> ConsolidationResult<Self::Item>
    where
        Self::Item: Consolidatable,
    {
        Consolidator::default().single_by_self_equivalence(self)
    }
}

impl<I: IntoIterator> ConsolidateExt for I {}
