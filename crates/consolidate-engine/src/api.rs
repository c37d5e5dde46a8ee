//! Free-function entry points. Each runs a default [`Consolidator`] and
//! returns the bare representatives.

use std::hash::Hash;

use consolidate_core::{Consolidatable, ConsolidationResult};

use crate::consolidated::Consolidated;
use crate::consolidator::Consolidator;

/// Consolidate by pairwise predicate.
///
/// Items are processed left to right. Each is compared against the current
/// group representatives, lowest first, as `is_same_group(representative, item)`.
/// On the first match that representative becomes `combine(representative, item)`;
/// otherwise the item starts a new group at the end. Output order is the order in
/// which groups first appeared.
///
/// `is_same_group` should be reflexive and symmetric. It need not be transitive,
/// but with a non-transitive predicate the grouping depends on input order
/// because comparisons are against merged representatives.
///
/// ```
/// use consolidate_engine::consolidate_by_predicate;
///
/// let out = consolidate_by_predicate(
///     vec![10, 21, 12, 33],
///     |a, b| a / 10 == b / 10,
///     |a, b| a + b,
/// );
/// assert_eq!(out, vec![22, 21, 33]);
/// ```
pub fn consolidate_by_predicate<T, P, C>(
    items: impl IntoIterator<Item = T>,
    is_same_group: P,
    combine: C,
) -> Vec<T>
where
    P: FnMut(&T, &T) -> bool,
    C: FnMut(T, T) -> T,
{
    Consolidator::default()
        .by_predicate(items, is_same_group, combine)
        .into_items()
}

/// Consolidate by key: two items share a group when `key_of` returns equal keys.
pub fn consolidate_by_key<T, K, F, C>(
    items: impl IntoIterator<Item = T>,
    key_of: F,
    combine: C,
) -> Vec<T>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
    C: FnMut(T, T) -> T,
{
    Consolidator::default()
        .by_key(items, key_of, combine)
        .into_items()
}

/// Like [`consolidate_by_key`] for hashable keys; large inputs use a hash index.
pub fn consolidate_by_hashed_key<T, K, F, C>(
    items: impl IntoIterator<Item = T>,
    key_of: F,
    combine: C,
) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
    C: FnMut(T, T) -> T,
{
    Consolidator::default()
        .by_hashed_key(items, key_of, combine)
        .into_items()
}

/// Consolidate elements that declare their own group and merge rule.
pub fn consolidate_by_self_equivalence<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Consolidatable,
{
    Consolidator::default().by_self_equivalence(items).into_items()
}

/// Consolidate by key and require exactly one group.
///
/// Empty input and inputs with two or more groups both fail with
/// `ConsolidationError::NotSingleGroup`, carrying the group count.
pub fn consolidate_to_single<T, K, F, C>(
    items: impl IntoIterator<Item = T>,
    key_of: F,
    combine: C,
) -> ConsolidationResult<T>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
    C: FnMut(T, T) -> T,
{
    Consolidator::default().to_single(items, key_of, combine)
}

/// Fallible [`consolidate_by_predicate`]. Stops at the first callback error and
/// returns it unchanged.
pub fn try_consolidate_by_predicate<T, E, P, C>(
    items: impl IntoIterator<Item = T>,
    is_same_group: P,
    combine: C,
) -> Result<Vec<T>, E>
where
    P: FnMut(&T, &T) -> Result<bool, E>,
    C: FnMut(T, T) -> Result<T, E>,
{
    Consolidator::default()
        .try_by_predicate(items, is_same_group, combine)
        .map(Consolidated::into_items)
}

/// Fallible [`consolidate_by_key`]. Stops at the first callback error and
/// returns it unchanged.
pub fn try_consolidate_by_key<T, K, E, F, C>(
    items: impl IntoIterator<Item = T>,
    key_of: F,
    combine: C,
) -> Result<Vec<T>, E>
where
    K: PartialEq,
    F: FnMut(&T) -> Result<K, E>,
    C: FnMut(T, T) -> Result<T, E>,
{
    Consolidator::default()
        .try_by_key(items, key_of, combine)
        .map(Consolidated::into_items)
}
