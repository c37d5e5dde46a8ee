//! Linear-scan grouped reduce.
//!
//! Every incoming element is tested against the current representatives, lowest
//! slot first, as `is_same_group(representative, incoming)`. The first hit is
//! replaced by `combine(representative, incoming)`; no hit opens a new slot.
//!
//! The predicate is not assumed transitive. Because the comparison is against
//! the *current* representative (possibly already a merge of several
//! elements), a non-transitive predicate can produce groupings that depend on
//! input order. That is the defined behavior, not something this module
//! corrects.

use consolidate_core::IndexStrategy;
use tracing::debug;

use super::slots::Slots;
use crate::consolidated::Consolidated;

/// Grouped reduce by pairwise predicate. O(n·g) predicate calls.
///
/// Stops at the first callback error and returns it unchanged.
pub fn try_fold_by_predicate<T, E, P, C>(
    items: impl IntoIterator<Item = T>,
    mut is_same_group: P,
    mut combine: C,
) -> Result<Consolidated<T>, E>
where
    P: FnMut(&T, &T) -> Result<bool, E>,
    C: FnMut(T, T) -> Result<T, E>,
{
    let items = items.into_iter();
    let mut slots = Slots::with_capacity(items.size_hint().0);
    let mut input_len = 0usize;

    for item in items {
        let position = input_len;
        input_len += 1;
        let found = slots
            .try_position(|representative| is_same_group(representative, &item))
            .inspect_err(|_| debug!(position, "group predicate failed, aborting"))?;
        match found {
            Some(index) => {
                slots
                    .try_merge(index, item, &mut combine)
                    .inspect_err(|_| debug!(position, "combine failed, aborting"))?;
            }
            None => {
                slots.push(item);
            }
        }
    }

    Ok(Consolidated::new(
        slots.into_vec(),
        input_len,
        IndexStrategy::Scan,
    ))
}

/// Grouped reduce by key, scanning cached slot keys.
///
/// Equivalent to `try_fold_by_predicate` with
/// `key_of(representative) == key_of(incoming)`. Each slot's key is computed
/// once when the slot opens and again after every merge, so a `combine` that
/// changes the key is observed exactly as the naive form would.
pub fn try_fold_by_key<T, K, E, F, C>(
    items: impl IntoIterator<Item = T>,
    mut key_of: F,
    mut combine: C,
) -> Result<Consolidated<T>, E>
where
    K: PartialEq,
    F: FnMut(&T) -> Result<K, E>,
    C: FnMut(T, T) -> Result<T, E>,
{
    let items = items.into_iter();
    let capacity = items.size_hint().0;
    let mut slots = Slots::with_capacity(capacity);
    let mut keys: Vec<K> = Vec::with_capacity(capacity);
    let mut input_len = 0usize;

    for item in items {
        let position = input_len;
        input_len += 1;
        let key = key_of(&item)
            .inspect_err(|_| debug!(position, "key accessor failed, aborting"))?;
        match keys.iter().position(|slot_key| *slot_key == key) {
            Some(index) => {
                let representative = slots
                    .try_merge(index, item, &mut combine)
                    .inspect_err(|_| debug!(position, "combine failed, aborting"))?;
                keys[index] = key_of(representative)
                    .inspect_err(|_| debug!(position, "key accessor failed, aborting"))?;
            }
            None => {
                slots.push(item);
                keys.push(key);
            }
        }
    }

    Ok(Consolidated::new(
        slots.into_vec(),
        input_len,
        IndexStrategy::Scan,
    ))
}
