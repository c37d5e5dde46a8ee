//! Consolidator: configured, stateless entry point for every consolidation form.

use std::convert::Infallible;
use std::hash::Hash;

use consolidate_core::{Consolidatable, ConsolidationConfig, ConsolidationResult, IndexStrategy};
use tracing::{debug, debug_span};

use crate::algorithms::{self, infallible};
use crate::consolidated::Consolidated;

/// Runs consolidations under a [`ConsolidationConfig`].
///
/// Holds no state between runs. The config only affects forms with a
/// hashable key (`by_hashed_key`, `by_self_equivalence`,
/// `single_by_self_equivalence`); the predicate and `PartialEq`-keyed forms
/// always scan.
#[derive(Debug, Clone, Default)]
pub struct Consolidator {
    config: ConsolidationConfig,
}

impl Consolidator {
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Group by pairwise predicate, combine each group left to right.
    ///
    /// `is_same_group` is called as `(representative, incoming)` and `combine`
    /// as `(representative, incoming)`.
    pub fn by_predicate<T, P, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        mut is_same_group: P,
        mut combine: C,
    ) -> Consolidated<T>
    where
        P: FnMut(&T, &T) -> bool,
        C: FnMut(T, T) -> T,
    {
        infallible(self.try_by_predicate(
            items,
            |a, b| Ok::<_, Infallible>(is_same_group(a, b)),
            |a, b| Ok(combine(a, b)),
        ))
    }

    /// Fallible `by_predicate`. The first callback error is returned as is.
    pub fn try_by_predicate<T, E, P, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        is_same_group: P,
        combine: C,
    ) -> Result<Consolidated<T>, E>
    where
        P: FnMut(&T, &T) -> Result<bool, E>,
        C: FnMut(T, T) -> Result<T, E>,
    {
        let _span = debug_span!("consolidate.run", form = "predicate").entered();
        let consolidated = algorithms::try_fold_by_predicate(items, is_same_group, combine)?;
        record(&consolidated);
        Ok(consolidated)
    }

    /// Group by `key_of(a) == key_of(b)`.
    pub fn by_key<T, K, F, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        mut key_of: F,
        mut combine: C,
    ) -> Consolidated<T>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
        C: FnMut(T, T) -> T,
    {
        infallible(self.try_by_key(
            items,
            |item| Ok::<_, Infallible>(key_of(item)),
            |a, b| Ok(combine(a, b)),
        ))
    }

    /// Fallible `by_key`. The first callback error is returned as is.
    pub fn try_by_key<T, K, E, F, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        key_of: F,
        combine: C,
    ) -> Result<Consolidated<T>, E>
    where
        K: PartialEq,
        F: FnMut(&T) -> Result<K, E>,
        C: FnMut(T, T) -> Result<T, E>,
    {
        let _span = debug_span!("consolidate.run", form = "key").entered();
        let consolidated = algorithms::try_fold_by_key(items, key_of, combine)?;
        record(&consolidated);
        Ok(consolidated)
    }

    /// Group by a hashable key. Uses the configured strategy; output is
    /// identical to `by_key` either way.
    pub fn by_hashed_key<T, K, F, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        mut key_of: F,
        mut combine: C,
    ) -> Consolidated<T>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> K,
        C: FnMut(T, T) -> T,
    {
        let _span = debug_span!("consolidate.run", form = "hashed_key").entered();
        let consolidated = infallible(self.fold_keyed(
            items,
            |item| Ok::<_, Infallible>(key_of(item)),
            |a, b| Ok(combine(a, b)),
        ));
        record(&consolidated);
        consolidated
    }

    /// Group by each element's own `group_key`, merging with `merged_with`.
    pub fn by_self_equivalence<T>(&self, items: impl IntoIterator<Item = T>) -> Consolidated<T>
    where
        T: Consolidatable,
    {
        let _span = debug_span!("consolidate.run", form = "self_equivalence").entered();
        let consolidated = infallible(self.fold_keyed(
            items,
            |item: &T| Ok::<_, Infallible>(item.group_key()),
            |representative: T, incoming| Ok(representative.merged_with(incoming)),
        ));
        record(&consolidated);
        consolidated
    }

    /// `by_key`, then require exactly one group.
    pub fn to_single<T, K, F, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        key_of: F,
        combine: C,
    ) -> ConsolidationResult<T>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
        C: FnMut(T, T) -> T,
    {
        single(self.by_key(items, key_of, combine))
    }

    /// `by_self_equivalence`, then require exactly one group.
    pub fn single_by_self_equivalence<T>(
        &self,
        items: impl IntoIterator<Item = T>,
    ) -> ConsolidationResult<T>
    where
        T: Consolidatable,
    {
        single(self.by_self_equivalence(items))
    }

    fn fold_keyed<T, K, E, F, C>(
        &self,
        items: impl IntoIterator<Item = T>,
        key_of: F,
        combine: C,
    ) -> Result<Consolidated<T>, E>
    where
        K: Hash + Eq,
        F: FnMut(&T) -> Result<K, E>,
        C: FnMut(T, T) -> Result<T, E>,
    {
        let items = items.into_iter();
        let strategy = self
            .config
            .strategy
            .resolve(items.size_hint().0, self.config.hashed_threshold);
        match strategy {
            IndexStrategy::Scan => algorithms::try_fold_by_key(items, key_of, combine),
            IndexStrategy::Hashed | IndexStrategy::Auto => {
                algorithms::try_fold_hashed(items, key_of, combine)
            }
        }
    }
}

fn record<T>(consolidated: &Consolidated<T>) {
    let report = consolidated.report();
    debug!(
        input = report.input_len,
        groups = report.groups,
        strategy = ?report.strategy,
        "consolidation complete"
    );
}

fn single<T>(consolidated: Consolidated<T>) -> ConsolidationResult<T> {
    consolidated.into_single().inspect_err(|err| {
        debug!(groups = err.groups(), "consolidation did not collapse to a single group");
    })
}
