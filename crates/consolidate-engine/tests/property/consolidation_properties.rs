//! Property tests for consolidate-engine: fold laws, ordering, and strategy equivalence.

use proptest::collection::vec;
use proptest::prelude::*;

use consolidate_engine::{
    consolidate_by_key, consolidate_by_predicate, consolidate_to_single, ConsolidationConfig,
    Consolidator,
};

fn keyed_items() -> impl Strategy<Value = Vec<(u8, i64)>> {
    vec((0u8..6, -100i64..100), 0..60)
}

fn sum_pair((k, a): (u8, i64), (_, b): (u8, i64)) -> (u8, i64) {
    (k, a + b)
}

proptest! {
    #[test]
    fn prop_no_match_is_identity(items in vec(any::<i32>(), 0..50)) {
        let out = consolidate_by_predicate(items.clone(), |_, _| false, |a, _| a);
        prop_assert_eq!(out, items);
    }

    #[test]
    fn prop_full_match_is_left_fold(items in vec(any::<i32>(), 1..50)) {
        // Non-commutative combine pins the (accumulated, next) order.
        let step = |acc: i32, next: i32| acc.wrapping_mul(31).wrapping_add(next);
        let expected = items[1..].iter().fold(items[0], |acc, &next| step(acc, next));
        let out = consolidate_by_predicate(items, |_, _| true, step);
        prop_assert_eq!(out, vec![expected]);
    }

    #[test]
    fn prop_groups_in_first_occurrence_order(items in keyed_items()) {
        let out = consolidate_by_key(items.clone(), |(k, _)| *k, sum_pair);

        let mut first_seen: Vec<u8> = Vec::new();
        for (k, _) in &items {
            if !first_seen.contains(k) {
                first_seen.push(*k);
            }
        }
        let out_keys: Vec<u8> = out.iter().map(|(k, _)| *k).collect();
        prop_assert_eq!(&out_keys, &first_seen);

        for (k, total) in &out {
            let expected: i64 = items.iter().filter(|(ik, _)| ik == k).map(|(_, v)| v).sum();
            prop_assert_eq!(*total, expected);
        }
    }

    #[test]
    fn prop_output_never_longer_than_input(items in keyed_items()) {
        let out = consolidate_by_key(items.clone(), |(k, _)| *k, sum_pair);
        prop_assert!(out.len() <= items.len());
    }

    #[test]
    fn prop_idempotent_once_consolidated(items in keyed_items()) {
        let once = consolidate_by_key(items, |(k, _)| *k, sum_pair);
        let twice = consolidate_by_key(once.clone(), |(k, _)| *k, sum_pair);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_single_iff_one_group(items in vec((0u8..2, -100i64..100), 0..8)) {
        let grouped = consolidate_by_key(items.clone(), |(k, _)| *k, sum_pair);
        let single = consolidate_to_single(items, |(k, _)| *k, sum_pair);
        match single {
            Ok(value) => prop_assert_eq!(grouped, vec![value]),
            Err(err) => {
                prop_assert_ne!(grouped.len(), 1);
                prop_assert_eq!(err.groups(), grouped.len());
            }
        }
    }

    #[test]
    fn prop_hashed_matches_scan_even_when_combine_moves_keys(
        items in vec(0i32..50, 0..80),
        modulus in 1i32..7,
    ) {
        // Summing changes `value % modulus`, so slots migrate between keys.
        let scan = Consolidator::new(ConsolidationConfig::scan())
            .by_hashed_key(items.clone(), |v| v % modulus, |a, b| a + b);
        let hashed = Consolidator::new(ConsolidationConfig::hashed())
            .by_hashed_key(items, |v| v % modulus, |a, b| a + b);
        prop_assert_eq!(scan.items(), hashed.items());
        prop_assert_eq!(scan.report().groups, hashed.report().groups);
    }

    #[test]
    fn prop_keyed_matches_derived_predicate(
        items in vec(0i32..50, 0..80),
        modulus in 1i32..7,
    ) {
        let by_key = consolidate_by_key(items.clone(), |v| v % modulus, |a, b| a + b);
        let by_predicate =
            consolidate_by_predicate(items, |a, b| a % modulus == b % modulus, |a, b| a + b);
        prop_assert_eq!(by_key, by_predicate);
    }

    #[test]
    fn prop_report_counts_input(items in keyed_items()) {
        let consolidated = Consolidator::default().by_key(items.clone(), |(k, _)| *k, sum_pair);
        let report = consolidated.report();
        prop_assert_eq!(report.input_len, items.len());
        prop_assert_eq!(report.groups, consolidated.len());
        prop_assert_eq!(report.merges(), items.len() - consolidated.len());
    }
}
