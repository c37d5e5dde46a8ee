//! Criterion benchmarks for consolidate-engine.
//!
//! Compares the scan and hashed strategies as the number of groups grows, and
//! measures the predicate form as a baseline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use consolidate_engine::{consolidate_by_predicate, ConsolidationConfig, Consolidator};

/// 1,000 `(group, amount)` lines spread across `groups` groups.
fn make_lines(groups: u32) -> Vec<(u32, u64)> {
    (0..1_000u32).map(|i| (i.wrapping_mul(7919) % groups, i as u64)).collect()
}

fn bench_strategies(c: &mut Criterion) {
    let scan = Consolidator::new(ConsolidationConfig::scan());
    let hashed = Consolidator::new(ConsolidationConfig::hashed());
    let mut group = c.benchmark_group("consolidate_1k_lines");

    for groups in [4u32, 64, 512] {
        let lines = make_lines(groups);
        group.bench_with_input(BenchmarkId::new("scan", groups), &lines, |bench, lines| {
            bench.iter(|| {
                scan.by_hashed_key(lines.iter().copied(), |(k, _)| *k, |(k, a), (_, b)| (k, a + b))
            });
        });
        group.bench_with_input(BenchmarkId::new("hashed", groups), &lines, |bench, lines| {
            bench.iter(|| {
                hashed.by_hashed_key(lines.iter().copied(), |(k, _)| *k, |(k, a), (_, b)| (k, a + b))
            });
        });
    }
    group.finish();
}

fn bench_predicate(c: &mut Criterion) {
    let lines = make_lines(64);
    c.bench_function("consolidate_by_predicate_1k_lines_64_groups", |bench| {
        bench.iter(|| {
            consolidate_by_predicate(
                black_box(lines.iter().copied()),
                |a, b| a.0 == b.0,
                |(k, a), (_, b)| (k, a + b),
            )
        });
    });
}

criterion_group!(benches, bench_strategies, bench_predicate);
criterion_main!(benches);
