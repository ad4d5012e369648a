//! Stratified group split benchmarks.
//!
//! Measures `StratifiedGroupSplitter::split` over seeded synthetic labels at
//! several group sizes, from singleton groups to large clusters.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use strata_benches::{
    error::BenchSetupError,
    params::SplitBenchParams,
    source::{LabelConfig, labelled_samples},
};
use strata_core::StratifiedGroupSplitter;

/// Seed used for all synthetic labels in this benchmark.
const SEED: u64 = 7;

/// Sample counts to benchmark.
const SAMPLE_COUNTS: &[usize] = &[1_000, 10_000];

/// Samples per group.
const GROUP_SIZES: &[usize] = &[1, 10, 100];

/// Distinct class labels.
const CLASS_COUNT: usize = 5;

fn stratified_split_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("stratified_group_split");
    group.sample_size(20);

    let splitter = StratifiedGroupSplitter::new(vec![0.7, 0.15, 0.15])?.with_rng_seed(SEED);
    for &sample_count in SAMPLE_COUNTS {
        for &group_size in GROUP_SIZES {
            let samples = labelled_samples(&LabelConfig {
                sample_count,
                class_count: CLASS_COUNT,
                group_size,
                seed: SEED,
            })?;
            let params = SplitBenchParams {
                sample_count,
                group_size,
            };
            group.bench_with_input(BenchmarkId::from_parameter(params), &samples, |b, labels| {
                b.iter(|| splitter.split(&labels.classes, &labels.groups));
            });
        }
    }

    group.finish();
    Ok(())
}

fn stratified_split(c: &mut Criterion) {
    if let Err(err) = stratified_split_impl(c) {
        panic!("stratified_split benchmark setup failed: {err}");
    }
}

criterion_group!(benches, stratified_split);
criterion_main!(benches);
