//! Degree-constrained graph construction benchmarks.
//!
//! Measures `DegreeGraphBuilder::build` over seeded synthetic degree
//! sequences. Sparse sequences mostly exercise the open-candidate path while
//! dense ones push the builder into forced edges.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use strata_benches::{
    error::BenchSetupError,
    params::GraphBenchParams,
    source::{DegreeConfig, degree_sequence},
};
use strata_core::DegreeGraphBuilder;

/// Seed used for all synthetic sequences in this benchmark.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 2_000];

/// Degree caps: sparse and dense.
const MAX_DEGREES: &[usize] = &[2, 16];

fn degree_graph_build_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("degree_graph_build");
    group.sample_size(20);

    let builder = DegreeGraphBuilder::new()
        .with_verbose(false)
        .with_rng_seed(SEED);
    for &node_count in NODE_COUNTS {
        for &max_degree in MAX_DEGREES {
            let degrees = degree_sequence(&DegreeConfig {
                node_count,
                max_degree,
                seed: SEED,
            })?;
            let params = GraphBenchParams {
                node_count,
                max_degree,
            };
            group.bench_with_input(BenchmarkId::from_parameter(params), &degrees, |b, seq| {
                b.iter(|| builder.build(seq));
            });
        }
    }

    group.finish();
    Ok(())
}

fn degree_graph_build(c: &mut Criterion) {
    if let Err(err) = degree_graph_build_impl(c) {
        panic!("degree_graph_build benchmark setup failed: {err}");
    }
}

criterion_group!(benches, degree_graph_build);
criterion_main!(benches);
