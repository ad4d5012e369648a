use std::collections::BTreeSet;

use strata_core::{DegreeGraph, SplitResult};

/// Asserts that the splits are sorted, pairwise disjoint and cover
/// `0..samples`.
pub fn assert_disjoint_cover(result: &SplitResult, samples: usize) {
    let mut seen = BTreeSet::new();
    for indices in result.splits() {
        assert!(indices.is_sorted(), "split indices must be ascending");
        for &sample in indices {
            assert!(seen.insert(sample), "sample {sample} appears twice");
        }
    }
    assert_eq!(seen.len(), samples);
    assert!(seen.iter().copied().eq(0..samples));
}

/// Asserts that the graph is simple and that every edge is stored as
/// `(min, max)`.
pub fn assert_simple(graph: &DegreeGraph) {
    let mut seen = BTreeSet::new();
    for &(u, v) in graph.edges() {
        assert!(u < v, "edge ({u}, {v}) is a loop or unordered");
        assert!(v < graph.node_count(), "edge ({u}, {v}) is out of range");
        assert!(seen.insert((u, v)), "edge ({u}, {v}) is duplicated");
    }
}
