//! Benchmark parameter types used as Criterion input labels.

use std::fmt;

/// Parameters for a graph-builder benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the degree sequence.
    pub node_count: usize,
    /// Largest degree drawn for any node.
    pub max_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},dmax={}", self.node_count, self.max_degree)
    }
}

/// Parameters for a splitter benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SplitBenchParams {
    /// Number of samples.
    pub sample_count: usize,
    /// Samples per group.
    pub group_size: usize,
}

impl fmt::Display for SplitBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},g={}", self.sample_count, self.group_size)
    }
}
