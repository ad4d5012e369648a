//! Random graphs whose node degrees approximate a target sequence.
//!
//! The builder repeatedly takes the node with the largest remaining degree
//! (lowest index on ties) and joins it to a random non-neighbour that still
//! needs edges. When every non-neighbour is already satisfied it forces an
//! excess edge, preferring partners with a high original target, and reports
//! the violation through `tracing`.
//!
//! Realized degrees may therefore exceed their targets. Sparse sequences
//! (degrees summing to at most the node count) that admit a simple graph are
//! normally satisfied exactly.

mod adjacency;
mod graph;
mod sequence;


use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::{
    error::Result,
    sampling::{
        WeightedDraw, drawn, rng_from_seed, weighted_index, weighted_index_or_uniform,
    },
};

use self::adjacency::AdjacencyMatrix;
pub use self::{
    graph::{DegreeGraph, Edge},
    sequence::DegreeSequence,
};

/// Configures and runs degree-constrained graph construction.
///
/// # Examples
/// ```
/// use strata_core::{DegreeGraphBuilder, DegreeSequence};
///
/// let degrees = DegreeSequence::from(vec![3, 1, 1, 1, 0, 0]);
/// let graph = DegreeGraphBuilder::new()
///     .with_verbose(false)
///     .with_rng_seed(42)
///     .build(&degrees)?;
/// assert_eq!(graph.realized_degrees(), degrees.as_slice());
/// assert!(graph.edges().iter().all(|&(a, b)| a < b));
/// # Ok::<(), strata_core::StrataError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DegreeGraphBuilder {
    verbose: bool,
    rng_seed: Option<u64>,
}

impl Default for DegreeGraphBuilder {
    fn default() -> Self {
        Self {
            verbose: true,
            rng_seed: None,
        }
    }
}

impl DegreeGraphBuilder {
    /// Creates a verbose builder that draws from operating-system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the constraint-violation warnings.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns whether constraint violations are logged.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Seeds the generator used by [`Self::build`].
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Builds a graph using a generator derived from the configured seed.
    ///
    /// # Errors
    /// Returns [`crate::StrataError::Sampling`] if a candidate weight vector
    /// cannot be sampled, which indicates a logic error.
    pub fn build(&self, degrees: &DegreeSequence) -> Result<DegreeGraph> {
        let mut rng = rng_from_seed(self.rng_seed);
        self.build_with_rng(degrees, &mut rng)
    }

    /// Builds a graph drawing every random choice from `rng`.
    ///
    /// # Errors
    /// Returns [`crate::StrataError::Sampling`] if a candidate weight vector
    /// cannot be sampled, which indicates a logic error.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use strata_core::{DegreeGraphBuilder, DegreeSequence};
    ///
    /// let mut rng = SmallRng::seed_from_u64(1);
    /// let graph = DegreeGraphBuilder::new()
    ///     .build_with_rng(&DegreeSequence::from(vec![0]), &mut rng)?;
    /// assert!(graph.edges().is_empty());
    /// # Ok::<(), strata_core::StrataError>(())
    /// ```
    #[instrument(
        name = "graph.build",
        err,
        skip(self, degrees, rng),
        fields(nodes = degrees.len(), total_degree = degrees.total(), verbose = self.verbose),
    )]
    pub fn build_with_rng<R>(&self, degrees: &DegreeSequence, rng: &mut R) -> Result<DegreeGraph>
    where
        R: Rng + ?Sized,
    {
        let targets = degrees.as_slice();
        let mut remaining = targets.to_vec();
        let mut adjacency = AdjacencyMatrix::with_self_loops(targets.len());
        let mut edges = Vec::with_capacity(degrees.total().min(targets.len().saturating_mul(4)));
        let mut report = ViolationReport::new(self.verbose);

        while let Some(node) = first_max_remaining(&remaining) {
            let candidates = adjacency.non_neighbours(node);
            if candidates.is_empty() {
                let deficit = take_remaining(&mut remaining, node);
                report.unmet(node, deficit);
                continue;
            }

            let open: Vec<usize> = candidates
                .iter()
                .map(|&other| usize::from(remaining.get(other).is_some_and(|left| *left > 0)))
                .collect();
            let picked = match weighted_index(&open, rng)? {
                WeightedDraw::Picked(index) => index,
                WeightedDraw::AllZero => {
                    report.forced(node, candidates.len());
                    let original: Vec<usize> = candidates
                        .iter()
                        .map(|&other| targets.get(other).copied().unwrap_or(0))
                        .collect();
                    weighted_index_or_uniform(&original, rng)?
                }
            };
            let partner = *drawn(&candidates, picked)?;

            decrement(&mut remaining, node);
            decrement(&mut remaining, partner);
            adjacency.connect(node, partner);
            edges.push((node.min(partner), node.max(partner)));
        }

        debug!(
            edges = edges.len(),
            excess_edges = report.excess_edges,
            unmet_degree = report.unmet_degree,
            "degree-constrained graph built"
        );
        Ok(DegreeGraph::new(
            targets.len(),
            edges,
            report.excess_edges,
            report.unmet_degree,
        ))
    }
}

/// Tallies constraint violations and logs the first of each kind.
struct ViolationReport {
    verbose: bool,
    excess_edges: usize,
    unmet_degree: usize,
}

impl ViolationReport {
    const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            excess_edges: 0,
            unmet_degree: 0,
        }
    }

    fn forced(&mut self, node: usize, candidates: usize) {
        if self.verbose && self.excess_edges == 0 {
            warn!(
                node,
                candidates, "forced to violate node degree constraint; adding an excess edge"
            );
        }
        self.excess_edges += 1;
    }

    fn unmet(&mut self, node: usize, deficit: usize) {
        if self.verbose && self.unmet_degree == 0 {
            warn!(
                node,
                deficit, "node has no remaining non-neighbours; dropping its unmet degree"
            );
        }
        self.unmet_degree = self.unmet_degree.saturating_add(deficit);
    }
}

/// Index of the largest positive remaining degree; the lowest index wins ties.
fn first_max_remaining(remaining: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (node, &degree) in remaining.iter().enumerate() {
        if degree > 0 && best.is_none_or(|(_, top)| degree > top) {
            best = Some((node, degree));
        }
    }
    best.map(|(node, _)| node)
}

fn decrement(remaining: &mut [usize], node: usize) {
    if let Some(degree) = remaining.get_mut(node) {
        *degree = degree.saturating_sub(1);
    }
}

fn take_remaining(remaining: &mut [usize], node: usize) -> usize {
    remaining.get_mut(node).map_or(0, std::mem::take)
}
