//! Output of the degree-constrained builder.

use crate::error::ErrorKind;

/// Undirected edge stored with the smaller node index first.
pub type Edge = (usize, usize);

/// Edge list produced by [`crate::DegreeGraphBuilder`] together with the
/// constraint violations incurred while building it.
///
/// # Examples
/// ```
/// use strata_core::{DegreeGraphBuilder, DegreeSequence};
///
/// let graph = DegreeGraphBuilder::new()
///     .with_rng_seed(9)
///     .build(&DegreeSequence::from(vec![1, 1]))?;
/// assert_eq!(graph.edges(), &[(0, 1)]);
/// assert_eq!(graph.realized_degrees(), vec![1, 1]);
/// assert!(graph.is_exact());
/// # Ok::<(), strata_core::StrataError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeGraph {
    node_count: usize,
    edges: Vec<Edge>,
    excess_edges: usize,
    unmet_degree: usize,
}

impl DegreeGraph {
    pub(crate) const fn new(
        node_count: usize,
        edges: Vec<Edge>,
        excess_edges: usize,
        unmet_degree: usize,
    ) -> Self {
        Self {
            node_count,
            edges,
            excess_edges,
            unmet_degree,
        }
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consumes the graph and returns its edge list.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of nodes the graph was built over.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns how many edges were forced onto a partner whose target degree
    /// was already met.
    #[must_use]
    pub const fn excess_edges(&self) -> usize {
        self.excess_edges
    }

    /// Returns the total target degree that could not be placed because a node
    /// ran out of non-neighbours.
    #[must_use]
    pub const fn unmet_degree(&self) -> usize {
        self.unmet_degree
    }

    /// Returns `true` when every node's realized degree equals its target.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.excess_edges == 0 && self.unmet_degree == 0
    }

    /// Classifies the soft failure recorded on this graph.
    ///
    /// Returns [`ErrorKind::ConstraintViolation`] when any target degree was
    /// exceeded or left unmet, and `None` for an exact graph.
    ///
    /// # Examples
    /// ```
    /// use strata_core::{DegreeGraphBuilder, DegreeSequence, ErrorKind};
    ///
    /// let graph = DegreeGraphBuilder::new()
    ///     .with_verbose(false)
    ///     .with_rng_seed(1)
    ///     .build(&DegreeSequence::from(vec![1, 1, 1]))?;
    /// assert_eq!(graph.violation_kind(), Some(ErrorKind::ConstraintViolation));
    /// # Ok::<(), strata_core::StrataError>(())
    /// ```
    #[must_use]
    pub const fn violation_kind(&self) -> Option<ErrorKind> {
        if self.is_exact() {
            None
        } else {
            Some(ErrorKind::ConstraintViolation)
        }
    }

    /// Counts the edges touching each node.
    #[must_use]
    pub fn realized_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0_usize; self.node_count];
        for &(left, right) in &self.edges {
            for node in [left, right] {
                if let Some(degree) = degrees.get_mut(node) {
                    *degree += 1;
                }
            }
        }
        degrees
    }
}
