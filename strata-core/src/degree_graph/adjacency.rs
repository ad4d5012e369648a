//! Dense symmetric adjacency stored as packed bit rows.

const WORD_BITS: usize = u64::BITS as usize;
const WORD_SHIFT: u32 = WORD_BITS.trailing_zeros();

/// Symmetric adjacency relation with every node marked adjacent to itself.
///
/// The self marks keep a node out of its own candidate set, so the builder
/// never proposes a self-loop.
#[derive(Clone, Debug)]
pub(crate) struct AdjacencyMatrix {
    node_count: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl AdjacencyMatrix {
    pub(crate) fn with_self_loops(node_count: usize) -> Self {
        let words_per_row = node_count.div_ceil(WORD_BITS);
        let mut matrix = Self {
            node_count,
            words_per_row,
            bits: vec![0; words_per_row.saturating_mul(node_count)],
        };
        for node in 0..node_count {
            matrix.set(node, node);
        }
        matrix
    }

    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        self.locate(row, col)
            .and_then(|(word, mask)| self.bits.get(word).map(|bits| bits & mask != 0))
            .unwrap_or(false)
    }

    pub(crate) fn connect(&mut self, left: usize, right: usize) {
        self.set(left, right);
        self.set(right, left);
    }

    /// Nodes not yet adjacent to `node`, in ascending order.
    pub(crate) fn non_neighbours(&self, node: usize) -> Vec<usize> {
        (0..self.node_count)
            .filter(|&other| !self.contains(node, other))
            .collect()
    }

    fn set(&mut self, row: usize, col: usize) {
        if let Some((word, mask)) = self.locate(row, col)
            && let Some(bits) = self.bits.get_mut(word)
        {
            *bits |= mask;
        }
    }

    fn locate(&self, row: usize, col: usize) -> Option<(usize, u64)> {
        if row >= self.node_count || col >= self.node_count {
            return None;
        }
        let word = row * self.words_per_row + (col >> WORD_SHIFT);
        let mask = 1_u64 << (col & (WORD_BITS - 1));
        Some((word, mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_start_adjacent_only_to_themselves() {
        let matrix = AdjacencyMatrix::with_self_loops(3);
        for node in 0..3 {
            assert!(matrix.contains(node, node));
        }
        assert!(!matrix.contains(0, 1));
        assert_eq!(matrix.non_neighbours(1), vec![0, 2]);
    }

    #[test]
    fn connect_is_symmetric() {
        let mut matrix = AdjacencyMatrix::with_self_loops(4);
        matrix.connect(3, 1);
        assert!(matrix.contains(1, 3));
        assert!(matrix.contains(3, 1));
        assert_eq!(matrix.non_neighbours(3), vec![0, 2]);
    }

    #[test]
    fn rows_wider_than_a_word_keep_their_bits_apart() {
        let mut matrix = AdjacencyMatrix::with_self_loops(130);
        matrix.connect(0, 129);
        matrix.connect(64, 65);
        assert!(matrix.contains(129, 0));
        assert!(matrix.contains(65, 64));
        assert!(!matrix.contains(1, 129));
        assert!(!matrix.contains(64, 129));
        assert_eq!(matrix.non_neighbours(129).len(), 128);
    }

    #[test]
    fn out_of_range_lookups_are_false() {
        let matrix = AdjacencyMatrix::with_self_loops(2);
        assert!(!matrix.contains(2, 0));
        assert!(!matrix.contains(0, 7));
    }

    #[test]
    fn empty_matrix_has_no_candidates() {
        let matrix = AdjacencyMatrix::with_self_loops(0);
        assert!(matrix.non_neighbours(0).is_empty());
    }
}
