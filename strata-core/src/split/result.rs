//! Partition returned by [`crate::StratifiedGroupSplitter`].

use std::collections::BTreeMap;

/// Sorted sample indices for each requested split.
///
/// The splits are pairwise disjoint and together cover every sample.
///
/// # Examples
/// ```
/// use strata_core::StratifiedGroupSplitter;
///
/// let splitter = StratifiedGroupSplitter::new(vec![0.5, 0.5])?.with_rng_seed(4);
/// let result = splitter.split(&["a", "a", "b", "b"], &[0, 1, 2, 3])?;
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.sample_count(), 4);
/// assert!(result.split_of(2).is_some());
/// # Ok::<(), strata_core::StrataError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitResult {
    splits: Vec<Vec<usize>>,
}

impl SplitResult {
    pub(crate) const fn new(splits: Vec<Vec<usize>>) -> Self {
        Self { splits }
    }

    /// Returns every split's indices.
    #[must_use]
    pub fn splits(&self) -> &[Vec<usize>] {
        &self.splits
    }

    /// Returns the indices assigned to `split`.
    #[must_use]
    pub fn get(&self, split: usize) -> Option<&[usize]> {
        self.splits.get(split).map(Vec::as_slice)
    }

    /// Returns the number of splits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.splits.len()
    }

    /// Returns `true` when no splits were produced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Returns the number of samples across all splits.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.splits.iter().map(Vec::len).sum()
    }

    /// Returns the split holding `sample`, if any.
    #[must_use]
    pub fn split_of(&self, sample: usize) -> Option<usize> {
        self.splits
            .iter()
            .position(|indices| indices.binary_search(&sample).is_ok())
    }

    /// Tallies the class labels of each split, in sorted class order.
    ///
    /// Indices without a label in `class_labels` are skipped.
    ///
    /// # Examples
    /// ```
    /// use strata_core::StratifiedGroupSplitter;
    ///
    /// let labels = [0, 0, 1, 1];
    /// let result = StratifiedGroupSplitter::new(vec![1.0])?.split(&labels, &[7, 7, 8, 8])?;
    /// let counts = result.class_counts(&labels);
    /// assert_eq!(counts[0].get(&0), Some(&2));
    /// assert_eq!(counts[0].get(&1), Some(&2));
    /// # Ok::<(), strata_core::StrataError>(())
    /// ```
    #[must_use]
    pub fn class_counts<'a, C: Ord>(&self, class_labels: &'a [C]) -> Vec<BTreeMap<&'a C, usize>> {
        self.splits
            .iter()
            .map(|indices| {
                let mut counts = BTreeMap::new();
                for label in indices.iter().filter_map(|&sample| class_labels.get(sample)) {
                    *counts.entry(label).or_insert(0) += 1;
                }
                counts
            })
            .collect()
    }

    /// Consumes the result and returns the per-split index vectors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.splits
    }
}

impl From<SplitResult> for Vec<Vec<usize>> {
    fn from(result: SplitResult) -> Self {
        result.into_inner()
    }
}
