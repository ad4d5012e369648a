//! Class-stratified, group-disjoint dataset splits.
//!
//! Whole groups are dealt to splits in a random order. Each group lands in a
//! split drawn with probability proportional to how much of the group's class
//! mix that split can still absorb, so class proportions track the requested
//! fractions while no group is ever divided. The result is a heuristic: the
//! approximation degrades as groups grow large relative to class totals.

mod capacity;
mod encoding;
mod result;


use rand::{Rng, seq::SliceRandom};
use tracing::{debug, instrument};

use crate::{
    error::{Result, StrataError},
    sampling::{WeightedDraw, drawn_mut, rng_from_seed, weighted_index},
};

use self::{capacity::CapacityGrid, encoding::EncodedLabels};
pub use self::result::SplitResult;

const DEFAULT_FRACTIONS: [f64; 2] = [0.8, 0.2];

/// Splits labelled, grouped samples into stratified, group-disjoint parts.
///
/// Fractions act as relative weights: they need not sum to one, but each must
/// be positive and finite.
///
/// # Examples
/// ```
/// use strata_core::StratifiedGroupSplitter;
///
/// let classes = ["cat", "cat", "dog", "dog", "cat", "dog"];
/// let groups = [1, 1, 2, 3, 4, 4];
/// let result = StratifiedGroupSplitter::new(vec![0.7, 0.3])?
///     .with_rng_seed(11)
///     .split(&classes, &groups)?;
/// assert_eq!(result.sample_count(), classes.len());
/// assert_eq!(result.split_of(0), result.split_of(1));
/// # Ok::<(), strata_core::StrataError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StratifiedGroupSplitter {
    fractions: Vec<f64>,
    rng_seed: Option<u64>,
}

impl Default for StratifiedGroupSplitter {
    fn default() -> Self {
        Self {
            fractions: DEFAULT_FRACTIONS.to_vec(),
            rng_seed: None,
        }
    }
}

impl StratifiedGroupSplitter {
    /// Validates `fractions` and creates an unseeded splitter.
    ///
    /// # Errors
    /// Returns [`StrataError::NoSplits`] when `fractions` is empty and
    /// [`StrataError::NonPositiveFraction`] for the first fraction that is
    /// zero, negative or not finite.
    ///
    /// # Examples
    /// ```
    /// use strata_core::{StratifiedGroupSplitter, StrataError};
    ///
    /// let err = StratifiedGroupSplitter::new(vec![1.0, 0.0]).unwrap_err();
    /// assert_eq!(err, StrataError::NonPositiveFraction { split: 1, value: 0.0 });
    /// ```
    pub fn new(split_fracs: impl Into<Vec<f64>>) -> Result<Self> {
        let fractions: Vec<f64> = split_fracs.into();
        if fractions.is_empty() {
            return Err(StrataError::NoSplits);
        }
        if let Some((split, &value)) = fractions
            .iter()
            .enumerate()
            .find(|(_, value)| !(value.is_finite() && **value > 0.0))
        {
            return Err(StrataError::NonPositiveFraction { split, value });
        }
        Ok(Self {
            fractions,
            rng_seed: None,
        })
    }

    /// Seeds the generator used by [`Self::split`].
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

    /// Returns the split fractions.
    #[must_use]
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Returns the number of splits produced per call.
    #[must_use]
    pub const fn split_count(&self) -> usize {
        self.fractions.len()
    }

    /// Splits samples using a generator derived from the configured seed.
    ///
    /// # Errors
    /// See [`Self::split_with_rng`].
    pub fn split<C, G>(&self, class_labels: &[C], group_labels: &[G]) -> Result<SplitResult>
    where
        C: Ord,
        G: Ord,
    {
        let mut rng = rng_from_seed(self.rng_seed);
        self.split_with_rng(class_labels, group_labels, &mut rng)
    }

    /// Splits samples drawing the group order and every assignment from `rng`.
    ///
    /// # Errors
    /// Returns [`StrataError::LabelLengthMismatch`] when the label sequences
    /// differ in length and [`StrataError::CapacityOverflow`] when the
    /// fractions are too large to score groups.
    #[instrument(
        name = "split.run",
        err,
        skip(self, class_labels, group_labels, rng),
        fields(samples = class_labels.len(), splits = self.fractions.len()),
    )]
    pub fn split_with_rng<C, G, R>(
        &self,
        class_labels: &[C],
        group_labels: &[G],
        rng: &mut R,
    ) -> Result<SplitResult>
    where
        C: Ord,
        G: Ord,
        R: Rng + ?Sized,
    {
        let encoded = EncodedLabels::encode(class_labels, group_labels)?;
        let mut capacity = CapacityGrid::new(&self.fractions, encoded.class_totals())?;
        let groups = encoded.groups();

        let mut order: Vec<usize> = (0..groups.len()).collect();
        order.shuffle(rng);

        let mut assigned = vec![Vec::new(); self.fractions.len()];
        let mut uniform_draws = 0_usize;
        for group in order.iter().filter_map(|&index| groups.get(index)) {
            let scores = capacity.scores(group.class_counts())?;
            let split = match weighted_index(&scores, rng)? {
                WeightedDraw::Picked(split) => split,
                WeightedDraw::AllZero => {
                    uniform_draws += 1;
                    rng.gen_range(0..self.fractions.len())
                }
            };
            drawn_mut(&mut assigned, split)?.extend_from_slice(group.samples());
            capacity.consume(split, group.class_counts());
        }

        for samples in &mut assigned {
            samples.sort_unstable();
        }
        debug!(
            groups = groups.len(),
            classes = encoded.class_totals().len(),
            uniform_draws,
            "stratified group split completed"
        );
        Ok(SplitResult::new(assigned))
    }
}
