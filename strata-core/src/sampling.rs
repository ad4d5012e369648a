//! Weighted random choice shared by the graph builder and the splitter.
//!
//! [`weighted_index`] draws an index with probability proportional to its
//! weight and reports an all-zero weight vector as [`WeightedDraw::AllZero`]
//! instead of dividing by zero. Callers pick their own fallback for that case;
//! [`weighted_index_or_uniform`] packages the common "uniform over every index"
//! fallback.

use std::ops::AddAssign;

use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, WeightedError, WeightedIndex, uniform::SampleUniform},
    rngs::SmallRng,
};
use thiserror::Error;

/// Errors raised when a weight vector cannot describe a distribution.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SamplingError {
    /// No weights were supplied.
    #[error("cannot sample from an empty weight vector")]
    EmptyWeights,
    /// A weight was negative or not a number.
    #[error("weights must be non-negative numbers")]
    InvalidWeight,
    /// More weights than the sampler can index.
    #[error("too many weights to sample from")]
    TooManyWeights,
    /// A draw named an index outside the weighted slice.
    #[error("drew index {index} from {len} weights")]
    IndexOutOfRange {
        /// Index that was drawn.
        index: usize,
        /// Number of weights sampled from.
        len: usize,
    },
}

/// Outcome of a weighted draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightedDraw {
    /// Index chosen with probability proportional to its weight.
    Picked(usize),
    /// Every weight was zero; no index carries probability mass.
    AllZero,
}

/// Draws an index from `weights` with probability proportional to each weight.
///
/// # Errors
/// Returns [`SamplingError::EmptyWeights`] when `weights` is empty and
/// [`SamplingError::InvalidWeight`] when any weight is negative or NaN.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use strata_core::sampling::{WeightedDraw, weighted_index};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let draw = weighted_index(&[0.0, 3.0, 0.0], &mut rng)?;
/// assert_eq!(draw, WeightedDraw::Picked(1));
///
/// let none = weighted_index(&[0_usize, 0], &mut rng)?;
/// assert_eq!(none, WeightedDraw::AllZero);
/// # Ok::<(), strata_core::sampling::SamplingError>(())
/// ```
pub fn weighted_index<X, R>(weights: &[X], rng: &mut R) -> Result<WeightedDraw, SamplingError>
where
    X: SampleUniform + PartialOrd + for<'a> AddAssign<&'a X> + Clone + Default,
    R: Rng + ?Sized,
{
    match WeightedIndex::<X>::new(weights) {
        Ok(distribution) => Ok(WeightedDraw::Picked(distribution.sample(rng))),
        Err(WeightedError::AllWeightsZero) => Ok(WeightedDraw::AllZero),
        Err(WeightedError::NoItem) => Err(SamplingError::EmptyWeights),
        Err(WeightedError::InvalidWeight) => Err(SamplingError::InvalidWeight),
        Err(_) => Err(SamplingError::TooManyWeights),
    }
}

/// Like [`weighted_index`], but falls back to a uniform draw over every index
/// when all weights are zero.
///
/// # Errors
/// Propagates the errors of [`weighted_index`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use strata_core::sampling::weighted_index_or_uniform;
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let index = weighted_index_or_uniform(&[0.0, 0.0, 0.0], &mut rng)?;
/// assert!(index < 3);
/// # Ok::<(), strata_core::sampling::SamplingError>(())
/// ```
pub fn weighted_index_or_uniform<X, R>(weights: &[X], rng: &mut R) -> Result<usize, SamplingError>
where
    X: SampleUniform + PartialOrd + for<'a> AddAssign<&'a X> + Clone + Default,
    R: Rng + ?Sized,
{
    match weighted_index(weights, rng)? {
        WeightedDraw::Picked(index) => Ok(index),
        WeightedDraw::AllZero => Ok(rng.gen_range(0..weights.len())),
    }
}

/// Looks up the item a draw over `items` selected.
///
/// # Errors
/// Returns [`SamplingError::IndexOutOfRange`] when `index` is past the end.
pub(crate) fn drawn<T>(items: &[T], index: usize) -> Result<&T, SamplingError> {
    let len = items.len();
    items
        .get(index)
        .ok_or(SamplingError::IndexOutOfRange { index, len })
}

/// Mutable counterpart of [`drawn`].
///
/// # Errors
/// Returns [`SamplingError::IndexOutOfRange`] when `index` is past the end.
pub(crate) fn drawn_mut<T>(items: &mut [T], index: usize) -> Result<&mut T, SamplingError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(SamplingError::IndexOutOfRange { index, len })
}

/// Builds the generator used by the convenience entry points.
///
/// A configured seed yields a reproducible [`SmallRng`]; without one the
/// generator is seeded from operating-system entropy.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}
