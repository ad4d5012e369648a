//! Seeded synthetic inputs for benchmarking.
//!
//! Degree sequences are drawn uniformly up to a cap and labelled samples get
//! uniform class labels over contiguous, equally sized groups. Both are
//! reproducible from their seed.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use strata_core::DegreeSequence;

/// Errors that may occur during synthetic input generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node or sample count was zero.
    #[error("{context} must be greater than zero")]
    Zero {
        /// The parameter that was zero.
        context: &'static str,
    },
}

/// Configuration for a synthetic degree sequence.
#[derive(Clone, Debug)]
pub struct DegreeConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Inclusive upper bound for each degree.
    pub max_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Draws a degree sequence with every degree in `0..=max_degree`.
///
/// # Errors
/// Returns [`SyntheticError::Zero`] when `node_count` is zero.
///
/// # Examples
/// ```
/// use strata_benches::source::{DegreeConfig, degree_sequence};
///
/// let config = DegreeConfig { node_count: 8, max_degree: 3, seed: 1 };
/// let degrees = degree_sequence(&config).expect("valid config");
/// assert_eq!(degrees.len(), 8);
/// assert!(degrees.as_slice().iter().all(|&d| d <= 3));
/// ```
pub fn degree_sequence(config: &DegreeConfig) -> Result<DegreeSequence, SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::Zero {
            context: "node_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let degrees: Vec<usize> = (0..config.node_count)
        .map(|_| rng.gen_range(0..=config.max_degree))
        .collect();
    Ok(DegreeSequence::from(degrees))
}

/// Configuration for synthetic labelled samples.
#[derive(Clone, Debug)]
pub struct LabelConfig {
    /// Number of samples.
    pub sample_count: usize,
    /// Number of distinct class labels.
    pub class_count: usize,
    /// Samples per group; the final group may be smaller.
    pub group_size: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Class and group labels for the same samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelledSamples {
    /// Class label per sample.
    pub classes: Vec<usize>,
    /// Group label per sample.
    pub groups: Vec<usize>,
}

/// Draws uniform class labels over contiguous groups of `group_size`.
///
/// # Errors
/// Returns [`SyntheticError::Zero`] when any count in `config` is zero.
///
/// # Examples
/// ```
/// use strata_benches::source::{LabelConfig, labelled_samples};
///
/// let config = LabelConfig { sample_count: 10, class_count: 2, group_size: 4, seed: 3 };
/// let samples = labelled_samples(&config).expect("valid config");
/// assert_eq!(samples.groups, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2]);
/// ```
pub fn labelled_samples(config: &LabelConfig) -> Result<LabelledSamples, SyntheticError> {
    for (value, context) in [
        (config.sample_count, "sample_count"),
        (config.class_count, "class_count"),
        (config.group_size, "group_size"),
    ] {
        if value == 0 {
            return Err(SyntheticError::Zero { context });
        }
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let classes = (0..config.sample_count)
        .map(|_| rng.gen_range(0..config.class_count))
        .collect();
    let groups = (0..config.sample_count)
        .map(|sample| sample.checked_div(config.group_size).unwrap_or(0))
        .collect();
    Ok(LabelledSamples { classes, groups })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn degree_sequences_are_reproducible() {
        let config = DegreeConfig {
            node_count: 64,
            max_degree: 5,
            seed: 9,
        };
        assert_eq!(degree_sequence(&config), degree_sequence(&config));
    }

    #[rstest]
    #[case(0, 2, 4, "sample_count")]
    #[case(5, 0, 4, "class_count")]
    #[case(5, 2, 0, "group_size")]
    fn zero_counts_are_rejected(
        #[case] sample_count: usize,
        #[case] class_count: usize,
        #[case] group_size: usize,
        #[case] context: &'static str,
    ) {
        let config = LabelConfig {
            sample_count,
            class_count,
            group_size,
            seed: 0,
        };
        assert_eq!(
            labelled_samples(&config),
            Err(SyntheticError::Zero { context })
        );
    }

    #[test]
    fn classes_stay_in_range() {
        let config = LabelConfig {
            sample_count: 200,
            class_count: 3,
            group_size: 7,
            seed: 11,
        };
        let samples = labelled_samples(&config).expect("valid config");
        assert!(samples.classes.iter().all(|&class| class < 3));
        assert_eq!(samples.groups.last(), Some(&28));
    }
}
