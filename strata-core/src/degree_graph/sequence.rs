//! Validated target degree sequences.

use crate::error::{Result, StrataError};

/// Ordered target degrees, one per node.
///
/// Values are whole, non-negative numbers. The fallible constructors coerce
/// signed and floating-point inputs and reject anything that has no exact
/// `usize` representation.
///
/// # Examples
/// ```
/// use strata_core::DegreeSequence;
///
/// let degrees = DegreeSequence::try_from_signed(&[2, 1, 1])?;
/// assert_eq!(degrees.as_slice(), &[2, 1, 1]);
/// assert_eq!(degrees.total(), 4);
/// # Ok::<(), strata_core::StrataError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DegreeSequence {
    degrees: Vec<usize>,
}

impl DegreeSequence {
    /// Coerces signed integers into a degree sequence.
    ///
    /// # Errors
    /// Returns [`StrataError::NegativeDegree`] for values below zero and
    /// [`StrataError::DegreeOverflow`] when a value does not fit in `usize`.
    pub fn try_from_signed(values: &[i64]) -> Result<Self> {
        let degrees = values
            .iter()
            .enumerate()
            .map(|(node, &value)| {
                if value < 0 {
                    return Err(StrataError::NegativeDegree { node, value });
                }
                usize::try_from(value).map_err(|_| StrataError::DegreeOverflow { node })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { degrees })
    }

    /// Coerces floating-point values into a degree sequence.
    ///
    /// Only finite whole numbers are accepted; `2.0` becomes `2` while `2.5`
    /// is rejected rather than truncated.
    ///
    /// # Errors
    /// Returns [`StrataError::NonFiniteDegree`],
    /// [`StrataError::FractionalDegree`], [`StrataError::NegativeDegree`] or
    /// [`StrataError::DegreeOverflow`] for the first value that cannot be
    /// represented.
    ///
    /// # Examples
    /// ```
    /// use strata_core::{DegreeSequence, StrataError};
    ///
    /// assert!(DegreeSequence::try_from_floats(&[1.0, 0.0]).is_ok());
    /// let err = DegreeSequence::try_from_floats(&[1.5]).unwrap_err();
    /// assert!(matches!(err, StrataError::FractionalDegree { node: 0, .. }));
    /// ```
    pub fn try_from_floats(values: &[f64]) -> Result<Self> {
        let degrees = values
            .iter()
            .enumerate()
            .map(|(node, &value)| float_to_degree(node, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { degrees })
    }

    /// Returns the degrees as a slice indexed by node.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.degrees
    }

    /// Returns the target degree of `node`, if it exists.
    #[must_use]
    pub fn get(&self, node: usize) -> Option<usize> {
        self.degrees.get(node).copied()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` when the sequence describes no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Returns the sum of all target degrees, saturating at `usize::MAX`.
    #[must_use]
    pub fn total(&self) -> usize {
        self.degrees
            .iter()
            .fold(0_usize, |acc, degree| acc.saturating_add(*degree))
    }

    /// Returns `true` when the degrees sum to at most the node count.
    ///
    /// Sparse sequences like this rarely push the builder into forced edges.
    #[must_use]
    pub fn within_node_budget(&self) -> bool {
        self.total() <= self.len()
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self { degrees }
    }
}

impl From<&[usize]> for DegreeSequence {
    fn from(degrees: &[usize]) -> Self {
        Self {
            degrees: degrees.to_vec(),
        }
    }
}

impl TryFrom<&[i64]> for DegreeSequence {
    type Error = StrataError;

    fn try_from(values: &[i64]) -> Result<Self> {
        Self::try_from_signed(values)
    }
}

impl TryFrom<&[f64]> for DegreeSequence {
    type Error = StrataError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::try_from_floats(values)
    }
}

/// `usize::MAX + 1` as a float; every finite value below it fits.
#[expect(
    clippy::cast_precision_loss,
    reason = "2^64 and 2^32 are exactly representable as f64"
)]
const USIZE_BOUND: f64 = (usize::MAX as f64) + 1.0;

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is a finite whole number checked against the target range"
)]
fn float_to_degree(node: usize, value: f64) -> Result<usize> {
    if !value.is_finite() {
        return Err(StrataError::NonFiniteDegree { node, value });
    }
    if value.fract() != 0.0 {
        return Err(StrataError::FractionalDegree { node, value });
    }
    if value < 0.0 {
        return Err(StrataError::NegativeDegree {
            node,
            value: value as i64,
        });
    }
    if value >= USIZE_BOUND {
        return Err(StrataError::DegreeOverflow { node });
    }
    Ok(value as usize)
}
