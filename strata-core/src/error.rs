//! Error types for the Strata core library.
//!
//! Every variant of [`StrataError`] maps to a stable [`StrataErrorCode`] and to
//! a coarse [`ErrorKind`]. Argument validation happens before any random draw;
//! capacity overflow and sampling failures can surface mid-run, but a failed
//! call never returns a partial result.

use std::fmt;

use thiserror::Error;

use crate::sampling::SamplingError;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad classification of failures and soft reports.
///
/// Only [`ErrorKind::InvalidInput`] is ever returned as an error.
/// [`ErrorKind::ConstraintViolation`] is reported by
/// [`crate::DegreeGraph::violation_kind`] for graphs with excess edges or
/// unmet degree; those are logged through `tracing` instead of failing the
/// call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Arguments were malformed.
    InvalidInput,
    /// A degree target could not be honoured exactly.
    ConstraintViolation,
}

/// Error type produced by the graph builder and the splitter.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StrataError {
    /// A degree value was below zero.
    #[error("degree for node {node} must be non-negative (got {value})")]
    NegativeDegree {
        /// Node whose degree was rejected.
        node: usize,
        /// The offending value.
        value: i64,
    },
    /// A floating-point degree was NaN or infinite.
    #[error("degree for node {node} must be finite (got {value})")]
    NonFiniteDegree {
        /// Node whose degree was rejected.
        node: usize,
        /// The offending value.
        value: f64,
    },
    /// A floating-point degree had a fractional part.
    #[error("degree for node {node} must be a whole number (got {value})")]
    FractionalDegree {
        /// Node whose degree was rejected.
        node: usize,
        /// The offending value.
        value: f64,
    },
    /// A degree did not fit into the host pointer width.
    #[error("degree for node {node} exceeds the host pointer width")]
    DegreeOverflow {
        /// Node whose degree was rejected.
        node: usize,
    },
    /// Class and group label sequences had different lengths.
    #[error("class_labels has {classes} entries but group_labels has {groups}")]
    LabelLengthMismatch {
        /// Number of class labels supplied.
        classes: usize,
        /// Number of group labels supplied.
        groups: usize,
    },
    /// No split fractions were supplied.
    #[error("at least one split fraction is required")]
    NoSplits,
    /// A split fraction was zero, negative or not finite.
    #[error("split fraction {split} must be positive and finite (got {value})")]
    NonPositiveFraction {
        /// Index of the rejected fraction.
        split: usize,
        /// The offending value.
        value: f64,
    },
    /// A split capacity overflowed to infinity.
    #[error("capacity for split {split} is not finite; split fractions are too large")]
    CapacityOverflow {
        /// Index of the split whose capacity overflowed.
        split: usize,
    },
    /// The weighted-choice primitive rejected its weights.
    #[error("weighted sampling failed: {0}")]
    Sampling(#[from] SamplingError),
}

define_error_codes! {
    /// Stable codes describing [`StrataError`] variants.
    enum StrataErrorCode for StrataError {
        /// A degree value was below zero.
        NegativeDegree => NegativeDegree { .. } => "STRATA_NEGATIVE_DEGREE",
        /// A floating-point degree was NaN or infinite.
        NonFiniteDegree => NonFiniteDegree { .. } => "STRATA_NON_FINITE_DEGREE",
        /// A floating-point degree had a fractional part.
        FractionalDegree => FractionalDegree { .. } => "STRATA_FRACTIONAL_DEGREE",
        /// A degree did not fit into the host pointer width.
        DegreeOverflow => DegreeOverflow { .. } => "STRATA_DEGREE_OVERFLOW",
        /// Class and group label sequences had different lengths.
        LabelLengthMismatch => LabelLengthMismatch { .. } => "STRATA_LABEL_LENGTH_MISMATCH",
        /// No split fractions were supplied.
        NoSplits => NoSplits => "STRATA_NO_SPLITS",
        /// A split fraction was zero, negative or not finite.
        NonPositiveFraction => NonPositiveFraction { .. } => "STRATA_NON_POSITIVE_FRACTION",
        /// A split capacity overflowed to infinity.
        CapacityOverflow => CapacityOverflow { .. } => "STRATA_CAPACITY_OVERFLOW",
        /// The weighted-choice primitive rejected its weights.
        SamplingFailure => Sampling(..) => "STRATA_SAMPLING_FAILURE",
    }
}

impl StrataError {
    /// Classify this error. Every current variant is [`ErrorKind::InvalidInput`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeDegree { .. }
            | Self::NonFiniteDegree { .. }
            | Self::FractionalDegree { .. }
            | Self::DegreeOverflow { .. }
            | Self::LabelLengthMismatch { .. }
            | Self::NoSplits
            | Self::NonPositiveFraction { .. }
            | Self::CapacityOverflow { .. }
            | Self::Sampling(_) => ErrorKind::InvalidInput,
        }
    }

    /// Retrieve the inner sampling error when the failure came from the
    /// weighted-choice primitive.
    #[must_use]
    pub const fn sampling_error(&self) -> Option<SamplingError> {
        match self {
            Self::Sampling(error) => Some(*error),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, StrataError>;
