//! Benchmark setup error type.

use strata_core::StrataError;

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic input generation failed.
    #[error("synthetic input generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A builder or splitter rejected its configuration.
    #[error("strata call failed: {0}")]
    Strata(#[from] StrataError),
}
