//! Property-test run profile read from environment overrides.
//!
//! Every proptest suite in the workspace loads its case count and fork mode
//! through [`ProptestRunProfile::load`], so CI can deepen or shorten the runs
//! without touching the suites.

use std::env;

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "STRATA_PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const FORK_ENV_KEY: &str = "STRATA_PBT_FORK";

/// Why an override was ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("expected an unsigned integer, got {0:?}")]
    NotANumber(String),
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {0:?}")]
    NotABool(String),
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to the given defaults for unset or
    /// malformed overrides. Malformed values are logged and ignored.
    ///
    /// # Examples
    /// ```
    /// use strata_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(env = key, %raw, %error, "ignoring malformed property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber(raw.to_owned())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool(raw.to_owned())),
    }
}
