//! Shared test utilities for `strata-core`.

use proptest::test_runner::Config as ProptestConfig;
use strata_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared run profile so every
/// property suite honours the same `STRATA_PROPTEST_CASES` and
/// `STRATA_PBT_FORK` overrides.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
