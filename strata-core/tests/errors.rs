//! End-to-end checks for the public error types.

use rstest::rstest;
use strata_core::{
    ErrorKind, StrataError, StrataErrorCode,
    sampling::SamplingError,
};

#[rstest]
#[case(
    StrataError::NegativeDegree { node: 0, value: -1 },
    StrataErrorCode::NegativeDegree,
    "STRATA_NEGATIVE_DEGREE",
)]
#[case(
    StrataError::NonFiniteDegree { node: 1, value: f64::NAN },
    StrataErrorCode::NonFiniteDegree,
    "STRATA_NON_FINITE_DEGREE",
)]
#[case(
    StrataError::FractionalDegree { node: 2, value: 1.5 },
    StrataErrorCode::FractionalDegree,
    "STRATA_FRACTIONAL_DEGREE",
)]
#[case(
    StrataError::DegreeOverflow { node: 3 },
    StrataErrorCode::DegreeOverflow,
    "STRATA_DEGREE_OVERFLOW",
)]
#[case(
    StrataError::LabelLengthMismatch { classes: 2, groups: 1 },
    StrataErrorCode::LabelLengthMismatch,
    "STRATA_LABEL_LENGTH_MISMATCH",
)]
#[case(StrataError::NoSplits, StrataErrorCode::NoSplits, "STRATA_NO_SPLITS")]
#[case(
    StrataError::NonPositiveFraction { split: 0, value: 0.0 },
    StrataErrorCode::NonPositiveFraction,
    "STRATA_NON_POSITIVE_FRACTION",
)]
#[case(
    StrataError::CapacityOverflow { split: 1 },
    StrataErrorCode::CapacityOverflow,
    "STRATA_CAPACITY_OVERFLOW",
)]
#[case(
    StrataError::Sampling(SamplingError::EmptyWeights),
    StrataErrorCode::SamplingFailure,
    "STRATA_SAMPLING_FAILURE",
)]
fn returns_expected_code(
    #[case] error: StrataError,
    #[case] expected: StrataErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(error.code().to_string(), text);
    assert_eq!(error.kind(), ErrorKind::InvalidInput);
}

#[rstest]
#[case(StrataError::Sampling(SamplingError::InvalidWeight), Some(SamplingError::InvalidWeight))]
#[case(
    StrataError::Sampling(SamplingError::IndexOutOfRange { index: 3, len: 2 }),
    Some(SamplingError::IndexOutOfRange { index: 3, len: 2 }),
)]
#[case(StrataError::NoSplits, None)]
fn exposes_inner_sampling_error(
    #[case] error: StrataError,
    #[case] expected: Option<SamplingError>,
) {
    assert_eq!(error.sampling_error(), expected);
}

#[test]
fn sampling_errors_convert_into_strata_errors() {
    let error: StrataError = SamplingError::TooManyWeights.into();
    assert_eq!(error.code(), StrataErrorCode::SamplingFailure);
}

#[test]
fn messages_name_the_offending_input() {
    let error = StrataError::NonPositiveFraction {
        split: 2,
        value: -0.5,
    };
    assert_eq!(
        error.to_string(),
        "split fraction 2 must be positive and finite (got -0.5)"
    );
    let error = StrataError::LabelLengthMismatch {
        classes: 4,
        groups: 3,
    };
    assert_eq!(
        error.to_string(),
        "class_labels has 4 entries but group_labels has 3"
    );
}
