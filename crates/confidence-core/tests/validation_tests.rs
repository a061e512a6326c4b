//! Integration tests for field validation and descriptive statistics

use confidence_core::{
    validate, DescriptiveStats, FieldInput, FieldRule, StatBounds, ValidationReason,
};
use proptest::prelude::*;

#[test]
fn test_statistical_field_rules() {
    let bounds = StatBounds::default();

    // Mean of zero is a legitimate value
    assert_eq!(validate("0", "mean", &bounds.mean_rule()).unwrap(), Some(0.0));

    // Zero spread and zero sample size are rejected by their minimums
    let err = validate("0", "std_dev", &bounds.std_dev_rule()).unwrap_err();
    assert_eq!(err.reason.kind(), "BelowMinimum");
    assert!(err.message.contains("standard deviation"));

    let err = validate(0u32, "sample_size", &bounds.sample_size_rule()).unwrap_err();
    assert_eq!(err.reason.kind(), "BelowMinimum");

    let err = validate("12.5", "sample_size", &bounds.sample_size_rule()).unwrap_err();
    assert_eq!(
        err.reason,
        ValidationReason::CustomConstraintViolation("must be an integer".to_string())
    );
}

#[test]
fn test_custom_predicate() {
    let even = FieldRule::integer().required().custom(|v| v % 2.0 == 0.0, "must be even");
    assert_eq!(validate(4u32, "n", &even).unwrap(), Some(4.0));

    let err = validate(5u32, "n", &even).unwrap_err();
    assert_eq!(err.field, "n");
    assert_eq!(err.message, "must be even");
}

#[test]
fn test_mixed_raw_inputs() {
    let rule = FieldRule::number().required();
    let inputs: Vec<FieldInput> = vec![
        1.5.into(),
        "2.5".into(),
        String::from(" 3.5 ").into(),
        Some(4.5).into(),
    ];
    let values: Vec<f64> = inputs
        .into_iter()
        .map(|input| validate(input, "x", &rule).unwrap().unwrap())
        .collect();
    assert_eq!(values, vec![1.5, 2.5, 3.5, 4.5]);
}

proptest! {
    #[test]
    fn prop_in_range_values_pass(value in -100_000.0f64..10_000_000.0) {
        let rule = StatBounds::default().mean_rule();
        prop_assert_eq!(validate(value, "mean", &rule).unwrap(), Some(value));
    }

    #[test]
    fn prop_text_and_number_agree(value in -1.0e6f64..1.0e6) {
        let rule = StatBounds::default().mean_rule();
        let from_number = validate(value, "mean", &rule).map(|v| v.is_some()).is_ok();
        let from_text = validate(value.to_string(), "mean", &rule).map(|v| v.is_some()).is_ok();
        prop_assert_eq!(from_number, from_text);
    }

    #[test]
    fn prop_std_dev_within_min_max(data in prop::collection::vec(-1.0e3f64..1.0e3, 1..200)) {
        let stats = DescriptiveStats::from_values(&data).unwrap();
        prop_assert!(stats.min <= stats.mean + 1e-9);
        prop_assert!(stats.mean <= stats.max + 1e-9);
        prop_assert!(stats.std_dev >= 0.0);
        prop_assert!(stats.std_dev <= stats.range() + 1e-9);
        prop_assert_eq!(stats.sample_size, data.len());
    }
}
