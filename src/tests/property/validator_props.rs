//! Property-based tests for field and step validation
//!
//! Tests invariants:
//! - Empty required fields always produce an error, filled ones never do
//! - `validate_step` reports exactly the empty required fields
//! - Length limits hold at their boundaries
//! - Numbers inside `min..=max` always pass
//! - Validation is deterministic

use std::collections::HashMap;

use proptest::prelude::*;

use crate::core::wizard::{
    validate_field, validate_step, FieldDefinition, FieldType, FieldValidation, FieldValue,
    FormState, StepDefinition, STEP_ERROR_KEY,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Non-empty printable ASCII text.
fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{1,80}"
}

/// A step of 1..8 text fields with a random required flag, plus which of
/// them are filled.
fn arb_step_with_fill() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn text_field(required: bool) -> FieldDefinition {
    let field = FieldDefinition::new("value", "Value", FieldType::Text);
    if required {
        field.required()
    } else {
        field
    }
}

// ============================================================================
// Required
// ============================================================================

proptest! {
    #[test]
    fn required_field_accepts_any_text(text in arb_text()) {
        let field = text_field(true);
        prop_assert_eq!(validate_field(&field, Some(&FieldValue::Text(text)), None), None);
    }

    #[test]
    fn optional_empty_field_never_errors(max_length in 0usize..20, min_length in 0usize..20) {
        let field = text_field(false).with_validation(FieldValidation {
            min_length: Some(min_length),
            max_length: Some(max_length),
            ..Default::default()
        });
        prop_assert_eq!(validate_field(&field, None, None), None);
        prop_assert_eq!(validate_field(&field, Some(&FieldValue::from("")), None), None);
    }

    #[test]
    fn step_errors_match_empty_required_fields((required, filled) in arb_step_with_fill()) {
        let mut step = StepDefinition::new("step", "Step");
        let mut state = FormState::new();
        for (i, (&req, &fill)) in required.iter().zip(&filled).enumerate() {
            step = step.with_field(
                FieldDefinition::new(format!("f{i}"), format!("F{i}"), FieldType::Text),
            );
            if req {
                if let Some(field) = step.fields.last_mut() {
                    field.required = true;
                }
            }
            if fill {
                state.set(format!("f{i}"), "x");
            }
        }

        let errors = validate_step(&step, &state, &HashMap::new());

        let expected: Vec<String> = (0..required.len())
            .filter(|&i| required[i] && !filled[i])
            .map(|i| format!("f{i}"))
            .collect();
        // Errors come out in field order
        let actual: Vec<String> = errors.keys().map(str::to_string).collect();

        prop_assert!(!errors.contains(STEP_ERROR_KEY));
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Length and range
// ============================================================================

proptest! {
    #[test]
    fn max_length_boundary(text in "[a-z]{1,40}", max_length in 1usize..40) {
        let field = text_field(false).with_validation(FieldValidation {
            max_length: Some(max_length),
            ..Default::default()
        });
        let result = validate_field(&field, Some(&FieldValue::Text(text.clone())), None);
        prop_assert_eq!(result.is_some(), text.len() > max_length);
    }

    #[test]
    fn min_length_boundary(text in "[a-z]{1,40}", min_length in 1usize..40) {
        let field = text_field(false).with_validation(FieldValidation {
            min_length: Some(min_length),
            ..Default::default()
        });
        let result = validate_field(&field, Some(&FieldValue::Text(text.clone())), None);
        prop_assert_eq!(result.is_some(), text.len() < min_length);
    }

    #[test]
    fn numbers_in_range_pass(min in -1000i32..0, span in 0i32..2000, offset in 0i32..2000) {
        let max = min + span;
        let n = min + offset.min(span);
        let field = FieldDefinition::new("amount", "Amount", FieldType::Number).with_validation(
            FieldValidation {
                min: Some(f64::from(min)),
                max: Some(f64::from(max)),
                ..Default::default()
            },
        );
        prop_assert_eq!(
            validate_field(&field, Some(&FieldValue::Number(f64::from(n))), None),
            None
        );
        // Text input is coerced the same way
        prop_assert_eq!(
            validate_field(&field, Some(&FieldValue::Text(n.to_string())), None),
            None
        );
    }

    #[test]
    fn numbers_above_max_fail(max in -1000i32..1000, over in 1i32..1000) {
        let field = FieldDefinition::new("amount", "Amount", FieldType::Number).with_validation(
            FieldValidation {
                max: Some(f64::from(max)),
                ..Default::default()
            },
        );
        let value = FieldValue::Number(f64::from(max + over));
        prop_assert!(validate_field(&field, Some(&value), None).is_some());
    }
}

// ============================================================================
// Determinism
// ============================================================================

proptest! {
    #[test]
    fn validation_is_deterministic(text in ".{0,60}") {
        let field = FieldDefinition::new("email", "Email", FieldType::Email).required();
        let pattern = regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        let value = FieldValue::Text(text);
        let first = validate_field(&field, Some(&value), Some(&pattern));
        let second = validate_field(&field, Some(&value), Some(&pattern));
        prop_assert_eq!(first, second);
    }
}

#[test]
fn required_field_rejects_missing_and_empty() {
    let field = text_field(true);
    assert_eq!(
        validate_field(&field, None, None).as_deref(),
        Some("Value is required")
    );
    assert_eq!(
        validate_field(&field, Some(&FieldValue::from("")), None).as_deref(),
        Some("Value is required")
    );
}
