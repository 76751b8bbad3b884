//! Validator
//!
//! Pure functions turning a step definition plus the current form state into
//! [`ValidationErrors`]. Nothing here mutates state or logs; the engine
//! decides when validation runs (on `next()` and `submit()` only).
//!
//! Per field, checks run in order and the first failure wins:
//! required, numeric coercion, `min_length`, `max_length`, pattern,
//! numeric `min`/`max`, then option membership and date format.

use std::collections::HashMap;

use chrono::NaiveDate;
use regex::Regex;

use super::definition::{FieldDefinition, FieldType, StepDefinition};
use super::form_state::FormState;
use super::types::{format_number, FieldValue, ValidationErrors, STEP_ERROR_KEY};

/// Validate every field of `step` plus the step-level gate.
///
/// `patterns` maps field ids to their compiled patterns (see
/// [`super::StepRegistry::patterns`]). An empty result means the step passes.
pub fn validate_step(
    step: &StepDefinition,
    state: &FormState,
    patterns: &HashMap<String, Regex>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in &step.fields {
        let value = state.get(&field.id);
        if let Some(message) = validate_field(field, value, patterns.get(&field.id)) {
            errors.insert(field.id.clone(), message);
        }
    }

    if let Some(message) = validate_step_gate(step, state) {
        errors.insert(STEP_ERROR_KEY, message);
    }

    errors
}

/// Validate a single field value. Returns the first error message, if any.
pub fn validate_field(
    field: &FieldDefinition,
    value: Option<&FieldValue>,
    pattern: Option<&Regex>,
) -> Option<String> {
    let label = field.display_label();

    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ if field.required => return Some(format!("{label} is required")),
        _ => return None,
    };

    let number = if field.field_type == FieldType::Number {
        match value.as_number() {
            Some(n) => Some(n),
            None => return Some(format!("{label} must be a valid number")),
        }
    } else {
        None
    };

    let rules = field.validation.clone().unwrap_or_default();

    if let (Some(min_length), Some(length)) = (rules.min_length, value.length()) {
        if length < min_length {
            return Some(format!("{label} must be at least {min_length} characters"));
        }
    }

    if let (Some(max_length), Some(length)) = (rules.max_length, value.length()) {
        if length > max_length {
            return Some(format!("{label} must be no more than {max_length} characters"));
        }
    }

    if let Some(pattern) = pattern {
        if !pattern.is_match(&value.as_text()) {
            return Some(
                rules
                    .custom_message
                    .clone()
                    .unwrap_or_else(|| format!("{label} format is invalid")),
            );
        }
    }

    if let Some(n) = number {
        if let Some(min) = rules.min {
            if n < min {
                return Some(format!("{label} must be at least {}", format_number(min)));
            }
        }
        if let Some(max) = rules.max {
            if n > max {
                return Some(format!("{label} must be no more than {}", format_number(max)));
            }
        }
    }

    if field.field_type.is_choice() && !field.options.is_empty() && !within_options(field, value) {
        return Some(format!("{label} has an invalid selection"));
    }

    if field.field_type == FieldType::Date {
        let text = value.as_text();
        if NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").is_err() {
            return Some(format!("{label} must be a valid date"));
        }
    }

    None
}

/// Step-level gate: `required`, `min_fields`, `max_fields`.
fn validate_step_gate(step: &StepDefinition, state: &FormState) -> Option<String> {
    let rules = &step.validation;
    let filled = step
        .fields
        .iter()
        .filter(|f| state.has_value(&f.id))
        .count();

    if let Some(min) = rules.min_fields {
        if filled < min {
            return Some(format!("At least {min} fields must be completed"));
        }
    } else if rules.required && filled == 0 {
        return Some("This step is required".to_string());
    }

    if let Some(max) = rules.max_fields {
        if filled > max {
            return Some(format!("No more than {max} fields may be completed"));
        }
    }

    None
}

fn within_options(field: &FieldDefinition, value: &FieldValue) -> bool {
    let allowed = |v: &str| field.options.iter().any(|o| o.value == v);
    match value {
        FieldValue::List(items) => items.iter().all(|item| allowed(item)),
        // A lone checkbox toggle is not an option pick.
        FieldValue::Bool(_) => field.field_type == FieldType::Checkbox,
        other => allowed(&other.as_text()),
    }
}
