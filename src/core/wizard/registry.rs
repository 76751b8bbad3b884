//! Step Registry
//!
//! Holds the ordered, immutable step list of a wizard and answers
//! reachability questions about it. Construction validates the whole
//! configuration and compiles every pattern exactly once, so malformed
//! definitions fail at startup instead of during validation.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use tracing::debug;

use super::definition::{
    ConditionOperator, FieldDefinition, FieldType, StepCondition, StepDefinition,
    WizardDefinition,
};
use super::form_state::FormState;
use super::types::{ConfigError, FieldValue, WizardError, STEP_ERROR_KEY};

/// Format applied to `email` fields that do not configure their own pattern.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Format applied to `phone` fields that do not configure their own pattern.
const PHONE_PATTERN: &str = r"^\+?[0-9()\-.\s]{7,20}$";

#[derive(Debug, Clone)]
pub struct StepRegistry {
    definition: WizardDefinition,
    /// Effective pattern per field id (configured or built-in).
    patterns: HashMap<String, Regex>,
    /// Field id to the index of its owning step.
    field_steps: HashMap<String, usize>,
}

impl StepRegistry {
    /// Validate `definition` and build the registry.
    pub fn new(definition: WizardDefinition) -> Result<Self, ConfigError> {
        if definition.steps.is_empty() {
            return Err(ConfigError::NoSteps(definition.id.clone()));
        }

        let mut step_ids: HashSet<String> = HashSet::new();
        let mut field_steps: HashMap<String, usize> = HashMap::new();
        let mut patterns = HashMap::new();

        for (index, step) in definition.steps.iter().enumerate() {
            if !step_ids.insert(step.id.clone()) {
                return Err(ConfigError::DuplicateStepId(step.id.clone()));
            }
            check_step_ranges(step)?;

            for field in &step.fields {
                if field.id == STEP_ERROR_KEY {
                    return Err(ConfigError::ReservedFieldId {
                        step_id: step.id.clone(),
                        field_id: field.id.clone(),
                    });
                }
                if let Some(&first) = field_steps.get(&field.id) {
                    return Err(ConfigError::DuplicateFieldId {
                        field_id: field.id.clone(),
                        first_step: definition.steps[first].id.clone(),
                        second_step: step.id.clone(),
                    });
                }
                field_steps.insert(field.id.clone(), index);

                check_options(field)?;
                check_field_ranges(field)?;
                if let Some(regex) = compile_pattern(field)? {
                    patterns.insert(field.id.clone(), regex);
                }
            }
        }

        for (index, step) in definition.steps.iter().enumerate() {
            let Some(condition) = &step.conditional else {
                continue;
            };
            if index == 0 {
                return Err(ConfigError::ConditionalFirstStep(step.id.clone()));
            }
            if !field_steps.contains_key(&condition.depends_on_field_id) {
                return Err(ConfigError::UnknownConditionField {
                    step_id: step.id.clone(),
                    field_id: condition.depends_on_field_id.clone(),
                });
            }
        }

        debug!(
            wizard_id = %definition.id,
            steps = definition.steps.len(),
            fields = field_steps.len(),
            "Wizard definition validated"
        );

        Ok(Self {
            definition,
            patterns,
            field_steps,
        })
    }

    pub fn definition(&self) -> &WizardDefinition {
        &self.definition
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.definition.steps
    }

    pub fn total_steps(&self) -> usize {
        self.definition.steps.len()
    }

    /// Step at `index`, or `IndexOutOfRange` outside `[0, total_steps)`.
    pub fn get_step(&self, index: usize) -> Result<&StepDefinition, WizardError> {
        self.definition
            .steps
            .get(index)
            .ok_or(WizardError::IndexOutOfRange {
                index,
                total: self.total_steps(),
            })
    }

    pub fn step_index(&self, step_id: &str) -> Option<usize> {
        self.definition.steps.iter().position(|s| s.id == step_id)
    }

    /// Index of the step owning `field_id`.
    pub fn step_of_field(&self, field_id: &str) -> Option<usize> {
        self.field_steps.get(field_id).copied()
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        let step = self.step_of_field(field_id)?;
        self.definition.steps[step].field(field_id)
    }

    pub fn has_field(&self, field_id: &str) -> bool {
        self.field_steps.contains_key(field_id)
    }

    /// Compiled pattern for `field_id`, if the field has one.
    pub fn pattern(&self, field_id: &str) -> Option<&Regex> {
        self.patterns.get(field_id)
    }

    pub fn patterns(&self) -> &HashMap<String, Regex> {
        &self.patterns
    }

    /// Whether the step at `index` is part of the navigable sequence given the
    /// current values. Out-of-range indices are never visible.
    pub fn is_step_visible(&self, index: usize, state: &FormState) -> bool {
        match self.definition.steps.get(index) {
            Some(step) => match &step.conditional {
                Some(condition) => condition_holds(condition, state),
                None => true,
            },
            None => false,
        }
    }

    /// Indices of every visible step, in order.
    pub fn visible_indices(&self, state: &FormState) -> Vec<usize> {
        (0..self.total_steps())
            .filter(|&i| self.is_step_visible(i, state))
            .collect()
    }

    /// First visible step after `from`.
    pub fn next_visible(&self, from: usize, state: &FormState) -> Option<usize> {
        (from + 1..self.total_steps()).find(|&i| self.is_step_visible(i, state))
    }

    /// Last visible step before `from`.
    pub fn previous_visible(&self, from: usize, state: &FormState) -> Option<usize> {
        (0..from.min(self.total_steps()))
            .rev()
            .find(|&i| self.is_step_visible(i, state))
    }

    /// The terminal step: the last visible one.
    pub fn last_visible(&self, state: &FormState) -> Option<usize> {
        (0..self.total_steps())
            .rev()
            .find(|&i| self.is_step_visible(i, state))
    }
}

// ============================================================================
// Condition Evaluation
// ============================================================================

/// Evaluate a step condition against the current values.
///
/// Numeric comparisons fail closed: if either side cannot be coerced to a
/// number the condition is treated as satisfied and the step stays visible.
pub fn condition_holds(condition: &StepCondition, state: &FormState) -> bool {
    let actual = state.get(&condition.depends_on_field_id);
    let expected = &condition.value;

    match condition.operator {
        ConditionOperator::Equals => actual.is_some_and(|a| values_equal(a, expected)),
        ConditionOperator::NotEquals => !actual.is_some_and(|a| values_equal(a, expected)),
        ConditionOperator::Contains => actual.is_some_and(|a| value_contains(a, expected)),
        ConditionOperator::GreaterThan => {
            compare_numeric(actual, expected).map_or(true, |(a, e)| a > e)
        }
        ConditionOperator::LessThan => {
            compare_numeric(actual, expected).map_or(true, |(a, e)| a < e)
        }
    }
}

fn values_equal(actual: &FieldValue, expected: &FieldValue) -> bool {
    match (actual, expected) {
        (FieldValue::List(a), FieldValue::List(e)) => a == e,
        (FieldValue::List(_), _) | (_, FieldValue::List(_)) => false,
        (FieldValue::Number(a), FieldValue::Number(e)) => a == e,
        (a, e) => a.as_text() == e.as_text(),
    }
}

fn value_contains(actual: &FieldValue, expected: &FieldValue) -> bool {
    let needle = expected.as_text();
    match actual {
        FieldValue::Text(s) => s.contains(&needle),
        FieldValue::List(items) => items.iter().any(|item| *item == needle),
        FieldValue::Bool(_) | FieldValue::Number(_) => false,
    }
}

fn compare_numeric(actual: Option<&FieldValue>, expected: &FieldValue) -> Option<(f64, f64)> {
    Some((actual?.as_number()?, expected.as_number()?))
}

// ============================================================================
// Configuration Checks
// ============================================================================

fn compile_pattern(field: &FieldDefinition) -> Result<Option<Regex>, ConfigError> {
    let configured = field.validation.as_ref().and_then(|v| v.pattern.as_deref());
    let source = match (configured, field.field_type) {
        (Some(pattern), _) => pattern,
        (None, FieldType::Email) => EMAIL_PATTERN,
        (None, FieldType::Phone) => PHONE_PATTERN,
        (None, _) => return Ok(None),
    };

    Regex::new(source)
        .map(Some)
        .map_err(|e| ConfigError::InvalidPattern {
            field_id: field.id.clone(),
            reason: e.to_string(),
        })
}

fn check_options(field: &FieldDefinition) -> Result<(), ConfigError> {
    if field.field_type.requires_options() && field.options.is_empty() {
        return Err(ConfigError::MissingOptions {
            field_id: field.id.clone(),
            field_type: field.field_type.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for option in &field.options {
        if !seen.insert(option.value.as_str()) {
            return Err(ConfigError::DuplicateOptionValue {
                field_id: field.id.clone(),
                value: option.value.clone(),
            });
        }
    }
    Ok(())
}

fn check_field_ranges(field: &FieldDefinition) -> Result<(), ConfigError> {
    let Some(rules) = &field.validation else {
        return Ok(());
    };

    if let (Some(min), Some(max)) = (rules.min_length, rules.max_length) {
        if min > max {
            return Err(ConfigError::InvalidRange {
                id: field.id.clone(),
                reason: format!("min_length {min} exceeds max_length {max}"),
            });
        }
    }
    if let (Some(min), Some(max)) = (rules.min, rules.max) {
        if min > max {
            return Err(ConfigError::InvalidRange {
                id: field.id.clone(),
                reason: format!("min {min} exceeds max {max}"),
            });
        }
    }
    Ok(())
}

fn check_step_ranges(step: &StepDefinition) -> Result<(), ConfigError> {
    let rules = &step.validation;

    if let Some(min) = rules.min_fields {
        if min > step.fields.len() {
            return Err(ConfigError::InvalidRange {
                id: step.id.clone(),
                reason: format!("min_fields {min} exceeds the {} fields of the step", step.fields.len()),
            });
        }
    }
    if let (Some(min), Some(max)) = (rules.min_fields, rules.max_fields) {
        if min > max {
            return Err(ConfigError::InvalidRange {
                id: step.id.clone(),
                reason: format!("min_fields {min} exceeds max_fields {max}"),
            });
        }
    }
    Ok(())
}
