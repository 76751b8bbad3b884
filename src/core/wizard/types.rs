//! Wizard Domain Types
//!
//! Defines the core runtime types shared by the wizard engine:
//! - [`FieldValue`]: a single value held in the form state
//! - [`ValidationErrors`]: field id to message map returned by validation
//! - [`WizardProgress`]: derived progress report
//! - [`Transition`] / [`SubmitOutcome`]: results of navigation and submission
//! - [`ConfigError`] / [`WizardError`]: error types for wizard operations
//!
//! # Serialization
//!
//! All data types implement `Serialize` and `Deserialize` so hosts can persist
//! drafts and hand values across process boundaries.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};

/// Key used in [`ValidationErrors`] for step-level (not per-field) errors.
pub const STEP_ERROR_KEY: &str = "__step__";

// ============================================================================
// Field Values
// ============================================================================

/// Value of a single field in the form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Empty for "required" purposes: empty text, empty list or an unchecked box.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Bool(b) => !b,
            FieldValue::Number(_) => false,
        }
    }

    /// Length in characters (text) or items (list). Scalars have no length.
    pub fn length(&self) -> Option<usize> {
        match self {
            FieldValue::Text(s) => Some(s.chars().count()),
            FieldValue::List(items) => Some(items.len()),
            FieldValue::Bool(_) | FieldValue::Number(_) => None,
        }
    }

    /// Text form used for pattern matching and loose comparisons.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(","),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
        }
    }

    /// Numeric coercion: numbers as-is, text parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Render whole numbers without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            other => write!(f, "{}", other.as_text()),
        }
    }
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Field id to human-readable message. Absence of a key means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field_id: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field_id.into(), message.into());
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    /// Remove one entry, keeping the order of the rest.
    pub fn remove(&mut self, field_id: &str) -> Option<String> {
        self.0.shift_remove(field_id)
    }

    pub fn step_error(&self) -> Option<&str> {
        self.get(STEP_ERROR_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Progress, Transitions, Submission
// ============================================================================

/// Derived progress report; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardProgress {
    pub current_step_index: usize,
    pub completed_step_indices: BTreeSet<usize>,
    pub furthest_reached_index: usize,
    pub total_steps: usize,
    /// `current_step_index / total_steps * 100`: steps finished before the current one.
    pub completion_percentage: f64,
    pub elapsed_seconds: u64,
}

/// Result of a navigation request. Navigation never fails; it either moves,
/// stays, or is blocked by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    /// Allowed, but there is no further visible step to move to.
    Stayed,
    /// The current step has validation errors (or the move is not permitted).
    Blocked,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

/// Result of [`super::Wizard::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Every visible step passed and the host callback returned `T`.
    Submitted(T),
    /// The lowest-index failing step and its errors. The callback was not invoked.
    Rejected {
        step_index: usize,
        errors: ValidationErrors,
    },
    /// Submit was called before reaching the terminal step.
    NotAtTerminalStep,
}

// ============================================================================
// Error Types
// ============================================================================

/// Malformed wizard configuration, detected once at construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    #[error("Wizard '{0}' has no steps")]
    #[diagnostic(code(wizard::config::no_steps), help("Add at least one step to the definition"))]
    NoSteps(String),

    #[error("Duplicate step id: {0}")]
    #[diagnostic(code(wizard::config::duplicate_step))]
    DuplicateStepId(String),

    #[error("Duplicate field id '{field_id}' (steps '{first_step}' and '{second_step}')")]
    #[diagnostic(
        code(wizard::config::duplicate_field),
        help("Field ids key a flat form state and must be unique across the whole wizard")
    )]
    DuplicateFieldId {
        field_id: String,
        first_step: String,
        second_step: String,
    },

    #[error("Invalid pattern for field '{field_id}': {reason}")]
    #[diagnostic(code(wizard::config::invalid_pattern))]
    InvalidPattern { field_id: String, reason: String },

    #[error("Step '{step_id}' depends on unknown field '{field_id}'")]
    #[diagnostic(code(wizard::config::unknown_dependency))]
    UnknownConditionField { step_id: String, field_id: String },

    #[error("First step '{0}' cannot be conditional")]
    #[diagnostic(
        code(wizard::config::conditional_first_step),
        help("The wizard always starts on the first step; move the condition to a later step")
    )]
    ConditionalFirstStep(String),

    #[error("Field '{field_id}' has duplicate option value '{value}'")]
    #[diagnostic(code(wizard::config::duplicate_option))]
    DuplicateOptionValue { field_id: String, value: String },

    #[error("Field '{field_id}' of type {field_type} has no options")]
    #[diagnostic(code(wizard::config::missing_options))]
    MissingOptions { field_id: String, field_type: String },

    #[error("Field id '{field_id}' (step '{step_id}') is reserved for step-level errors")]
    #[diagnostic(
        code(wizard::config::reserved_field_id),
        help("Rename the field; '__step__' keys the step's own error message")
    )]
    ReservedFieldId { step_id: String, field_id: String },

    #[error("Invalid range on '{id}': {reason}")]
    #[diagnostic(code(wizard::config::invalid_range))]
    InvalidRange { id: String, reason: String },
}

/// Errors that can occur during wizard operations
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Step index {index} out of range (total steps: {total})")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
