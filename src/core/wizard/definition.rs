//! Wizard Definition Types
//!
//! Immutable configuration for a wizard: the ordered steps, the fields each
//! step owns, and the rules that gate them. Definitions are plain serde
//! types so they can be authored as JSON, TOML or YAML and loaded with
//! [`WizardDefinition::from_path`].
//!
//! ```rust,ignore
//! use leadwizard::core::wizard::{FieldDefinition, FieldType, StepDefinition, WizardDefinition};
//!
//! let definition = WizardDefinition::new(
//!     "newsletter",
//!     "Newsletter signup",
//!     vec![StepDefinition::new("contact", "Contact")
//!         .with_field(FieldDefinition::new("email", "Email", FieldType::Email).required())],
//! );
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::{FieldValue, WizardError};

// ============================================================================
// Field Definitions
// ============================================================================

/// Input kind of a field. Drives value coercion and built-in format checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Email,
    Phone,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    Number,
    File,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::File => "file",
        }
    }

    /// Whether the field picks from a list of [`FieldOption`]s.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Choice fields that cannot work without options.
    pub fn requires_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable option of a select, radio or checkbox field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Per-field validation rules. All rules are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldValidation {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regular expression the value (as text) must match somewhere.
    pub pattern: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Replaces the generic message when `pattern` does not match.
    pub custom_message: Option<String>,
}

/// A single named input within a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Key into the flat form state; unique across the whole wizard.
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            field_type,
            required: false,
            options: Vec::new(),
            validation: None,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Label used in error messages; falls back to the id.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

// ============================================================================
// Step Definitions
// ============================================================================

/// Step-level gate, evaluated independently of the per-field checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepValidation {
    /// At least one field of the step must carry a value.
    pub required: bool,
    /// At least this many fields must carry a value ("any 3 of these 5").
    pub min_fields: Option<usize>,
    pub max_fields: Option<usize>,
}

/// Comparison used by a [`StepCondition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    /// Substring of a text value or membership in a list value.
    Contains,
    GreaterThan,
    LessThan,
}

/// Visibility rule: the step is shown only while the referenced field's
/// value satisfies the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepCondition {
    pub depends_on_field_id: String,
    pub operator: ConditionOperator,
    pub value: FieldValue,
}

impl StepCondition {
    pub fn new(
        depends_on_field_id: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            depends_on_field_id: depends_on_field_id.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Behavioural switches of a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepSettings {
    pub allow_skip: bool,
    pub auto_advance: bool,
    pub save_progress: bool,
}

/// One page of the wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub validation: StepValidation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<StepCondition>,
    #[serde(default)]
    pub settings: StepSettings,
}

impl StepDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            fields: Vec::new(),
            validation: StepValidation::default(),
            conditional: None,
            settings: StepSettings::default(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_validation(mut self, validation: StepValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_condition(mut self, condition: StepCondition) -> Self {
        self.conditional = Some(condition);
        self
    }

    pub fn with_settings(mut self, settings: StepSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn field(&self, field_id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn has_field(&self, field_id: &str) -> bool {
        self.field(field_id).is_some()
    }
}

// ============================================================================
// Wizard Definition
// ============================================================================

/// A complete wizard: identity plus the ordered steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDefinition {
    pub id: String,
    pub title: String,
    pub steps: Vec<StepDefinition>,
}

impl WizardDefinition {
    pub fn new(id: impl Into<String>, title: impl Into<String>, steps: Vec<StepDefinition>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            steps,
        }
    }

    /// Load a definition from disk. The format follows the file extension:
    /// `.json`, `.toml`, `.yaml` / `.yml`.
    pub fn from_path(path: &Path) -> Result<Self, WizardError> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json(&contents),
            "toml" => Self::from_toml(&contents),
            "yaml" | "yml" => Self::from_yaml(&contents),
            other => Err(WizardError::Parse(format!(
                "unsupported definition format '{other}' for {}",
                path.display()
            ))),
        }
    }

    pub fn from_json(contents: &str) -> Result<Self, WizardError> {
        serde_json::from_str(contents).map_err(|e| WizardError::Parse(e.to_string()))
    }

    pub fn from_toml(contents: &str) -> Result<Self, WizardError> {
        toml::from_str(contents).map_err(|e| WizardError::Parse(e.to_string()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self, WizardError> {
        serde_yaml_ng::from_str(contents).map_err(|e| WizardError::Parse(e.to_string()))
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }
}
