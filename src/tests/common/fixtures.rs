//! Test Fixtures
//!
//! Small wizard definitions shaped after the situations the engine has to
//! handle: plain linear flows, conditional branches and skippable steps.

use crate::core::wizard::{
    ConditionOperator, FieldDefinition, FieldOption, FieldType, StepCondition, StepDefinition,
    StepSettings, Wizard, WizardDefinition, WizardOptions,
};

// =============================================================================
// Definitions
// =============================================================================

/// Three steps; the second has a required email field.
pub fn email_definition() -> WizardDefinition {
    WizardDefinition::new(
        "signup",
        "Sign Up",
        vec![
            StepDefinition::new("name", "Name")
                .with_field(FieldDefinition::new("name", "Name", FieldType::Text).required()),
            StepDefinition::new("contact", "Contact")
                .with_field(FieldDefinition::new("email", "Email", FieldType::Email).required()),
            StepDefinition::new("done", "Done")
                .with_field(FieldDefinition::new("notes", "Notes", FieldType::Textarea)),
        ],
    )
}

/// Four steps; the third is only shown to company leads.
pub fn branching_definition() -> WizardDefinition {
    WizardDefinition::new(
        "branching",
        "Branching",
        vec![
            StepDefinition::new("type", "Type").with_field(
                FieldDefinition::new("lead_type", "Lead type", FieldType::Radio)
                    .required()
                    .with_options(vec![
                        FieldOption::new("Individual", "individual"),
                        FieldOption::new("Company", "company"),
                    ]),
            ),
            StepDefinition::new("contact", "Contact")
                .with_field(FieldDefinition::new("first_name", "First name", FieldType::Text)),
            StepDefinition::new("company", "Company")
                .with_field(FieldDefinition::new("company_name", "Company", FieldType::Text))
                .with_condition(StepCondition::new(
                    "lead_type",
                    ConditionOperator::Equals,
                    "company",
                )),
            StepDefinition::new("review", "Review")
                .with_field(FieldDefinition::new("notes", "Notes", FieldType::Textarea)),
        ],
    )
}

/// `count` steps with one optional text field each, all skippable.
pub fn linear_definition(count: usize) -> WizardDefinition {
    let steps = (0..count)
        .map(|i| {
            StepDefinition::new(format!("step_{i}"), format!("Step {i}"))
                .with_field(FieldDefinition::new(
                    format!("field_{i}"),
                    format!("Field {i}"),
                    FieldType::Text,
                ))
                .with_settings(StepSettings {
                    allow_skip: true,
                    ..Default::default()
                })
        })
        .collect();
    WizardDefinition::new("linear", "Linear", steps)
}

// =============================================================================
// Sessions
// =============================================================================

pub fn create_wizard(definition: WizardDefinition) -> Wizard {
    Wizard::new(definition, WizardOptions::default()).expect("fixture definition is valid")
}
