//! Built-in "add lead" wizard.
//!
//! Steps:
//! 1. Lead type - individual or company
//! 2. Contact - name, email, phone
//! 3. Company - only for company leads
//! 4. Qualification - budget, timeline, interests (skippable)
//! 5. Review - consent and follow-up date

use crate::core::wizard::{
    ConditionOperator, FieldDefinition, FieldOption, FieldType, FieldValidation, StepCondition,
    StepDefinition, StepSettings, StepValidation, WizardDefinition,
};

pub const LEAD_INTAKE_ID: &str = "lead_intake";

fn options(pairs: &[(&str, &str)]) -> Vec<FieldOption> {
    pairs
        .iter()
        .map(|(label, value)| FieldOption::new(*label, *value))
        .collect()
}

fn saving() -> StepSettings {
    StepSettings {
        save_progress: true,
        ..Default::default()
    }
}

pub fn lead_intake_definition() -> WizardDefinition {
    let lead_type = StepDefinition::new("lead_type", "Lead Type")
        .with_subtitle("Who are we talking to?")
        .with_field(
            FieldDefinition::new("lead_type", "Lead type", FieldType::Radio)
                .required()
                .with_options(options(&[
                    ("Individual", "individual"),
                    ("Company", "company"),
                ])),
        )
        .with_settings(StepSettings {
            auto_advance: true,
            save_progress: true,
            ..Default::default()
        });

    let contact = StepDefinition::new("contact", "Contact Details")
        .with_field(
            FieldDefinition::new("first_name", "First name", FieldType::Text)
                .required()
                .with_validation(FieldValidation {
                    max_length: Some(50),
                    ..Default::default()
                }),
        )
        .with_field(
            FieldDefinition::new("last_name", "Last name", FieldType::Text)
                .required()
                .with_validation(FieldValidation {
                    max_length: Some(50),
                    ..Default::default()
                }),
        )
        .with_field(
            FieldDefinition::new("email", "Email", FieldType::Email)
                .required()
                .with_placeholder("name@example.com"),
        )
        .with_field(
            FieldDefinition::new("phone", "Phone", FieldType::Phone)
                .with_placeholder("+1 555 010 0000"),
        )
        .with_settings(saving());

    let company = StepDefinition::new("company", "Company")
        .with_subtitle("Tell us about the organisation")
        .with_field(FieldDefinition::new("company_name", "Company name", FieldType::Text).required())
        .with_field(
            FieldDefinition::new("company_size", "Company size", FieldType::Select)
                .required()
                .with_options(options(&[
                    ("1-10", "1-10"),
                    ("11-50", "11-50"),
                    ("51-200", "51-200"),
                    ("200+", "200+"),
                ])),
        )
        .with_field(
            FieldDefinition::new("website", "Website", FieldType::Text).with_validation(
                FieldValidation {
                    pattern: Some(r"^https?://\S+$".to_string()),
                    custom_message: Some("Website must start with http:// or https://".to_string()),
                    ..Default::default()
                },
            ),
        )
        .with_condition(StepCondition::new(
            "lead_type",
            ConditionOperator::Equals,
            "company",
        ))
        .with_settings(saving());

    let qualification = StepDefinition::new("qualification", "Qualification")
        .with_field(
            FieldDefinition::new("budget", "Budget", FieldType::Number).with_validation(
                FieldValidation {
                    min: Some(0.0),
                    max: Some(10_000_000.0),
                    ..Default::default()
                },
            ),
        )
        .with_field(
            FieldDefinition::new("timeline", "Timeline", FieldType::Select).with_options(options(&[
                ("Immediately", "immediate"),
                ("This quarter", "quarter"),
                ("This year", "year"),
                ("Just browsing", "browsing"),
            ])),
        )
        .with_field(
            FieldDefinition::new("interests", "Interests", FieldType::Checkbox).with_options(
                options(&[
                    ("Product demo", "demo"),
                    ("Pricing", "pricing"),
                    ("Partnership", "partnership"),
                    ("Support", "support"),
                ]),
            ),
        )
        .with_field(
            FieldDefinition::new("notes", "Notes", FieldType::Textarea).with_validation(
                FieldValidation {
                    max_length: Some(500),
                    ..Default::default()
                },
            ),
        )
        .with_validation(StepValidation {
            min_fields: Some(1),
            ..Default::default()
        })
        .with_settings(StepSettings {
            allow_skip: true,
            save_progress: true,
            ..Default::default()
        });

    let review = StepDefinition::new("review", "Review")
        .with_subtitle("Confirm and schedule a follow-up")
        .with_field(FieldDefinition::new("follow_up", "Follow-up date", FieldType::Date))
        .with_field(
            FieldDefinition::new("consent", "Consent to contact", FieldType::Checkbox).required(),
        );

    WizardDefinition::new(
        LEAD_INTAKE_ID,
        "Add Lead",
        vec![lead_type, contact, company, qualification, review],
    )
}
