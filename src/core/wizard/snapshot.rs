//! Serializable wizard session state, used for drafts and resume.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::form_state::FormState;

/// Everything needed to rebuild a [`super::Wizard`] for the same definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    /// Session id, stable across saves of the same session.
    pub id: Uuid,
    pub definition_id: String,
    pub current_step_index: usize,
    pub furthest_reached_index: usize,
    #[serde(default)]
    pub completed_step_indices: BTreeSet<usize>,
    #[serde(default)]
    pub form_state: FormState,
    #[serde(default)]
    pub elapsed_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub auto_saved_at: Option<DateTime<Utc>>,
}

impl WizardSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
