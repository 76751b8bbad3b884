//! Flat field store shared by every step of a wizard.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::definition::StepDefinition;
use super::types::FieldValue;

/// Single source of truth for field values.
///
/// A field that was never touched is absent, which is distinct from a field
/// that was cleared (present with an empty value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState(IndexMap<String, FieldValue>);

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite-or-insert. No validation happens here.
    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field_id.into(), value.into());
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.0.get(field_id)
    }

    /// Return the field to the untouched state.
    pub fn remove(&mut self, field_id: &str) -> Option<FieldValue> {
        self.0.shift_remove(field_id)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    /// Present and non-empty.
    pub fn has_value(&self, field_id: &str) -> bool {
        self.get(field_id).is_some_and(|v| !v.is_empty())
    }

    /// The subset of values belonging to `step`, in the step's field order.
    pub fn values_for_step(&self, step: &StepDefinition) -> FormState {
        let mut subset = FormState::new();
        for field in &step.fields {
            if let Some(value) = self.get(&field.id) {
                subset.set(field.id.clone(), value.clone());
            }
        }
        subset
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the entries whose id passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|k, _| keep(k));
    }
}

impl FromIterator<(String, FieldValue)> for FormState {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
