//! Submitted leads, written as one JSON file per lead.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::wizard::FormState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    /// Wizard session that produced the lead.
    pub session_id: Uuid,
    pub definition_id: String,
    pub submitted_at: DateTime<Utc>,
    pub elapsed_seconds: u64,
    pub fields: FormState,
}

impl LeadRecord {
    pub fn new(
        session_id: Uuid,
        definition_id: impl Into<String>,
        elapsed_seconds: u64,
        fields: FormState,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            definition_id: definition_id.into(),
            submitted_at: Utc::now(),
            elapsed_seconds,
            fields,
        }
    }

    /// Write the record to `<dir>/<id>.json`, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.id));
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        tracing::info!(lead_id = %self.id, path = %path.display(), "Lead written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lead() {
        let dir = tempfile::tempdir().unwrap();
        let mut fields = FormState::new();
        fields.set("email", "ada@example.com");
        fields.set("interests", vec!["demo", "pricing"]);

        let record = LeadRecord::new(Uuid::new_v4(), "lead_intake", 42, fields);
        let path = record.write_to(&dir.path().join("leads")).unwrap();

        let stored: LeadRecord =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(stored, record);
    }
}
