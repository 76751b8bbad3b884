//! Draft Store
//!
//! Persists wizard snapshots as JSON files, one per session, so an
//! interrupted intake can be resumed. Files are named `<session id>.json`
//! and written through a temporary file so a crash never leaves a torn draft.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::core::wizard::WizardSnapshot;

/// Error type for draft persistence.
#[derive(Debug, Error)]
pub enum DraftError {
    /// No draft file for the given session.
    #[error("Draft not found: {0}")]
    NotFound(Uuid),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error for file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DraftError>;

/// Listing entry for a stored draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftSummary {
    pub id: Uuid,
    pub definition_id: String,
    pub current_step_index: usize,
    pub field_count: usize,
    pub updated_at: DateTime<Utc>,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write `snapshot`, replacing any earlier draft of the same session.
    pub fn save(&self, snapshot: &WizardSnapshot) -> Result<PathBuf> {
        let path = self.path_for(snapshot.id);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, snapshot.to_json()?)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(
            draft_id = %snapshot.id,
            step = snapshot.current_step_index,
            "Saved draft"
        );
        Ok(path)
    }

    pub fn load(&self, id: Uuid) -> Result<WizardSnapshot> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(DraftError::NotFound(id));
        }
        let contents = fs::read_to_string(&path)?;
        Ok(WizardSnapshot::from_json(&contents)?)
    }

    /// Remove a draft. Returns `false` if there was nothing to remove.
    pub fn delete(&self, id: Uuid) -> Result<bool> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        tracing::debug!(draft_id = %id, "Deleted draft");
        Ok(true)
    }

    /// All readable drafts, most recently updated first.
    ///
    /// Unreadable files are skipped with a warning.
    pub fn list(&self) -> Result<Vec<DraftSummary>> {
        let mut drafts = Vec::new();

        for entry in fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let snapshot = match fs::read_to_string(&path)
                .map_err(DraftError::from)
                .and_then(|c| Ok(WizardSnapshot::from_json(&c)?))
            {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable draft");
                    continue;
                }
            };

            drafts.push(DraftSummary {
                id: snapshot.id,
                definition_id: snapshot.definition_id,
                current_step_index: snapshot.current_step_index,
                field_count: snapshot.form_state.len(),
                updated_at: snapshot.updated_at,
                path,
            });
        }

        drafts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(drafts)
    }

    /// Most recent draft for `definition_id`, if any.
    pub fn latest_for(&self, definition_id: &str) -> Result<Option<WizardSnapshot>> {
        match self
            .list()?
            .into_iter()
            .find(|d| d.definition_id == definition_id)
        {
            Some(summary) => self.load(summary.id).map(Some),
            None => Ok(None),
        }
    }
}
