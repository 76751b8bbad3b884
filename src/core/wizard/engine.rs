//! Wizard Facade
//!
//! [`Wizard`] owns one wizard session: the registry, the form state, the
//! current errors, the navigation position and the progress clock. Every
//! mutator takes `&mut self` and runs to completion; no transition panics or
//! returns an error. Misuse (unreachable jumps, skipping a non-skippable
//! step, early submit) is logged and ignored.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::definition::{StepDefinition, WizardDefinition};
use super::form_state::FormState;
use super::navigation::NavigationController;
use super::progress::{completion_percentage, ProgressTracker};
use super::registry::StepRegistry;
use super::snapshot::WizardSnapshot;
use super::types::{
    ConfigError, FieldValue, SubmitOutcome, Transition, ValidationErrors, WizardError,
    WizardProgress,
};
use super::validator::validate_step;

/// Host callback receiving the form state when an auto-save is due.
pub type SaveProgressFn = Box<dyn FnMut(&FormState) -> anyhow::Result<()> + Send>;

/// Host-provided hooks.
#[derive(Default)]
pub struct WizardOptions {
    pub save_progress: Option<SaveProgressFn>,
}

impl WizardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_save_progress<F>(mut self, save: F) -> Self
    where
        F: FnMut(&FormState) -> anyhow::Result<()> + Send + 'static,
    {
        self.save_progress = Some(Box::new(save));
        self
    }
}

impl std::fmt::Debug for WizardOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardOptions")
            .field("save_progress", &self.save_progress.is_some())
            .finish()
    }
}

/// Build a wizard, validating the definition.
pub fn create_wizard(
    definition: WizardDefinition,
    options: WizardOptions,
) -> Result<Wizard, ConfigError> {
    Wizard::new(definition, options)
}

pub struct Wizard {
    id: Uuid,
    registry: StepRegistry,
    state: FormState,
    errors: ValidationErrors,
    navigation: NavigationController,
    progress: ProgressTracker,
    dirty: bool,
    /// An unsaved edit belongs to a step with `save_progress`.
    pending_save: bool,
    auto_saved_at: Option<DateTime<Utc>>,
    options: WizardOptions,
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("id", &self.id)
            .field("definition", &self.registry.definition().id)
            .field("current", &self.navigation.current())
            .field("furthest", &self.navigation.furthest())
            .field("errors", &self.errors)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Wizard {
    pub fn new(definition: WizardDefinition, options: WizardOptions) -> Result<Self, ConfigError> {
        let registry = StepRegistry::new(definition)?;
        let wizard = Self {
            id: Uuid::new_v4(),
            registry,
            state: FormState::new(),
            errors: ValidationErrors::new(),
            navigation: NavigationController::new(),
            progress: ProgressTracker::new(),
            dirty: false,
            pending_save: false,
            auto_saved_at: None,
            options,
        };

        info!(
            wizard_id = %wizard.id,
            definition = %wizard.registry.definition().id,
            total_steps = wizard.registry.total_steps(),
            "Started wizard session"
        );
        Ok(wizard)
    }

    /// Rebuild a session from a snapshot taken for the same definition.
    ///
    /// Values for fields the definition no longer has are dropped.
    pub fn restore(
        definition: WizardDefinition,
        options: WizardOptions,
        snapshot: WizardSnapshot,
    ) -> Result<Self, WizardError> {
        if snapshot.definition_id != definition.id {
            return Err(WizardError::InvalidSnapshot(format!(
                "snapshot is for '{}', not '{}'",
                snapshot.definition_id, definition.id
            )));
        }

        let registry = StepRegistry::new(definition)?;
        let total = registry.total_steps();

        for index in [snapshot.current_step_index, snapshot.furthest_reached_index]
            .into_iter()
            .chain(snapshot.completed_step_indices.iter().copied())
        {
            if index >= total {
                return Err(WizardError::IndexOutOfRange { index, total });
            }
        }
        if snapshot.current_step_index > snapshot.furthest_reached_index {
            return Err(WizardError::InvalidSnapshot(format!(
                "current step {} is beyond furthest reached step {}",
                snapshot.current_step_index, snapshot.furthest_reached_index
            )));
        }

        let mut state = snapshot.form_state;
        let before = state.len();
        state.retain(|field_id| registry.has_field(field_id));
        if state.len() < before {
            warn!(
                wizard_id = %snapshot.id,
                dropped = before - state.len(),
                "Dropped values for unknown fields while restoring"
            );
        }

        if !registry.is_step_visible(snapshot.current_step_index, &state) {
            return Err(WizardError::InvalidSnapshot(format!(
                "current step {} is hidden by the restored values",
                snapshot.current_step_index
            )));
        }

        let wizard = Self {
            id: snapshot.id,
            registry,
            state,
            errors: ValidationErrors::new(),
            navigation: NavigationController::from_parts(
                snapshot.current_step_index,
                snapshot.furthest_reached_index,
                snapshot.completed_step_indices,
            ),
            progress: ProgressTracker::resume(snapshot.elapsed_seconds, snapshot.started_at),
            dirty: false,
            pending_save: false,
            auto_saved_at: snapshot.auto_saved_at,
            options,
        };

        info!(
            wizard_id = %wizard.id,
            step = wizard.navigation.current(),
            "Restored wizard session"
        );
        Ok(wizard)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            id: self.id,
            definition_id: self.registry.definition().id.clone(),
            current_step_index: self.navigation.current(),
            furthest_reached_index: self.navigation.furthest(),
            completed_step_indices: self.navigation.completed().clone(),
            form_state: self.state.clone(),
            elapsed_seconds: self.progress.elapsed_seconds(),
            started_at: self.progress.started_at(),
            updated_at: Utc::now(),
            auto_saved_at: self.auto_saved_at,
        }
    }

    // ========================================================================
    // Field Updates
    // ========================================================================

    /// Store a value, clear that field's error and mark the session dirty.
    ///
    /// Returns `true` when the edit triggered an auto-advance to the next step.
    pub fn set_field(&mut self, field_id: &str, value: impl Into<FieldValue>) -> bool {
        if !self.registry.has_field(field_id) {
            debug!(wizard_id = %self.id, field = field_id, "Setting value for undeclared field");
        }

        self.state.set(field_id, value);
        self.errors.remove(field_id);
        self.touch(field_id);
        if self.leave_hidden_step() {
            return false;
        }

        let step = self.current_step();
        let is_last_field = step.fields.last().is_some_and(|f| f.id == field_id);
        if !(step.settings.auto_advance && is_last_field) {
            return false;
        }
        if !validate_step(step, &self.state, self.registry.patterns()).is_empty() {
            return false;
        }

        debug!(wizard_id = %self.id, field = field_id, "Auto-advancing");
        self.next().moved()
    }

    /// Return a field to the untouched state.
    pub fn clear_field(&mut self, field_id: &str) {
        self.state.remove(field_id);
        self.errors.remove(field_id);
        self.touch(field_id);
        self.leave_hidden_step();
    }

    /// Mark the session dirty, remembering whether the edited field's step
    /// saves progress. Undeclared fields follow the active step.
    fn touch(&mut self, field_id: &str) {
        let saves = match self.registry.step_of_field(field_id) {
            Some(index) => self.registry.steps()[index].settings.save_progress,
            None => self.auto_save_enabled(),
        };
        self.dirty = true;
        self.pending_save |= saves;
    }

    /// An edit can hide the active step through its condition. Fall back to
    /// the closest visible step before it. Returns whether the wizard moved.
    fn leave_hidden_step(&mut self) -> bool {
        let current = self.navigation.current();
        if self.registry.is_step_visible(current, &self.state) {
            return false;
        }

        let transition = self.navigation.back(&self.registry, &self.state);
        self.errors.clear();
        debug!(
            wizard_id = %self.id,
            step = current,
            ?transition,
            "Active step hidden by an edit"
        );
        transition.moved()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Validate the current step and move forward if it passes.
    pub fn next(&mut self) -> Transition {
        let index = self.navigation.current();
        let errors = validate_step(self.current_step(), &self.state, self.registry.patterns());

        if !errors.is_empty() {
            debug!(
                wizard_id = %self.id,
                step = index,
                error_count = errors.len(),
                "Step validation failed"
            );
            self.errors = errors;
            return Transition::Blocked;
        }

        self.errors.clear();
        let transition = self.navigation.advance(&self.registry, &self.state);
        debug!(wizard_id = %self.id, from = index, ?transition, "Advanced");
        transition
    }

    /// Move to the previous visible step. Never validates.
    pub fn previous(&mut self) -> Transition {
        let transition = self.navigation.back(&self.registry, &self.state);
        if transition.moved() {
            self.errors.clear();
            debug!(wizard_id = %self.id, ?transition, "Went back");
        }
        transition
    }

    /// Jump to a visible step at or before the high-water mark.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index == self.navigation.current() {
            return self.is_step_reachable(index);
        }
        let moved = self.navigation.go_to(index, &self.registry, &self.state);
        if moved {
            self.errors.clear();
            debug!(wizard_id = %self.id, step = index, "Jumped to step");
        }
        moved
    }

    /// Move forward without validating, if the current step allows it.
    pub fn skip(&mut self) -> Transition {
        let step = self.current_step();
        if !step.settings.allow_skip {
            debug!(wizard_id = %self.id, step = %step.id, "Step cannot be skipped");
            return Transition::Blocked;
        }

        let transition = self.navigation.skip(&self.registry, &self.state);
        if transition.moved() {
            self.errors.clear();
            debug!(wizard_id = %self.id, ?transition, "Skipped step");
        }
        transition
    }

    /// Validate every visible step and hand the form state to `on_submit`.
    ///
    /// On rejection the wizard moves to the lowest failing step and shows its
    /// errors. Callback errors are returned unchanged.
    pub fn submit<T, E, F>(&mut self, on_submit: F) -> Result<SubmitOutcome<T>, E>
    where
        F: FnOnce(&FormState) -> Result<T, E>,
    {
        if !self.is_terminal_step() {
            debug!(
                wizard_id = %self.id,
                step = self.navigation.current(),
                "Ignoring submit before the terminal step"
            );
            return Ok(SubmitOutcome::NotAtTerminalStep);
        }

        for index in self.registry.visible_indices(&self.state) {
            let step = &self.registry.steps()[index];
            let errors = validate_step(step, &self.state, self.registry.patterns());
            if errors.is_empty() {
                continue;
            }

            warn!(
                wizard_id = %self.id,
                step = %step.id,
                error_count = errors.len(),
                "Submit rejected"
            );
            self.navigation.go_to(index, &self.registry, &self.state);
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected {
                step_index: index,
                errors,
            });
        }

        self.errors.clear();
        let result = on_submit(&self.state)?;
        self.navigation.advance(&self.registry, &self.state);
        self.dirty = false;
        self.pending_save = false;
        info!(
            wizard_id = %self.id,
            fields = self.state.len(),
            elapsed_seconds = self.progress.elapsed_seconds(),
            "Wizard submitted"
        );
        Ok(SubmitOutcome::Submitted(result))
    }

    // ========================================================================
    // Progress & Auto-Save
    // ========================================================================

    /// Advance elapsed time by one second.
    pub fn tick(&mut self) {
        self.progress.tick();
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.pending_save |= self.auto_save_enabled();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the active step wants its progress saved.
    pub fn auto_save_enabled(&self) -> bool {
        self.current_step().settings.save_progress
    }

    pub fn last_auto_save(&self) -> Option<DateTime<Utc>> {
        self.auto_saved_at
    }

    /// Run the `save_progress` hook if an unsaved edit was made on a step
    /// that saves progress, even if the wizard has since moved to a step that
    /// does not. Returns whether a save happened.
    ///
    /// The dirty flag is only cleared when the hook succeeds.
    pub fn flush_auto_save(&mut self) -> anyhow::Result<bool> {
        if !self.save_due() {
            return Ok(false);
        }
        let Some(save) = self.options.save_progress.as_mut() else {
            return Ok(false);
        };
        save(&self.state)?;
        self.saved();
        Ok(true)
    }

    /// Like [`Wizard::flush_auto_save`], but hands a full snapshot to `save`
    /// instead of calling the configured hook.
    pub fn flush_auto_save_with<F>(&mut self, save: F) -> anyhow::Result<bool>
    where
        F: FnOnce(&WizardSnapshot) -> anyhow::Result<()>,
    {
        if !self.save_due() {
            return Ok(false);
        }
        let mut snapshot = self.snapshot();
        snapshot.auto_saved_at = Some(snapshot.updated_at);
        save(&snapshot)?;
        self.saved();
        Ok(true)
    }

    fn save_due(&self) -> bool {
        self.dirty && self.pending_save
    }

    fn saved(&mut self) {
        self.dirty = false;
        self.pending_save = false;
        self.auto_saved_at = Some(Utc::now());
        debug!(wizard_id = %self.id, "Auto-saved progress");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn definition(&self) -> &WizardDefinition {
        self.registry.definition()
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn current_step(&self) -> &StepDefinition {
        // The navigation index only ever holds in-range positions.
        &self.registry.steps()[self.navigation.current()]
    }

    pub fn current_step_index(&self) -> usize {
        self.navigation.current()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn form_state(&self) -> &FormState {
        &self.state
    }

    pub fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.state.get(field_id)
    }

    pub fn progress(&self) -> WizardProgress {
        let current = self.navigation.current();
        let total = self.registry.total_steps();
        WizardProgress {
            current_step_index: current,
            completed_step_indices: self.navigation.completed().clone(),
            furthest_reached_index: self.navigation.furthest(),
            total_steps: total,
            completion_percentage: completion_percentage(current, total),
            elapsed_seconds: self.progress.elapsed_seconds(),
        }
    }

    pub fn elapsed_display(&self) -> String {
        self.progress.elapsed_display()
    }

    pub fn is_step_reachable(&self, index: usize) -> bool {
        self.navigation.can_go_to(index, &self.registry, &self.state)
    }

    /// Indices of the steps currently in the navigable sequence.
    pub fn visible_steps(&self) -> Vec<usize> {
        self.registry.visible_indices(&self.state)
    }

    /// Whether the current step is the last visible one.
    pub fn is_terminal_step(&self) -> bool {
        self.registry.last_visible(&self.state) == Some(self.navigation.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wizard::definition::{
        ConditionOperator, FieldDefinition, FieldType, StepCondition, StepSettings,
    };
    use std::sync::{Arc, Mutex};

    fn definition() -> WizardDefinition {
        WizardDefinition::new(
            "test",
            "Test",
            vec![
                StepDefinition::new("basics", "Basics")
                    .with_field(FieldDefinition::new("name", "Name", FieldType::Text).required())
                    .with_settings(StepSettings {
                        save_progress: true,
                        ..Default::default()
                    }),
                StepDefinition::new("optional", "Optional")
                    .with_field(FieldDefinition::new("notes", "Notes", FieldType::Textarea).required())
                    .with_settings(StepSettings {
                        allow_skip: true,
                        ..Default::default()
                    }),
                StepDefinition::new("vip", "VIP")
                    .with_field(FieldDefinition::new("perk", "Perk", FieldType::Text))
                    .with_condition(StepCondition::new("name", ConditionOperator::Equals, "vip")),
                StepDefinition::new("done", "Done"),
            ],
        )
    }

    fn wizard() -> Wizard {
        Wizard::new(definition(), WizardOptions::default()).unwrap()
    }

    #[test]
    fn test_next_blocks_and_surfaces_errors() {
        let mut w = wizard();
        assert_eq!(w.next(), Transition::Blocked);
        assert_eq!(w.current_step_index(), 0);
        assert_eq!(w.errors().get("name"), Some("Name is required"));
    }

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut w = wizard();
        w.next();
        w.set_field("name", "");
        assert!(w.errors().is_empty());
        assert!(w.is_dirty());
    }

    #[test]
    fn test_skip_respects_allow_skip() {
        let mut w = wizard();
        assert_eq!(w.skip(), Transition::Blocked);

        w.set_field("name", "Ada");
        w.next();
        assert_eq!(w.skip(), Transition::Moved { from: 1, to: 3 });
        assert!(!w.progress().completed_step_indices.contains(&1));
        assert!(w.is_terminal_step());
    }

    #[test]
    fn test_submit_before_terminal_is_ignored() {
        let mut w = wizard();
        let outcome = w.submit(|_| Ok::<_, anyhow::Error>(())).unwrap();
        assert_eq!(outcome, SubmitOutcome::NotAtTerminalStep);
    }

    #[test]
    fn test_submit_reports_lowest_failing_step() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        w.next();
        w.skip();

        let mut called = false;
        let outcome = w
            .submit(|_| {
                called = true;
                Ok::<_, anyhow::Error>(())
            })
            .unwrap();

        assert!(!called);
        match outcome {
            SubmitOutcome::Rejected { step_index, errors } => {
                assert_eq!(step_index, 1);
                assert_eq!(errors.get("notes"), Some("Notes is required"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(w.current_step_index(), 1);
    }

    #[test]
    fn test_submit_propagates_callback_error() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        w.next();
        w.set_field("notes", "call back");
        w.next();

        let result = w.submit(|_| Err::<(), _>("crm offline"));
        assert_eq!(result.unwrap_err(), "crm offline");
    }

    #[test]
    fn test_submit_hands_over_state() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        w.next();
        w.set_field("notes", "call back");
        w.next();

        let outcome = w
            .submit(|state| Ok::<_, anyhow::Error>(state.len()))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted(2));
        assert!(!w.is_dirty());
    }

    #[test]
    fn test_flush_auto_save_clears_dirty_on_success() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let sink = saved.clone();
        let options = WizardOptions::new().with_save_progress(move |state| {
            sink.lock().unwrap().push(state.clone());
            Ok(())
        });
        let mut w = Wizard::new(definition(), options).unwrap();

        assert!(!w.flush_auto_save().unwrap());

        w.set_field("name", "Ada");
        assert!(w.flush_auto_save().unwrap());
        assert!(!w.is_dirty());
        assert!(w.last_auto_save().is_some());
        assert_eq!(saved.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_flush_auto_save_keeps_dirty_on_failure() {
        let options =
            WizardOptions::new().with_save_progress(|_| Err(anyhow::anyhow!("disk full")));
        let mut w = Wizard::new(definition(), options).unwrap();

        w.set_field("name", "Ada");
        assert!(w.flush_auto_save().is_err());
        assert!(w.is_dirty());
    }

    #[test]
    fn test_flush_skipped_when_step_does_not_save() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        assert!(w.flush_auto_save_with(|_| Ok(())).unwrap());
        w.next();
        w.set_field("notes", "x");

        let mut calls = 0;
        let saved = w
            .flush_auto_save_with(|_| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert!(!saved);
        assert_eq!(calls, 0);
        assert!(w.is_dirty());
    }

    #[test]
    fn test_edit_saved_after_moving_to_non_saving_step() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        assert!(w.next().moved());
        assert!(!w.auto_save_enabled());

        let mut saved = None;
        let flushed = w
            .flush_auto_save_with(|snapshot| {
                saved = Some(snapshot.clone());
                Ok(())
            })
            .unwrap();

        assert!(flushed);
        let snapshot = saved.unwrap();
        assert_eq!(snapshot.current_step_index, 1);
        assert_eq!(snapshot.form_state.get("name"), Some(&FieldValue::from("Ada")));
        assert!(!w.is_dirty());

        // Nothing new to save
        assert!(!w.flush_auto_save_with(|_| Ok(())).unwrap());
    }

    #[test]
    fn test_edit_hiding_active_step_moves_back() {
        let mut w = wizard();
        w.set_field("name", "vip");
        w.next();
        w.set_field("notes", "x");
        assert_eq!(w.next(), Transition::Moved { from: 1, to: 2 });
        w.next();
        w.previous();
        assert_eq!(w.current_step_index(), 2);

        assert!(!w.set_field("name", "Ada"));
        assert_eq!(w.current_step_index(), 1);
        assert!(w.errors().is_empty());
        assert_eq!(w.next(), Transition::Moved { from: 1, to: 3 });
    }

    #[test]
    fn test_clearing_condition_field_moves_back() {
        let mut w = wizard();
        w.set_field("name", "vip");
        w.next();
        w.set_field("notes", "x");
        w.next();
        assert_eq!(w.current_step_index(), 2);

        w.clear_field("name");
        assert_eq!(w.current_step_index(), 1);
        assert!(w.registry().is_step_visible(w.current_step_index(), w.form_state()));
    }

    #[test]
    fn test_auto_advance_on_last_field() {
        let definition = WizardDefinition::new(
            "quick",
            "Quick",
            vec![
                StepDefinition::new("pick", "Pick")
                    .with_field(FieldDefinition::new("first", "First", FieldType::Text))
                    .with_field(FieldDefinition::new("last", "Last", FieldType::Text).required())
                    .with_settings(StepSettings {
                        auto_advance: true,
                        ..Default::default()
                    }),
                StepDefinition::new("end", "End"),
            ],
        );
        let mut w = Wizard::new(definition, WizardOptions::default()).unwrap();

        assert!(!w.set_field("first", "a"));
        assert_eq!(w.current_step_index(), 0);

        assert!(w.set_field("last", "b"));
        assert_eq!(w.current_step_index(), 1);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut w = wizard();
        w.set_field("name", "Ada");
        w.next();
        w.tick();
        w.tick();

        let mut snapshot = w.snapshot();
        snapshot.form_state.set("removed_field", "stale");

        let restored = Wizard::restore(definition(), WizardOptions::default(), snapshot).unwrap();
        assert_eq!(restored.id(), w.id());
        assert_eq!(restored.current_step_index(), 1);
        assert_eq!(restored.progress().elapsed_seconds, 2);
        assert!(restored.progress().completed_step_indices.contains(&0));
        assert!(!restored.form_state().contains("removed_field"));
        assert!(!restored.is_dirty());
    }

    #[test]
    fn test_restore_rejects_bad_snapshots() {
        let w = wizard();

        let mut out_of_range = w.snapshot();
        out_of_range.current_step_index = 9;
        out_of_range.furthest_reached_index = 9;
        assert!(matches!(
            Wizard::restore(definition(), WizardOptions::default(), out_of_range),
            Err(WizardError::IndexOutOfRange { index: 9, total: 4 })
        ));

        let mut other = w.snapshot();
        other.definition_id = "other".into();
        assert!(matches!(
            Wizard::restore(definition(), WizardOptions::default(), other),
            Err(WizardError::InvalidSnapshot(_))
        ));

        let mut hidden = w.snapshot();
        hidden.current_step_index = 2;
        hidden.furthest_reached_index = 2;
        assert!(matches!(
            Wizard::restore(definition(), WizardOptions::default(), hidden),
            Err(WizardError::InvalidSnapshot(_))
        ));
    }
}
