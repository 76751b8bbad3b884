//! Auto-saved drafts survive a restart and resume at the same position.

use tempfile::TempDir;

use crate::core::drafts::DraftStore;
use crate::core::wizard::{Wizard, WizardError, WizardOptions};
use crate::tests::common::{branching_definition, create_wizard, email_definition};

fn store() -> (DraftStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = DraftStore::open(dir.path().join("drafts")).expect("Failed to open draft store");
    (store, dir)
}

#[test]
fn test_resume_restores_position_and_values() {
    let (store, _dir) = store();
    let mut wizard = create_wizard(branching_definition());
    wizard.set_field("lead_type", "company");
    assert!(wizard.next().moved());
    wizard.set_field("first_name", "Grace");
    assert!(wizard.next().moved());
    assert_eq!(wizard.current_step().id, "company");
    wizard.tick();
    wizard.tick();

    let saved = wizard
        .flush_auto_save_with(|snapshot| {
            store.save(snapshot)?;
            Ok(())
        })
        .unwrap();
    // No step of this definition opts into auto-save
    assert!(!saved);

    store.save(&wizard.snapshot()).unwrap();
    let snapshot = store
        .latest_for("branching")
        .unwrap()
        .expect("draft was written");

    let resumed = Wizard::restore(branching_definition(), WizardOptions::default(), snapshot)
        .unwrap();
    assert_eq!(resumed.id(), wizard.id());
    assert_eq!(resumed.current_step().id, "company");
    assert_eq!(resumed.value("first_name"), wizard.value("first_name"));
    assert_eq!(resumed.progress(), wizard.progress());
    assert!(!resumed.is_dirty());
}

#[test]
fn test_restore_rejects_other_definition() {
    let (store, _dir) = store();
    let wizard = create_wizard(email_definition());
    store.save(&wizard.snapshot()).unwrap();

    let snapshot = store.load(wizard.id()).unwrap();
    let err = Wizard::restore(branching_definition(), WizardOptions::default(), snapshot)
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidSnapshot(_)));
}

#[test]
fn test_restore_rejects_hidden_current_step() {
    let mut wizard = create_wizard(branching_definition());
    wizard.set_field("lead_type", "company");
    wizard.next();
    wizard.next();
    assert_eq!(wizard.current_step_index(), 2);

    let mut snapshot = wizard.snapshot();
    snapshot.form_state.set("lead_type", "individual");

    let err = Wizard::restore(branching_definition(), WizardOptions::default(), snapshot)
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidSnapshot(_)));
}

#[test]
fn test_latest_draft_wins() {
    let (store, _dir) = store();
    let older = create_wizard(email_definition());
    store.save(&older.snapshot()).unwrap();

    std::thread::sleep(std::time::Duration::from_millis(5));
    let mut newer = create_wizard(email_definition());
    newer.set_field("name", "Ada");
    store.save(&newer.snapshot()).unwrap();

    let latest = store.latest_for("signup").unwrap().unwrap();
    assert_eq!(latest.id, newer.id());
    assert_eq!(store.list().unwrap().len(), 2);
}
