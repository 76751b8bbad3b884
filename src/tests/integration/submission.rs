//! Submitting a finished session hands the form state to the host exactly once.

use std::cell::Cell;

use crate::core::leads::LeadRecord;
use crate::core::wizard::{SubmitOutcome, STEP_ERROR_KEY};
use crate::tests::common::{create_wizard, email_definition};

#[test]
fn test_submit_before_terminal_step_is_ignored() {
    let mut wizard = create_wizard(email_definition());
    let calls = Cell::new(0);

    let outcome = wizard
        .submit(|_| {
            calls.set(calls.get() + 1);
            Ok::<_, anyhow::Error>(())
        })
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::NotAtTerminalStep));
    assert_eq!(calls.get(), 0);
    assert_eq!(wizard.current_step_index(), 0);
}

#[test]
fn test_submit_rejects_cleared_earlier_field() {
    let mut wizard = create_wizard(email_definition());
    wizard.set_field("name", "Ada");
    wizard.next();
    wizard.set_field("email", "ada@example.com");
    wizard.next();
    assert!(wizard.is_terminal_step());

    // Editing an earlier answer from the last step
    wizard.clear_field("name");

    let outcome = wizard.submit(|_| Ok::<_, anyhow::Error>(())).unwrap();
    match outcome {
        SubmitOutcome::Rejected { step_index, errors } => {
            assert_eq!(step_index, 0);
            assert!(errors.contains("name"));
            assert!(!errors.contains(STEP_ERROR_KEY));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(wizard.current_step_index(), 0);
    assert_eq!(wizard.errors().get("name"), Some("Name is required"));
}

#[test]
fn test_submit_writes_lead_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut wizard = create_wizard(email_definition());
    wizard.set_field("name", "Ada");
    wizard.next();
    wizard.set_field("email", "ada@example.com");
    wizard.next();

    let session_id = wizard.id();
    let outcome = wizard
        .submit(|state| {
            LeadRecord::new(session_id, "signup", 0, state.clone()).write_to(dir.path())
        })
        .unwrap();

    let SubmitOutcome::Submitted(path) = outcome else {
        panic!("expected submission");
    };
    let record: LeadRecord =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(record.session_id, session_id);
    assert_eq!(record.fields.get("email"), wizard.value("email"));
    assert!(!wizard.is_dirty());
    assert!(wizard.progress().completed_step_indices.contains(&2));
}

#[test]
fn test_submit_callback_error_propagates() {
    let mut wizard = create_wizard(email_definition());
    wizard.set_field("name", "Ada");
    wizard.next();
    wizard.set_field("email", "ada@example.com");
    wizard.next();

    let result = wizard.submit(|_| Err::<(), _>(anyhow::anyhow!("network down")));

    assert_eq!(result.unwrap_err().to_string(), "network down");
    // The session is left as it was so the host can retry
    assert!(wizard.is_terminal_step());
    assert!(wizard.is_dirty());
}
