//! Property-based tests for wizard navigation
//!
//! Tests invariants:
//! - The current step stays in range and visible
//! - The high-water mark never decreases and is never behind the current step
//! - Progress stays in `0..100` and follows `current / total`
//! - `previous()` at the first step is a no-op
//! - `go_to` never moves past the high-water mark

use proptest::prelude::*;

use crate::core::wizard::{Transition, Wizard};
use crate::tests::common::{branching_definition, create_wizard, linear_definition};

#[derive(Debug, Clone)]
enum Action {
    Next,
    Previous,
    Skip,
    GoTo(usize),
    Fill(usize),
    Tick,
}

fn arb_action(steps: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Next),
        2 => Just(Action::Previous),
        1 => Just(Action::Skip),
        2 => (0..steps + 2).prop_map(Action::GoTo),
        2 => (0..steps).prop_map(Action::Fill),
        1 => Just(Action::Tick),
    ]
}

fn apply(wizard: &mut Wizard, action: &Action) {
    match action {
        Action::Next => {
            wizard.next();
        }
        Action::Previous => {
            wizard.previous();
        }
        Action::Skip => {
            wizard.skip();
        }
        Action::GoTo(index) => {
            wizard.go_to(*index);
        }
        Action::Fill(i) => {
            wizard.set_field(&format!("field_{i}"), "value");
        }
        Action::Tick => wizard.tick(),
    }
}

proptest! {
    #[test]
    fn session_invariants_hold(
        (steps, actions) in (1usize..8).prop_flat_map(|steps| {
            (Just(steps), prop::collection::vec(arb_action(steps), 0..60))
        })
    ) {
        let mut wizard = create_wizard(linear_definition(steps));
        let mut furthest = 0;

        for action in &actions {
            apply(&mut wizard, action);
            let progress = wizard.progress();

            prop_assert!(progress.current_step_index < steps);
            prop_assert!(progress.furthest_reached_index >= furthest);
            prop_assert!(progress.furthest_reached_index >= progress.current_step_index);
            prop_assert!(progress.completion_percentage >= 0.0);
            prop_assert!(progress.completion_percentage < 100.0);
            prop_assert!(progress
                .completed_step_indices
                .iter()
                .all(|&i| i <= progress.furthest_reached_index));

            furthest = progress.furthest_reached_index;
        }
    }

    #[test]
    fn go_to_respects_high_water_mark(advances in 0usize..6, target in 0usize..8) {
        let mut wizard = create_wizard(linear_definition(6));
        for _ in 0..advances {
            wizard.next();
        }
        let furthest = wizard.progress().furthest_reached_index;

        let moved = wizard.go_to(target);

        prop_assert_eq!(moved, target <= furthest);
        if moved {
            prop_assert_eq!(wizard.current_step_index(), target);
        }
    }

    #[test]
    fn previous_at_first_step_is_noop(ticks in 0u64..10) {
        let mut wizard = create_wizard(linear_definition(3));
        for _ in 0..ticks {
            wizard.tick();
        }
        prop_assert_eq!(wizard.previous(), Transition::Stayed);
        prop_assert_eq!(wizard.current_step_index(), 0);
        prop_assert_eq!(wizard.progress().elapsed_seconds, ticks);
    }

    #[test]
    fn conditional_step_follows_lead_type(is_company in any::<bool>()) {
        let mut wizard = create_wizard(branching_definition());
        let lead_type = if is_company { "company" } else { "individual" };
        wizard.set_field("lead_type", lead_type);

        let visible = wizard.visible_steps();
        prop_assert_eq!(visible.contains(&2), is_company);

        // Walk to the end; the company step is entered only when visible
        let mut seen = vec![wizard.current_step_index()];
        while wizard.next().moved() {
            seen.push(wizard.current_step_index());
        }
        prop_assert_eq!(seen, visible);
    }
}
