//! Navigation Controller
//!
//! Tracks where the user is: the current step, the furthest step ever
//! reached (high-water mark) and the set of steps completed through a clean
//! `next()`. Both the mark and the set are maintained incrementally on every
//! transition rather than recomputed.
//!
//! The controller never validates. The engine validates first and only then
//! asks the controller to advance.

use std::collections::BTreeSet;

use tracing::debug;

use super::form_state::FormState;
use super::registry::StepRegistry;
use super::types::Transition;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationController {
    current: usize,
    furthest: usize,
    completed: BTreeSet<usize>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a controller from persisted positions. The caller checks ranges.
    pub fn from_parts(current: usize, furthest: usize, completed: BTreeSet<usize>) -> Self {
        Self {
            current,
            furthest: furthest.max(current),
            completed,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn furthest(&self) -> usize {
        self.furthest
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Mark the current step completed and move to the next visible step.
    pub fn advance(&mut self, registry: &StepRegistry, state: &FormState) -> Transition {
        self.completed.insert(self.current);
        self.step_forward(registry, state)
    }

    /// Move to the next visible step without marking the current one completed.
    pub fn skip(&mut self, registry: &StepRegistry, state: &FormState) -> Transition {
        self.step_forward(registry, state)
    }

    /// Move to the previous visible step. A no-op on the first step.
    pub fn back(&mut self, registry: &StepRegistry, state: &FormState) -> Transition {
        match registry.previous_visible(self.current, state) {
            Some(to) => {
                let from = self.current;
                self.current = to;
                Transition::Moved { from, to }
            }
            None => Transition::Stayed,
        }
    }

    /// Whether `target` may be jumped to: in range, visible, and not beyond
    /// the high-water mark.
    pub fn can_go_to(&self, target: usize, registry: &StepRegistry, state: &FormState) -> bool {
        target < registry.total_steps()
            && target <= self.furthest
            && registry.is_step_visible(target, state)
    }

    pub fn go_to(&mut self, target: usize, registry: &StepRegistry, state: &FormState) -> bool {
        if !self.can_go_to(target, registry, state) {
            debug!(
                target,
                furthest = self.furthest,
                total = registry.total_steps(),
                "Ignoring jump to unreachable step"
            );
            return false;
        }
        self.current = target;
        true
    }

    fn step_forward(&mut self, registry: &StepRegistry, state: &FormState) -> Transition {
        match registry.next_visible(self.current, state) {
            Some(to) => {
                let from = self.current;
                self.current = to;
                self.furthest = self.furthest.max(to);
                Transition::Moved { from, to }
            }
            None => Transition::Stayed,
        }
    }
}
