//! Progress Reporter
//!
//! Elapsed time is driven by the host: each `tick()` adds one second. The
//! engine never reads the wall clock for elapsed time, which keeps it
//! deterministic under test. `started_at` is only recorded for snapshots.

use chrono::{DateTime, Utc};

/// Completion percentage for `current_step_index` out of `total_steps`.
///
/// Counts the steps finished before the current one, so the last of four
/// steps reports 75.
pub fn completion_percentage(current_step_index: usize, total_steps: usize) -> f64 {
    if total_steps == 0 {
        return 0.0;
    }
    current_step_index as f64 / total_steps as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTracker {
    elapsed_seconds: u64,
    started_at: DateTime<Utc>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            started_at: Utc::now(),
        }
    }

    pub fn resume(elapsed_seconds: u64, started_at: DateTime<Utc>) -> Self {
        Self {
            elapsed_seconds,
            started_at,
        }
    }

    pub fn tick(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// `MM:SS`; minutes keep growing past 99.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
