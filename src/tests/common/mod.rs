//! Common Test Utilities
//!
//! Shared wizard definitions and session builders used across test modules.

pub mod fixtures;

pub use fixtures::*;
