//! Crate-level test suites.
//!
//! Unit tests live next to the code they cover. This tree holds the
//! cross-module suites:
//! - `property`: proptest invariants for validation and navigation
//! - `integration`: full sessions through the engine, drafts and leads

mod common;
mod integration;
mod property;
