//! Terminal host for the wizard engine.

pub mod app;
pub mod events;
pub mod theme;
pub mod views;
