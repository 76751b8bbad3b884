/// leadwizard - Lead Intake Wizard (TUI Edition)
///
/// Core library providing a headless multi-step form engine, the built-in
/// lead intake wizard, draft persistence and the terminal host.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
