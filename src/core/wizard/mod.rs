//! Wizard Engine
//!
//! A headless, multi-step form engine. A [`WizardDefinition`] describes the
//! steps, their fields and their rules; a [`Wizard`] drives one session over
//! it.
//!
//! # Overview
//!
//! ```text
//! WizardDefinition ──► StepRegistry ──► Wizard ◄── host (TUI, tests)
//!                        (validated,     │  set_field / next / previous
//!                         patterns       │  go_to / skip / submit
//!                         compiled)      ▼
//!                                   FormState + ValidationErrors
//! ```
//!
//! # Design Principles
//!
//! - **Flat state**: field ids are unique across the wizard and key one map
//! - **Validate on commit**: steps are validated on `next()` and `submit()`;
//!   editing a field only clears that field's error
//! - **Conditional steps**: hidden steps are skipped by every transition
//! - **Host-driven time**: the host ticks elapsed time and schedules
//!   auto-saves through [`AutoSaveScheduler`]

mod autosave;
mod definition;
mod engine;
mod form_state;
mod navigation;
mod progress;
mod registry;
mod snapshot;
mod types;
mod validator;

pub use autosave::*;
pub use definition::*;
pub use engine::*;
pub use form_state::*;
pub use navigation::*;
pub use progress::*;
pub use registry::*;
pub use snapshot::*;
pub use types::*;
pub use validator::*;
