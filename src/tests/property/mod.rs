//! Property-based tests for the wizard engine
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Test Modules
//!
//! - `validator_props`: field and step validation
//!   - Empty required fields always produce an error, filled ones never do
//!   - Length limits hold at their boundaries
//!   - Validation is deterministic
//!
//! - `navigation_props`: movement through a session
//!   - The current step is always visible and within range
//!   - The high-water mark never decreases
//!   - Progress stays in `0..100`
//!   - `previous()` never fails and never validates
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod navigation_props;
mod validator_props;
