//! Integration tests: complete sessions through the engine, the draft store
//! and the lead writer.

mod draft_resume;
mod submission;
