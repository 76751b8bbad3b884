pub mod drafts;
pub mod lead_intake;
pub mod leads;
pub mod logging;
pub mod wizard;
