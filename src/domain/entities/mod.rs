//! Domain entities
//!
//! The objects a scan produces and the presentation layer consumes.

mod lost_xray;
mod patient;
mod scan_outcome;

pub use lost_xray::{DISPLAY_TIME_FORMAT, LostXray};
pub use patient::PatientIdentity;
pub use scan_outcome::{FolderFailure, ScanOutcome};
