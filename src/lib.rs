//! Recovery of orphaned X-ray images.
//!
//! When the CS7600 acquisition software crashes before a study is exported, the raw
//! DICOM file (`U*.dcm`) and its preview (`*.jpg`) are left behind in the studies
//! tree. This crate finds those leftovers and copies them to a per-patient folder.
//!
//! The layout follows the usual layering:
//! - [`domain`]: entities, repository traits and pure services
//! - [`application`]: the scan and recover use cases
//! - [`infrastructure`]: filesystem and XML implementations of the traits
//! - [`presentation`]: the command line front end

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::RecoveryService;
pub use config::{ConfigError, FilePattern, RecoveryConfig};
pub use domain::entities::{FolderFailure, LostXray, PatientIdentity, ScanOutcome};
pub use domain::repositories::{RecoveredImage, RecoveryError, RootNotFound, ScanError};
pub use domain::services::sanitize_file_name;
