//! Application layer
//!
//! Use cases that orchestrate the domain traits, plus the facade the front end
//! talks to.

pub mod dto;
mod recover_xray;
mod recovery_service;
mod scan_studies;

pub use recover_xray::{RecoverXrayUseCase, RecoveryProgressCallback};
pub use recovery_service::RecoveryService;
pub use scan_studies::ScanStudiesUseCase;
