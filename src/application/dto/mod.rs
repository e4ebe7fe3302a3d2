//! Data Transfer Objects

mod recovery_report;

pub use recovery_report::RecoveryReport;
