//! Repository traits (interfaces)
//!
//! These traits define the contracts for the filesystem-facing parts of the
//! system, so the use cases can be exercised against any implementation.

mod recovery_writer;
mod study_tree;

pub use recovery_writer::{RecoveredImage, RecoveryError, RecoveryWriter};
pub use study_tree::{
    ExamPairFinder, PatientMetadataReader, RootNotFound, ScanError, StudiesRootResolver,
};
