//! Studies tree traits
//!
//! Defines how the scanner locates the studies root, reads patient details and
//! pairs raw images with previews.

use crate::domain::entities::{LostXray, PatientIdentity};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// None of the candidate studies directories exists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to locate the studies directory. Checked: {}", format_probed(.probed))]
pub struct RootNotFound {
    /// Locations that were checked, in probe order
    pub probed: Vec<PathBuf>,
}

fn format_probed(probed: &[PathBuf]) -> String {
    if probed.is_empty() {
        return "(none)".to_string();
    }
    probed
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while reading the studies tree
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classifies an I/O error raised while touching `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let shown = path.display().to_string();
        match err.kind() {
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(shown),
            io::ErrorKind::NotFound => ScanError::DirectoryNotFound(shown),
            _ => ScanError::Io {
                path: shown,
                source: err,
            },
        }
    }
}

/// Locates the directory holding the study folders
pub trait StudiesRootResolver {
    /// Returns the first candidate location that exists
    fn resolve_root(&self) -> Result<PathBuf, RootNotFound>;
}

/// Reads the patient identity stored next to a study
///
/// A missing, malformed or incomplete sidecar is not an error: it yields
/// `Ok(None)` and the study is skipped.
pub trait PatientMetadataReader {
    fn read_identity(&self, study_folder: &Path) -> Result<Option<PatientIdentity>, ScanError>;
}

/// Finds (raw image, preview) pairs inside the exam folders of a study
pub trait ExamPairFinder {
    fn find_pairs(
        &self,
        study_folder: &Path,
        patient: &PatientIdentity,
    ) -> Result<Vec<LostXray>, ScanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_not_found_lists_probes() {
        let err = RootNotFound {
            probed: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to locate the studies directory."));
        assert!(message.contains("/a, /b"));
    }

    #[test]
    fn test_io_errors_are_classified() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            ScanError::from_io(Path::new("/x"), denied),
            ScanError::PermissionDenied(_)
        ));

        let other = io::Error::other("bad sector");
        assert!(matches!(
            ScanError::from_io(Path::new("/x"), other),
            ScanError::Io { .. }
        ));
    }
}
