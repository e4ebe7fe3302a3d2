//! Studies tree access on the local filesystem

mod exam_pair_finder;
mod path_resolver;

pub use exam_pair_finder::LocalExamPairFinder;
pub use path_resolver::CandidatePathResolver;

use crate::domain::repositories::ScanError;
use std::fs;
use std::path::{Path, PathBuf};

/// Immediate subdirectories of `dir`, sorted by path
///
/// Symbolic links to directories are included. Entries whose type cannot be
/// determined are skipped.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::from_io(dir, e))?;

    let mut subdirectories = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::from_io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            subdirectories.push(path);
        }
    }

    subdirectories.sort();
    Ok(subdirectories)
}
