//! Exam pair finder
//!
//! Each subdirectory of a study folder holds one exam. An exam is recoverable when
//! it contains both an orphaned raw image and a preview.

use super::list_subdirectories;
use crate::config::RecoveryConfig;
use crate::domain::entities::{LostXray, PatientIdentity};
use crate::domain::repositories::{ExamPairFinder, ScanError};
use crate::domain::services::FilePattern;
use chrono::{DateTime, Local};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pairs `U*.dcm` raw images with `*.jpg` previews on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalExamPairFinder {
    raw_pattern: FilePattern,
    preview_pattern: FilePattern,
}

impl LocalExamPairFinder {
    pub fn new(raw_pattern: FilePattern, preview_pattern: FilePattern) -> Self {
        Self {
            raw_pattern,
            preview_pattern,
        }
    }

    pub fn from_config(config: &RecoveryConfig) -> Self {
        Self::new(config.raw_pattern.clone(), config.preview_pattern.clone())
    }

    /// Looks for a complete pair inside one exam folder
    fn pair_in_exam(
        &self,
        exam_folder: &Path,
        patient: &PatientIdentity,
    ) -> Result<Option<LostXray>, ScanError> {
        let file_names = list_file_names(exam_folder)?;

        let Some(raw_name) = self.raw_pattern.select_first(file_names.iter().cloned()) else {
            return Ok(None);
        };
        let Some(preview_name) = self.preview_pattern.select_first(file_names) else {
            return Ok(None);
        };

        let raw_path = exam_folder.join(raw_name);
        let preview_path = exam_folder.join(preview_name);

        let date_taken = modified_time(&raw_path)?;

        Ok(Some(LostXray::new(
            patient.clone(),
            date_taken,
            absolute(preview_path),
            absolute(raw_path),
        )))
    }
}

impl Default for LocalExamPairFinder {
    fn default() -> Self {
        Self::from_config(&RecoveryConfig::default())
    }
}

impl ExamPairFinder for LocalExamPairFinder {
    fn find_pairs(
        &self,
        study_folder: &Path,
        patient: &PatientIdentity,
    ) -> Result<Vec<LostXray>, ScanError> {
        let mut found = Vec::new();

        for exam_folder in list_subdirectories(study_folder)? {
            match self.pair_in_exam(&exam_folder, patient)? {
                Some(xray) => found.push(xray),
                None => debug!("No complete pair in {}", exam_folder.display()),
            }
        }

        Ok(found)
    }
}

/// Names of the regular files directly inside `dir`
fn list_file_names(dir: &Path) -> Result<Vec<OsString>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::from_io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::from_io(dir, e))?;
        if entry.path().is_file() {
            names.push(entry.file_name());
        }
    }
    Ok(names)
}

fn modified_time(path: &Path) -> Result<DateTime<Local>, ScanError> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| ScanError::from_io(path, e))?;
    Ok(DateTime::<Local>::from(modified))
}

fn absolute(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}
