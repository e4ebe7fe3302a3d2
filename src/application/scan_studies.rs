//! Scan studies use case
//!
//! Walks the study folders under the studies root and collects every recoverable
//! X-ray. A folder that fails is recorded and the walk moves on.

use crate::domain::entities::{LostXray, ScanOutcome};
use crate::domain::repositories::{ExamPairFinder, PatientMetadataReader, ScanError};
use crate::infrastructure::file_systems::list_subdirectories;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Scan studies use case
pub struct ScanStudiesUseCase<M: PatientMetadataReader, F: ExamPairFinder> {
    metadata_reader: M,
    pair_finder: F,
}

impl<M: PatientMetadataReader, F: ExamPairFinder> ScanStudiesUseCase<M, F> {
    /// Creates a new scan studies use case
    pub fn new(metadata_reader: M, pair_finder: F) -> Self {
        Self {
            metadata_reader,
            pair_finder,
        }
    }

    /// Executes the scan
    ///
    /// Only a failure to list `root` itself makes the outcome unsuccessful.
    pub fn execute(&self, root: &Path) -> ScanOutcome {
        let start_time = Instant::now();

        info!("Scanning studies directory {}", root.display());

        let study_folders = match list_subdirectories(root) {
            Ok(folders) => folders,
            Err(e) => {
                warn!("Cannot list {}: {}", root.display(), e);
                let mut outcome = ScanOutcome::failed(
                    Some(root.to_path_buf()),
                    format!(
                        "Error encountered while processing the studies directory at {}: {}",
                        root.display(),
                        e
                    ),
                );
                outcome.finish(start_time.elapsed());
                return outcome;
            }
        };

        let mut outcome = ScanOutcome::new(root.to_path_buf());

        for study_folder in &study_folders {
            outcome.record_scanned();

            match self.scan_study(study_folder) {
                Ok(Some(found)) => {
                    debug!("{} lost X-rays in {}", found.len(), study_folder.display());
                    outcome.extend_candidates(found);
                }
                Ok(None) => outcome.record_skipped(),
                Err(e) => {
                    warn!("Skipping {}: {}", study_folder.display(), e);
                    outcome.add_failure(study_folder, e.to_string());
                }
            }
        }

        outcome.finish(start_time.elapsed());

        info!(
            "Scan complete: {} lost X-rays in {} study folders ({} failed) in {:.2}s",
            outcome.candidates().len(),
            outcome.folders_scanned(),
            outcome.failures().len(),
            outcome.duration().as_secs_f64()
        );

        outcome
    }

    /// `None` when the study has no usable patient details
    fn scan_study(&self, study_folder: &Path) -> Result<Option<Vec<LostXray>>, ScanError> {
        let Some(patient) = self.metadata_reader.read_identity(study_folder)? else {
            return Ok(None);
        };

        self.pair_finder
            .find_pairs(study_folder, &patient)
            .map(Some)
    }
}
