//! Scan outcome entity
//!
//! Represents the results of one pass over the studies tree.

use super::lost_xray::LostXray;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A study folder that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFailure {
    /// Study folder being processed
    pub folder: PathBuf,
    /// Rendered cause
    pub cause: String,
}

impl fmt::Display for FolderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error encountered while processing the patient directory at {}: {}",
            self.folder.display(),
            self.cause
        )
    }
}

/// Result of a scan
///
/// A scan succeeds once every reachable study folder has been visited, even when
/// some of them failed or nothing was found. It fails only when the studies root
/// cannot be located or listed.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Studies root that was scanned, if one was found
    root: Option<PathBuf>,
    succeeded: bool,
    /// Candidates in enumeration order
    candidates: Vec<LostXray>,
    /// Per-folder failures, oldest first
    failures: Vec<FolderFailure>,
    /// Message of the fatal error, if any
    fatal: Option<String>,
    /// Number of study folders visited
    folders_scanned: usize,
    /// Number of study folders skipped for missing or blank metadata
    folders_skipped: usize,
    duration: Duration,
}

impl ScanOutcome {
    /// Starts an outcome for the given root
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Some(root),
            succeeded: false,
            candidates: Vec::new(),
            failures: Vec::new(),
            fatal: None,
            folders_scanned: 0,
            folders_skipped: 0,
            duration: Duration::ZERO,
        }
    }

    /// A scan that could not run at all
    pub fn failed(root: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            root,
            succeeded: false,
            candidates: Vec::new(),
            failures: Vec::new(),
            fatal: Some(message.into()),
            folders_scanned: 0,
            folders_skipped: 0,
            duration: Duration::ZERO,
        }
    }

    /// Appends candidates found in one study folder
    pub fn extend_candidates(&mut self, candidates: impl IntoIterator<Item = LostXray>) {
        self.candidates.extend(candidates);
    }

    /// Records a study folder that failed
    pub fn add_failure(&mut self, folder: &Path, cause: impl Into<String>) {
        self.failures.push(FolderFailure {
            folder: folder.to_path_buf(),
            cause: cause.into(),
        });
    }

    pub(crate) fn record_scanned(&mut self) {
        self.folders_scanned += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.folders_skipped += 1;
    }

    /// Marks the scan as complete
    pub fn finish(&mut self, duration: Duration) {
        self.succeeded = self.fatal.is_none();
        self.duration = duration;
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn candidates(&self) -> &[LostXray] {
        &self.candidates
    }

    /// Consumes self and returns the candidates
    pub fn into_candidates(self) -> Vec<LostXray> {
        self.candidates
    }

    pub fn failures(&self) -> &[FolderFailure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn folders_scanned(&self) -> usize {
        self.folders_scanned
    }

    pub fn folders_skipped(&self) -> usize {
        self.folders_skipped
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Single-message view: the fatal error, otherwise the latest folder failure
    pub fn error_message(&self) -> Option<String> {
        self.fatal
            .clone()
            .or_else(|| self.failures.last().map(ToString::to_string))
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        if let Some(fatal) = &self.fatal {
            return fatal.clone();
        }

        let mut summary = format!(
            "Scanned {} study folders in {:.2}s\n",
            self.folders_scanned,
            self.duration.as_secs_f64()
        );
        summary.push_str(&format!("Found {} lost X-rays\n", self.candidates.len()));

        if self.folders_skipped > 0 {
            summary.push_str(&format!(
                "Skipped {} folders without patient details\n",
                self.folders_skipped
            ));
        }

        if !self.failures.is_empty() {
            summary.push_str(&format!("Encountered {} errors\n", self.failures.len()));
        }

        summary
    }
}
