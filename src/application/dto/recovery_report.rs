//! Recovery report DTO

use crate::domain::repositories::RecoveredImage;
use std::path::PathBuf;
use std::time::Duration;

/// Result of recovering several X-rays in one go
#[derive(Debug, Clone)]
pub struct RecoveryReport {
    /// Recovery folder
    pub recovery_root: PathBuf,
    /// Images written
    pub recovered: Vec<RecoveredImage>,
    /// Total bytes copied
    pub bytes_recovered: u64,
    /// Duration of the operation
    pub duration: Duration,
    /// One message per failed X-ray
    pub errors: Vec<String>,
}

impl RecoveryReport {
    /// Creates a new recovery report
    pub fn new(recovery_root: PathBuf) -> Self {
        Self {
            recovery_root,
            recovered: Vec::new(),
            bytes_recovered: 0,
            duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Adds a recovered image to the report
    pub fn add_recovered(&mut self, image: RecoveredImage) {
        self.bytes_recovered += image.saved_size;
        self.recovered.push(image);
    }

    /// Adds an error
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn files_recovered(&self) -> usize {
        self.recovered.len()
    }

    pub fn failed_files(&self) -> usize {
        self.errors.len()
    }

    /// Returns success rate (0.0 - 1.0)
    pub fn success_rate(&self) -> f64 {
        let total = self.files_recovered() + self.failed_files();
        if total == 0 {
            return 1.0;
        }
        self.files_recovered() as f64 / total as f64
    }

    /// Returns a summary string
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Recovery complete: {} X-rays recovered ({} bytes) in {:.2}s\n",
            self.files_recovered(),
            self.bytes_recovered,
            self.duration.as_secs_f64()
        );
        summary.push_str(&format!("Output folder: {}\n", self.recovery_root.display()));

        if !self.errors.is_empty() {
            summary.push_str(&format!("\n{} errors occurred\n", self.errors.len()));
        }

        summary
    }
}
