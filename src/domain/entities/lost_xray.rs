//! Lost X-ray entity
//!
//! An orphaned raw image paired with its preview and the patient it belongs to.

use super::patient::PatientIdentity;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Timestamp layout used when listing candidates
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recoverable X-ray found during a scan
///
/// Only the exam pair finder creates these, after both files were located. The
/// fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LostXray {
    patient: PatientIdentity,
    /// Last-modified time of the raw image at scan time
    date_taken: DateTime<Local>,
    preview_image_path: PathBuf,
    raw_image_path: PathBuf,
}

impl LostXray {
    /// Creates a new lost X-ray
    pub fn new(
        patient: PatientIdentity,
        date_taken: DateTime<Local>,
        preview_image_path: PathBuf,
        raw_image_path: PathBuf,
    ) -> Self {
        Self {
            patient,
            date_taken,
            preview_image_path,
            raw_image_path,
        }
    }

    pub fn patient_first_name(&self) -> &str {
        self.patient.first_name()
    }

    pub fn patient_last_name(&self) -> &str {
        self.patient.last_name()
    }

    /// `"{first} {last}"`, unsanitized
    pub fn full_name(&self) -> String {
        self.patient.full_name()
    }

    pub fn date_taken(&self) -> DateTime<Local> {
        self.date_taken
    }

    /// Path of the JPEG preview
    pub fn preview_image_path(&self) -> &Path {
        &self.preview_image_path
    }

    /// Path of the orphaned `U*.dcm`
    pub fn raw_image_path(&self) -> &Path {
        &self.raw_image_path
    }

    /// Whether the preview is still on disk
    pub fn preview_exists(&self) -> bool {
        self.preview_image_path.is_file()
    }
}

impl fmt::Display for LostXray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.patient,
            self.date_taken.format(DISPLAY_TIME_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> LostXray {
        let taken = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        LostXray::new(
            PatientIdentity::new("Jane", "Doe").unwrap(),
            taken,
            PathBuf::from("/studies/1/exam/preview.jpg"),
            PathBuf::from("/studies/1/exam/U001.dcm"),
        )
    }

    #[test]
    fn test_display_includes_seconds() {
        assert_eq!(sample().to_string(), "Jane Doe - 2024-01-02 03:04:05");
    }

    #[test]
    fn test_accessors() {
        let xray = sample();
        assert_eq!(xray.patient_first_name(), "Jane");
        assert_eq!(xray.patient_last_name(), "Doe");
        assert_eq!(xray.raw_image_path(), Path::new("/studies/1/exam/U001.dcm"));
        assert!(!xray.preview_exists());
    }
}
