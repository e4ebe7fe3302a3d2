//! Shared fixtures: a throwaway studies tree and recovery folder

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;
use xray_rescue::RecoveryConfig;

/// Raw image bytes used across tests
pub const RAW_BYTES: &[u8] = b"DICM\x00\x01 orphaned pixel data";

/// A temporary installation with a studies root and a recovery folder
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("studies")).unwrap();
        Self { dir }
    }

    pub fn studies(&self) -> PathBuf {
        self.dir.path().join("studies")
    }

    pub fn recovery_root(&self) -> PathBuf {
        self.dir.path().join("desktop").join("recovered X-rays")
    }

    /// Probes a missing 32-bit location first, then the real studies root
    pub fn config(&self) -> RecoveryConfig {
        RecoveryConfig::default()
            .with_studies_roots(vec![self.dir.path().join("x86").join("studies"), self.studies()])
            .with_recovery_root(self.recovery_root())
    }

    /// Creates a study folder with an `InputData.xml`
    pub fn study(&self, name: &str, first: &str, last: &str) -> PathBuf {
        let folder = self.studies().join(name);
        fs::create_dir_all(&folder).unwrap();
        fs::write(
            folder.join("InputData.xml"),
            format!(
                "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<InputData>\n  \
                 <Patient_FirstName>{first}</Patient_FirstName>\n  \
                 <Patient_LastName>{last}</Patient_LastName>\n</InputData>\n"
            ),
        )
        .unwrap();
        folder
    }

    /// Creates a study folder without a sidecar
    pub fn bare_study(&self, name: &str) -> PathBuf {
        let folder = self.studies().join(name);
        fs::create_dir_all(&folder).unwrap();
        folder
    }
}

/// Writes a file, creating parents
pub fn write_file(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Writes a raw image and pins its modification time
pub fn write_raw(path: &Path, taken: DateTime<Local>) {
    write_file(path, RAW_BYTES);
    set_file_mtime(path, FileTime::from_system_time(SystemTime::from(taken))).unwrap();
}

/// 2024-01-02 03:04:05 local time
pub fn jan_second() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}
