//! Local recovery writer implementation
//!
//! Copies lost X-rays into `<root>/<First> <Last>/<First> <Last> <timestamp>.dcm`.

use crate::domain::entities::LostXray;
use crate::domain::repositories::{RecoveredImage, RecoveryError, RecoveryWriter};
use crate::domain::services::sanitize_file_name;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// Timestamp layout embedded in recovered file names (no colons)
pub const DESTINATION_TIME_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

const RECOVERED_EXTENSION: &str = "dcm";

/// Local file system writer
///
/// Recoveries of the same patient taken at the same second share a destination;
/// the latest copy wins. A patient folder created before a failed copy is left in
/// place.
pub struct LocalRecoveryWriter {
    recovery_root: PathBuf,
    files_recovered: AtomicUsize,
}

impl LocalRecoveryWriter {
    /// `"{first} {last}"` with both halves sanitized
    fn patient_folder_name(xray: &LostXray) -> String {
        format!(
            "{} {}",
            sanitize_file_name(xray.patient_first_name()),
            sanitize_file_name(xray.patient_last_name())
        )
    }

    fn ensure_dir(path: &Path) -> Result<(), RecoveryError> {
        if path.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(path).map_err(|source| RecoveryError::DestinationUncreatable {
            path: path.to_path_buf(),
            source,
        })
    }

    fn sha256_of(path: &Path) -> io::Result<String> {
        let mut file = File::open(path)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher)?;
        Ok(hex::encode(hasher.finalize()))
    }

    /// The copy is already in place, so a failed read-back only loses the checksum
    fn checksum(path: &Path) -> Option<String> {
        Self::sha256_of(path)
            .inspect_err(|e| warn!("Cannot checksum {}: {}", path.display(), e))
            .ok()
    }
}

impl RecoveryWriter for LocalRecoveryWriter {
    fn new(recovery_root: &Path) -> Result<Self, RecoveryError> {
        Self::ensure_dir(recovery_root)?;

        Ok(Self {
            recovery_root: recovery_root.to_path_buf(),
            files_recovered: AtomicUsize::new(0),
        })
    }

    fn destination_for(&self, xray: &LostXray) -> PathBuf {
        let folder = Self::patient_folder_name(xray);
        let file_name = format!(
            "{} {}.{}",
            folder,
            xray.date_taken().format(DESTINATION_TIME_FORMAT),
            RECOVERED_EXTENSION
        );

        self.recovery_root.join(folder).join(file_name)
    }

    fn recover(&self, xray: &LostXray) -> Result<RecoveredImage, RecoveryError> {
        let source = xray.raw_image_path();
        if !source.is_file() {
            warn!("Raw image for {} is gone: {}", xray, source.display());
            return Err(RecoveryError::SourceVanished(source.to_path_buf()));
        }

        let destination = self.destination_for(xray);
        if let Some(parent) = destination.parent() {
            Self::ensure_dir(parent)?;
        }

        let saved_size = fs::copy(source, &destination).map_err(|e| {
            warn!("Error recovering X-ray for {}: {}", xray.full_name(), e);
            match e.kind() {
                io::ErrorKind::NotFound if !source.exists() => {
                    RecoveryError::SourceVanished(source.to_path_buf())
                }
                io::ErrorKind::PermissionDenied => RecoveryError::CopyDenied(destination.clone()),
                _ => RecoveryError::IoError(e),
            }
        })?;

        let sha256 = Self::checksum(&destination);

        self.files_recovered.fetch_add(1, Ordering::Relaxed);
        info!(
            "Recovered {} to {} ({} bytes)",
            xray,
            destination.display(),
            saved_size
        );

        Ok(RecoveredImage {
            source_path: source.to_path_buf(),
            saved_path: destination,
            saved_size,
            sha256,
        })
    }

    fn recovery_root(&self) -> &Path {
        &self.recovery_root
    }

    fn files_recovered(&self) -> usize {
        self.files_recovered.load(Ordering::Relaxed)
    }
}
