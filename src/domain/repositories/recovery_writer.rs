//! Recovery writer trait
//!
//! Defines the interface for copying a lost X-ray into the recovery folder.

use crate::domain::entities::LostXray;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when recovering an X-ray
#[derive(Error, Debug)]
pub enum RecoveryError {
    #[error("Source image no longer exists: {0}")]
    SourceVanished(PathBuf),

    #[error("Permission denied copying to {0}")]
    CopyDenied(PathBuf),

    #[error("Cannot create destination directory {path}: {source}")]
    DestinationUncreatable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// A successfully recovered image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveredImage {
    /// The raw image that was copied
    pub source_path: PathBuf,
    /// Where the copy was written
    pub saved_path: PathBuf,
    /// Bytes copied
    pub saved_size: u64,
    /// Hex SHA-256 of the written file, `None` when the copy could not be read back
    pub sha256: Option<String>,
}

/// Trait for writing recovered X-rays to storage
///
/// # Example
///
/// ```ignore
/// let writer = LocalRecoveryWriter::new(Path::new("/home/me/Desktop/recovered X-rays"))?;
/// let recovered = writer.recover(&lost_xray)?;
/// println!("Saved to: {}", recovered.saved_path.display());
/// ```
pub trait RecoveryWriter {
    /// Creates a writer rooted at `recovery_root`, creating the folder if needed
    fn new(recovery_root: &Path) -> Result<Self, RecoveryError>
    where
        Self: Sized;

    /// Path the X-ray would be written to
    fn destination_for(&self, xray: &LostXray) -> PathBuf;

    /// Copies the raw image to its destination, replacing any previous copy
    fn recover(&self, xray: &LostXray) -> Result<RecoveredImage, RecoveryError>;

    /// Returns the recovery root
    fn recovery_root(&self) -> &Path;

    /// Returns the number of images recovered so far
    fn files_recovered(&self) -> usize;
}
