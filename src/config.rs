//! Runtime configuration
//!
//! Every location and file-name convention the scanner and the writer depend on lives
//! here, so tests and unusual installations can inject their own values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crate::domain::services::FilePattern;

/// Studies directory of a 32-bit installation
pub const STUDIES_PATH_32: &str = r"C:\Program Files (x86)\CSH\CS7600\images\studies";
/// Studies directory of a 64-bit installation
pub const STUDIES_PATH_64: &str = r"C:\Program Files\CSH\CS7600\images\studies";

/// Name of the recovery folder created on the desktop
pub const RECOVERY_FOLDER_NAME: &str = "recovered X-rays";

/// Name of the patient sidecar inside every study folder
pub const METADATA_FILE_NAME: &str = "InputData.xml";

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for scanning and recovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Candidate studies directories, probed in order
    pub studies_roots: Vec<PathBuf>,
    /// Folder receiving recovered images
    pub recovery_root: PathBuf,
    /// Sidecar file carrying the patient identity
    pub metadata_file_name: String,
    /// Pattern of the orphaned raw image
    pub raw_pattern: FilePattern,
    /// Pattern of the preview thumbnail
    pub preview_pattern: FilePattern,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            studies_roots: vec![PathBuf::from(STUDIES_PATH_32), PathBuf::from(STUDIES_PATH_64)],
            recovery_root: default_recovery_root(),
            metadata_file_name: METADATA_FILE_NAME.to_string(),
            raw_pattern: FilePattern::new("U", "dcm"),
            preview_pattern: FilePattern::new("", "jpg"),
        }
    }
}

impl RecoveryConfig {
    /// Loads a configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replaces the probe list
    pub fn with_studies_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.studies_roots = roots;
        self
    }

    /// Sets the recovery folder
    pub fn with_recovery_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.recovery_root = root.into();
        self
    }

    /// Checks the values the scanner cannot work without
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.studies_roots.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one studies root must be configured".to_string(),
            ));
        }

        if self.recovery_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("recovery root cannot be empty".to_string()));
        }

        if self.metadata_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "metadata file name cannot be empty".to_string(),
            ));
        }

        if self.raw_pattern.extension().is_empty() || self.preview_pattern.extension().is_empty()
        {
            return Err(ConfigError::Invalid(
                "file patterns need an extension".to_string(),
            ));
        }

        Ok(())
    }
}

/// `<desktop>/recovered X-rays`, falling back to `~/Desktop` and then the working directory
pub fn default_recovery_root() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(RECOVERY_FOLDER_NAME)
}
