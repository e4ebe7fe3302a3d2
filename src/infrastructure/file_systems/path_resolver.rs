//! Studies root resolution
//!
//! The acquisition software installs either under `Program Files (x86)` or
//! `Program Files`; the first location that exists wins.

use crate::config::RecoveryConfig;
use crate::domain::repositories::{RootNotFound, StudiesRootResolver};
use std::path::PathBuf;

/// Probes an ordered list of candidate directories
#[derive(Debug, Clone)]
pub struct CandidatePathResolver {
    candidates: Vec<PathBuf>,
}

impl CandidatePathResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn from_config(config: &RecoveryConfig) -> Self {
        Self::new(config.studies_roots.clone())
    }
}

impl StudiesRootResolver for CandidatePathResolver {
    fn resolve_root(&self) -> Result<PathBuf, RootNotFound> {
        self.candidates
            .iter()
            .find(|candidate| candidate.is_dir())
            .cloned()
            .ok_or_else(|| RootNotFound {
                probed: self.candidates.clone(),
            })
    }
}
