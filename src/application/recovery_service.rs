//! Recovery service
//!
//! The two operations the front end needs: find the lost X-rays, and recover one
//! of them. Built from a [`RecoveryConfig`] so every location can be injected.

use crate::application::dto::RecoveryReport;
use crate::application::{RecoverXrayUseCase, ScanStudiesUseCase};
use crate::config::RecoveryConfig;
use crate::domain::entities::{LostXray, ScanOutcome};
use crate::domain::repositories::{
    RecoveredImage, RecoveryError, RecoveryWriter, StudiesRootResolver,
};
use crate::infrastructure::file_systems::{CandidatePathResolver, LocalExamPairFinder};
use crate::infrastructure::metadata::InputDataXmlReader;
use crate::infrastructure::persistence::LocalRecoveryWriter;
use std::path::PathBuf;
use tracing::warn;

/// Scans the studies tree and recovers lost X-rays
pub struct RecoveryService {
    resolver: CandidatePathResolver,
    scanner: ScanStudiesUseCase<InputDataXmlReader, LocalExamPairFinder>,
    recovery_root: PathBuf,
    /// Created on the first recovery
    recoverer: Option<RecoverXrayUseCase<LocalRecoveryWriter>>,
}

impl RecoveryService {
    /// Creates a service for the given configuration
    pub fn new(config: &RecoveryConfig) -> Self {
        Self {
            resolver: CandidatePathResolver::from_config(config),
            scanner: ScanStudiesUseCase::new(
                InputDataXmlReader::from_config(config),
                LocalExamPairFinder::from_config(config),
            ),
            recovery_root: config.recovery_root.clone(),
            recoverer: None,
        }
    }

    /// Finds every lost X-ray under the first studies root that exists
    pub fn scan(&self) -> ScanOutcome {
        match self.resolver.resolve_root() {
            Ok(root) => self.scanner.execute(&root),
            Err(e) => {
                warn!("{}", e);
                ScanOutcome::failed(None, e.to_string())
            }
        }
    }

    /// Copies one lost X-ray into the recovery folder
    pub fn recover(&mut self, xray: &LostXray) -> Result<RecoveredImage, RecoveryError> {
        self.recoverer()?.execute(xray)
    }

    /// Copies every given X-ray, carrying on past failures
    pub fn recover_all(&mut self, xrays: &[LostXray]) -> Result<RecoveryReport, RecoveryError> {
        Ok(self.recoverer()?.execute_all(xrays, None))
    }

    fn recoverer(&mut self) -> Result<&RecoverXrayUseCase<LocalRecoveryWriter>, RecoveryError> {
        let recoverer = match self.recoverer.take() {
            Some(recoverer) => recoverer,
            None => RecoverXrayUseCase::new(LocalRecoveryWriter::new(&self.recovery_root)?),
        };
        Ok(&*self.recoverer.insert(recoverer))
    }
}
