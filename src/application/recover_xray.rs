//! Recover X-ray use case
//!
//! Copies selected lost X-rays into the recovery folder through a
//! [`RecoveryWriter`].

use crate::application::dto::RecoveryReport;
use crate::domain::entities::LostXray;
use crate::domain::repositories::{RecoveredImage, RecoveryError, RecoveryWriter};
use std::time::Instant;
use tracing::{info, warn};

/// Progress callback for batch recovery
pub type RecoveryProgressCallback = Box<dyn Fn(usize, usize)>;

/// Recover X-ray use case
pub struct RecoverXrayUseCase<W: RecoveryWriter> {
    writer: W,
}

impl<W: RecoveryWriter> RecoverXrayUseCase<W> {
    /// Creates a new recover use case
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Recovers one X-ray
    pub fn execute(&self, xray: &LostXray) -> Result<RecoveredImage, RecoveryError> {
        self.writer.recover(xray).inspect_err(|e| {
            warn!("Failed to recover X-ray for {}: {}", xray, e);
        })
    }

    /// Recovers every X-ray in `xrays`, carrying on past failures
    pub fn execute_all(
        &self,
        xrays: &[LostXray],
        progress_callback: Option<RecoveryProgressCallback>,
    ) -> RecoveryReport {
        let start_time = Instant::now();
        let total = xrays.len();

        info!("Starting recovery of {} X-rays", total);

        let mut report = RecoveryReport::new(self.writer.recovery_root().to_path_buf());

        for (index, xray) in xrays.iter().enumerate() {
            if let Some(ref callback) = progress_callback {
                callback(index + 1, total);
            }

            match self.execute(xray) {
                Ok(image) => report.add_recovered(image),
                Err(e) => report.add_error(format!("{}: {}", xray, e)),
            }
        }

        report.duration = start_time.elapsed();

        info!(
            "Recovery complete: {} of {} X-rays recovered in {:.2}s",
            report.files_recovered(),
            total,
            report.duration.as_secs_f64()
        );

        report
    }
}
