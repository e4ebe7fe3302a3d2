//! CLI commands using clap

use crate::config::{ConfigError, RecoveryConfig};
use clap::Parser;
use std::path::PathBuf;

/// X-ray Rescue - Lost X-ray Recovery Tool
///
/// Finds X-rays the CS7600 software left behind after a crash and copies them to
/// a "recovered X-rays" folder on the desktop.
#[derive(Parser, Debug)]
#[command(name = "xray-rescue")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recover X-rays left behind by an unfinished CS7600 acquisition", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Studies directory to scan; repeat to probe several in order
    #[arg(long = "studies-root", value_name = "DIR")]
    pub studies_roots: Vec<PathBuf>,

    /// Folder receiving recovered X-rays
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accept the terms of use without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// List lost X-rays and exit
    #[arg(long, conflicts_with = "all")]
    pub list: bool,

    /// Print the list as JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Recover every lost X-ray without asking
    #[arg(long)]
    pub all: bool,
}

impl Cli {
    /// Builds the configuration: defaults, then the config file, then flags
    pub fn to_config(&self) -> Result<RecoveryConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RecoveryConfig::load(path)?,
            None => RecoveryConfig::default(),
        };

        if !self.studies_roots.is_empty() {
            config = config.with_studies_roots(self.studies_roots.clone());
        }

        if let Some(output) = &self.output {
            config = config.with_recovery_root(output.clone());
        }

        config.validate()?;
        Ok(config)
    }
}
