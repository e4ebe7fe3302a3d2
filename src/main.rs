use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xray_rescue::RecoveryService;
use xray_rescue::presentation::cli::{self, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = args.to_config().context("Failed to load configuration")?;
    let mut service = RecoveryService::new(&config);

    if args.list {
        cli::run_list(&service, args.json)
    } else if args.all {
        cli::run_recover_all(&mut service)
    } else {
        cli::run_interactive(&mut service, args.yes)
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
