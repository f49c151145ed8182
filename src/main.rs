//! ICON Run Finder CLI application
//!
//! Command-line tool that finds the most recent ICON-D2-EPS model run on the
//! DWD open-data server with a complete set of published output files.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use icon_run_finder::cli::{handle_check, Cli};
use icon_run_finder::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(&cli);

    info!("ICON Run Finder v{} starting", env!("CARGO_PKG_VERSION"));

    handle_check(cli).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("icon_run_finder={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
