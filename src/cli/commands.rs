//! Command handler for the ICON run finder CLI
//!
//! Coordinates between the parsed arguments and the availability resolver,
//! and formats the result for standard output.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::app::{
    find_most_recent_qualifying_run, DirectoryClient, RunOutcome, ScanResult, VariableSelection,
};
use crate::cli::Cli;
use crate::errors::Result;

/// Marker printed when no candidate run is fully available
const NO_RUN_MARKER: &str = "none";

/// Handle the availability check
///
/// Validates the selection, scans the candidate window, and prints the
/// selected run identifier (or the `none` marker) to stdout. In verbose
/// mode the per-run availability table is printed first.
pub async fn handle_check(cli: Cli) -> Result<()> {
    let selection = VariableSelection::new(cli.vars_2d, cli.vars_3d, cli.levels_3d)?;
    info!(
        "checking {} 2d and {} 3d variables at {} levels",
        selection.vars_2d.len(),
        selection.vars_3d.len(),
        selection.levels_3d.len()
    );

    let client = DirectoryClient::new()?;

    let spinner = scan_spinner(cli.global.quiet);
    let scan = find_most_recent_qualifying_run(&client, cli.run, &selection).await?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    info!(
        "{} candidate runs resolved, {} skipped",
        scan.reports().count(),
        scan.skipped_count()
    );

    if cli.global.verbose || cli.global.very_verbose {
        print_report_table(&scan);
    }

    match &scan.selected_run {
        Some(run_id) => println!("{}", run_id),
        None => {
            warn!("no candidate run is fully available");
            println!("{}", NO_RUN_MARKER);
        }
    }

    Ok(())
}

/// Spinner shown while the candidate window is scanned
fn scan_spinner(quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["◐", "◓", "◑", "◒"]),
    );
    spinner.set_message("Scanning candidate runs...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));

    Some(spinner)
}

/// Print one row per (run, variable) availability record, then the skipped
/// candidates with their reasons
fn print_report_table(scan: &ScanResult) {
    println!(
        "{:<12} {:<22} {:<20} {:>6} {:>8}",
        "run", "variable", "status", "avail", "missing"
    );
    for report in scan.reports() {
        for record in &report.records {
            println!(
                "{:<12} {:<22} {:<20} {:>6} {:>8}",
                record.run_id,
                record.variable,
                record.status.to_string(),
                record.avail_count,
                record.missing_count
            );
        }
    }

    for outcome in &scan.outcomes {
        if let RunOutcome::Skipped { run, reason } = outcome {
            println!("{:<12} (skipped: {})", run.id(), reason);
        }
    }
}
