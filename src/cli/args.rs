//! Command-line argument parsing for the ICON run finder
//!
//! This module defines the CLI structure using clap derive macros. The tool
//! has a single purpose, so the interface is a flat set of flags mirroring
//! the selection the availability resolver takes.

use clap::{Args, Parser};

use crate::app::Cycle;

/// ICON Run Finder - find the most recent fully-published model run
#[derive(Parser, Debug)]
#[command(
    name = "icon_run_finder",
    version,
    about = "Find the most recent ICON-D2-EPS run with a complete set of published files",
    long_about = "Checks the DWD open-data server for the most recent ICON-D2-EPS model run whose
output files are fully published for a requested set of variables, pressure
levels, and forecast lead times. Prints the selected run identifier, or
'none' when no candidate run is fully available."
)]
pub struct Cli {
    /// Restrict the scan to a single initialization cycle (e.g. "06");
    /// all eight cycles are checked by default
    #[arg(short, long, value_name = "CYCLE")]
    pub run: Option<Cycle>,

    /// 2d variables to check (e.g. "t_2m pmsl")
    #[arg(long = "vars_2d", value_name = "NAME", num_args = 1..)]
    pub vars_2d: Vec<String>,

    /// 3d variables to check
    #[arg(long = "vars_3d", value_name = "NAME", num_args = 1.., default_value = "t")]
    pub vars_3d: Vec<String>,

    /// Pressure levels for the 3d variables, in hPa
    #[arg(short, long = "levels_3d", value_name = "LEVEL", num_args = 1.., default_value = "850")]
    pub levels_3d: Vec<String>,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global output and logging options
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging and print the per-run availability table
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}
