//! Core availability-resolution logic
//!
//! This module contains the main application components: the directory
//! listing client, the run/report data models, and the availability
//! resolver that scans candidate runs.
//!
//! # Examples
//!
//! ```rust,no_run
//! use icon_run_finder::app::{
//!     find_most_recent_qualifying_run, DirectoryClient, VariableSelection,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let selection = VariableSelection::new(
//!     vec!["t_2m".to_string()],
//!     vec!["t".to_string()],
//!     vec!["850".to_string()],
//! )?;
//!
//! let client = DirectoryClient::new()?;
//! let scan = find_most_recent_qualifying_run(&client, None, &selection).await?;
//!
//! match scan.selected_run {
//!     Some(run_id) => println!("most recent complete run: {}", run_id),
//!     None => println!("no candidate run is fully available"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod listing;
pub mod models;
pub mod resolver;

// Re-export main public API
pub use listing::{DirectoryClient, ListingSource};
pub use models::{
    AvailabilityRecord, AvailabilityStatus, Cycle, Run, RunOutcome, RunReport, VarKind,
};
pub use resolver::{
    find_most_recent_qualifying_run, resolve_run, scan_for_latest, ScanResult, VariableSelection,
};
