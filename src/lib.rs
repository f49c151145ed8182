//! ICON Run Finder Library
//!
//! A Rust library for determining which ICON-D2-EPS forecast run on the DWD
//! open-data server has a complete set of published output files for a
//! requested set of variables, pressure levels, and forecast lead times.

pub mod app;
pub mod cli;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
