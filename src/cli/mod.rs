//! Command-line interface components
//!
//! This module contains CLI-specific code for the ICON run finder,
//! including argument parsing and the command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, GlobalArgs};
pub use commands::handle_check;
