//! Error types for the ICON run finder
//!
//! Input-validation errors are fatal and abort the whole resolution pass.
//! Listing errors are caught at the per-run granularity during a scan, so a
//! run that cannot be evaluated is skipped rather than surfaced.

use thiserror::Error;

use crate::app::models::VarKind;

/// Input validation errors for a variable/level selection
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Neither a 2d nor a 3d variable was requested
    #[error("you need to specify at least one 2d or one 3d variable")]
    NoVariablesSpecified,

    /// 3d variables were requested without pressure levels
    #[error("when specifying 3d variables you also need pressure levels")]
    MissingLevels,

    /// Variable name outside the fixed vocabulary for its dimension
    #[error("unknown {kind} variable '{name}'; accepted {kind} variables are: {}", .accepted.join(", "))]
    UnknownVariable {
        kind: VarKind,
        name: String,
        accepted: &'static [&'static str],
    },

    /// Run cycle outside the fixed eight-cycle enumeration
    #[error("unknown run cycle '{name}'; accepted cycles are: 00, 03, 06, 09, 12, 15, 18, 21")]
    UnknownCycle { name: String },
}

/// Directory listing errors
#[derive(Error, Debug)]
pub enum ListingError {
    /// HTTP transport failure
    #[error("directory listing request failed")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Directory URL could not be parsed
    #[error("invalid directory URL: {url}")]
    InvalidUrl { url: String },

    /// CSS selector failed to parse
    #[error("invalid CSS selector: {selector}")]
    InvalidSelector { selector: String },
}

/// Errors raised while resolving one run's availability
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Selection failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A variable's directory listing could not be fetched
    #[error(transparent)]
    Listing(#[from] ListingError),
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Listing error
    #[error(transparent)]
    Listing(#[from] ListingError),
}

impl From<ResolveError> for AppError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::Validation(e) => Self::Validation(e),
            ResolveError::Listing(e) => Self::Listing(e),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Listing result type alias
pub type ListingResult<T> = std::result::Result<T, ListingError>;

/// Resolve result type alias
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
