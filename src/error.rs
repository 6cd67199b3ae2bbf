//! Errors raised while validating picker configuration.

use thiserror::Error;

/// Rejected configuration value. Grid and navigation code never fails;
/// everything that can go wrong is caught here, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid year: {0} (must be 1-9999)")]
    InvalidYear(String),
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Invalid week start: {0} (expected sunday, monday or saturday)")]
    InvalidWeekStart(String),
    #[error("Unknown key: {0}")]
    UnknownKey(String),
    #[error("Options --sunday, --monday and --saturday are mutually exclusive")]
    ConflictingWeekStart,
    #[error("Invalid argument combination: {0}")]
    InvalidArguments(String),
}
