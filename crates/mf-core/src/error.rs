//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration failures surface unchanged.

use thiserror::Error;

/// Errors raised while validating configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field:  &'static str,
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig { field, reason: reason.into() }
    }
}

/// Shorthand result type for configuration checks.
pub type CoreResult<T> = Result<T, CoreError>;
