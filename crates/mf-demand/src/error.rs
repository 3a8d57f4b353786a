//! Demand error type.

use thiserror::Error;

use mf_core::CoreError;

/// Errors produced by `mf-demand`.
///
/// Degenerate inputs (zero total attraction) are not errors; see
/// the `degenerate` flag on [`DemandMatrix`](crate::DemandMatrix).
#[derive(Debug, Error)]
pub enum DemandError {
    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type DemandResult<T> = Result<T, DemandError>;
