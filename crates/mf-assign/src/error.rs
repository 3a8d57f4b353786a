use mf_core::CoreError;
use thiserror::Error;

/// Only configuration can fail; unroutable demand is reported in
/// [`StepReport`](crate::StepReport) instead.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error("assignment configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type AssignResult<T> = Result<T, AssignError>;
