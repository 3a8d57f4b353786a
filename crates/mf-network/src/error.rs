//! Network error type.

use thiserror::Error;

use mf_core::CoreError;

/// Errors produced by `mf-network`.
///
/// Only construction can fail; adjacency problems on individual zones are
/// absorbed as missing connectors.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("invalid link class: {0}")]
    InvalidLinkClass(#[from] CoreError),

    #[error("zone count {0} exceeds the node id range")]
    TooManyZones(usize),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
