//! Mesh-code error type.
//!
//! Neither variant is fatal to a model run: the network builder treats both
//! as "no neighbor" for the affected zone.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("unparsable mesh code {code:?}: {reason}")]
    Unparsable { code: String, reason: &'static str },

    #[error("mesh code {0:?} has no quadrant digit; adjacency needs 9-digit codes")]
    Unsupported(String),
}

pub type MeshResult<T> = Result<T, MeshError>;
