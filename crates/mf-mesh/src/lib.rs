//! `mf-mesh` — grid-cell identifiers and cardinal adjacency.
//!
//! A grid-cell identifier is a hierarchical mesh code of 8 or 9 digits:
//!
//! ```text
//!  5 1 3 2   0 4   6 1   1
//!  └┬┘ └┬┘   │ │   │ │   └─ quadrant 1..=4 (SW, SE, NW, NE)
//!   y   x    y x   y x
//!  region    10 km 1 km
//! ```
//!
//! Adjacency is computed purely from this numeric structure; no geodetic
//! conversion takes place.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`code`]      | `MeshCode` (parse / re-encode)                        |
//! | [`adjacency`] | `LEVEL_MODULI`, `carry_axis`, `neighbor`              |
//! | [`error`]     | `MeshError`, `MeshResult<T>`                          |

pub mod adjacency;
pub mod code;
pub mod error;

#[cfg(test)]
mod tests;

pub use adjacency::{LEVEL_MODULI, LEVELS, carry_axis, neighbor};
pub use code::MeshCode;
pub use error::{MeshError, MeshResult};
