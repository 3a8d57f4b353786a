//! `mf-core` — foundational types for the `meshflow` traffic model.
//!
//! This crate is a dependency of every other `mf-*` crate.  It has no `mf-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ZoneId`, `NodeId`, `LinkId`                          |
//! | [`direction`]   | `Direction` (N, S, E, W)                              |
//! | [`zone`]        | `ZoneCode`, `Zone`                                    |
//! | [`config`]      | `ModelConfig`, `AssignmentConfig`, `LinkClasses`, …   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AnalysisPeriod, AssignmentConfig, BprParams, LinkClass, LinkClasses, ModelConfig, UnitRates,
};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{LinkId, NodeId, ZoneId};
pub use zone::{Zone, ZoneCode};
