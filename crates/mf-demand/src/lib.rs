//! `mf-demand` — zone potentials and origin-destination demand.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`statistics`] | `ZoneStatistics`, `zones_from_statistics` (unit rates)    |
//! | [`generator`]  | `DemandGenerator` (gravity model, top-K cap)              |
//! | [`matrix`]     | `OdPair`, `DemandMatrix`, `Strategy`                      |
//! | [`error`]      | `DemandError`, `DemandResult<T>`                          |
//!
//! # Model
//!
//! Singly-constrained gravity distribution: trips from `i` to `j` are
//! `P[i] · A[j] / ΣA`.  Only pairs above [`SIGNIFICANCE_THRESHOLD`] trips are
//! kept, and of those only the [`DEFAULT_PAIR_LIMIT`] largest.  The cap bounds
//! assignment cost at the price of dropping the long tail of small flows;
//! [`DemandMatrix`] reports how much volume it dropped.

pub mod error;
pub mod generator;
pub mod matrix;
pub mod statistics;


pub use error::{DemandError, DemandResult};
pub use generator::{DEFAULT_DENSE_CELL_LIMIT, DEFAULT_PAIR_LIMIT, DemandGenerator, SIGNIFICANCE_THRESHOLD};
pub use matrix::{DemandMatrix, OdPair, Strategy};
pub use statistics::{ZoneStatistics, zones_from_statistics};
