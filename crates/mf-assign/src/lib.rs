//! `mf-assign` — incremental traffic assignment.
//!
//! # Loading loop
//!
//! ```text
//! for fraction in config.increments:
//!   ① Costs:  recompute every link cost with the BPR function of its
//!             current cumulative flow.
//!   ② Paths:  for each OD pair (stable order), find up to k_paths
//!             simple paths between the two centroids.
//!   ③ Split:  divide volume · fraction across those paths by a logit
//!             rule and add it to every link on each path.
//! ```
//!
//! Costs stay fixed within a step.  This is incremental loading, not a
//! converged equilibrium: flows only ever grow, and running the engine again
//! on the same network keeps accumulating until the owner calls
//! [`FlowNetwork::reset_flows`](mf_network::FlowNetwork::reset_flows).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mf_assign::{AssignmentEngine, NoopObserver};
//! use mf_network::YenPathFinder;
//!
//! let engine = AssignmentEngine::new(config.assignment.clone(), YenPathFinder)?;
//! let summary = engine.run(&mut network, &demand, &mut NoopObserver);
//! ```

pub mod cost;
pub mod engine;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use cost::{bpr_cost, logit_split, update_costs};
pub use engine::{AssignmentEngine, AssignmentSummary, StepReport, assign};
pub use error::{AssignError, AssignResult};
pub use observer::{AssignmentObserver, NoopObserver};
