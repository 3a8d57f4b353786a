//! Assignment observer trait for progress reporting and data collection.

use mf_network::FlowNetwork;

use crate::{AssignmentSummary, StepReport};

/// Callbacks invoked by [`AssignmentEngine::run`][crate::AssignmentEngine::run]
/// at step boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: per-step flow snapshot
///
/// ```rust,ignore
/// struct Snapshots(Vec<Vec<f64>>);
///
/// impl AssignmentObserver for Snapshots {
///     fn on_step_end(&mut self, _report: &StepReport, network: &FlowNetwork) {
///         self.0.push(network.link_flow.clone());
///     }
/// }
/// ```
pub trait AssignmentObserver {
    /// Called before costs are recomputed for step `step`.
    fn on_step_start(&mut self, _step: usize, _fraction: f64) {}

    /// Called after all OD pairs of a step are loaded.
    fn on_step_end(&mut self, _report: &StepReport, _network: &FlowNetwork) {}

    /// Called once after the last step (also for runs with nothing to load).
    fn on_run_end(&mut self, _summary: &AssignmentSummary) {}
}

/// An [`AssignmentObserver`] that does nothing.
pub struct NoopObserver;

impl AssignmentObserver for NoopObserver {}
