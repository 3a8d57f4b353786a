//! The `AssignmentEngine` struct and its loading loop.

use mf_core::{AssignmentConfig, NodeId};
use mf_demand::DemandMatrix;
use mf_network::{FlowNetwork, PathFinder, YenPathFinder};

use crate::cost::{logit_split, update_costs};
use crate::{AssignResult, AssignmentObserver, NoopObserver};

// ── Step bookkeeping ──────────────────────────────────────────────────────────

/// Outcome of one loading increment.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step:             usize,
    pub fraction:         f64,
    /// Volume placed on paths this step.
    pub loaded_volume:    f64,
    /// Volume of pairs with no path, an endpoint outside the network, or
    /// both ends in one zone.
    pub dropped_volume:   f64,
    pub unroutable_pairs: usize,
}

impl StepReport {
    fn new(step: usize, fraction: f64) -> Self {
        Self { step, fraction, loaded_volume: 0.0, dropped_volume: 0.0, unroutable_pairs: 0 }
    }
}

/// Per-step reports of one [`AssignmentEngine::run`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentSummary {
    pub steps: Vec<StepReport>,
}

impl AssignmentSummary {
    pub fn loaded_volume(&self) -> f64 {
        self.steps.iter().map(|s| s.loaded_volume).sum()
    }

    pub fn dropped_volume(&self) -> f64 {
        self.steps.iter().map(|s| s.dropped_volume).sum()
    }

    /// `true` if nothing was loaded because there was nothing to do.
    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }
}

// ── AssignmentEngine ──────────────────────────────────────────────────────────

/// Incremental loader.
///
/// The engine holds only configuration and the path finder; the network is
/// borrowed mutably per run, so one engine can load several networks and the
/// caller decides when flows are reset.
pub struct AssignmentEngine<P: PathFinder> {
    config: AssignmentConfig,
    finder: P,
}

impl<P: PathFinder> AssignmentEngine<P> {
    /// Validates `config` up front; a run never fails.
    pub fn new(config: AssignmentConfig, finder: P) -> AssignResult<Self> {
        config.validate()?;
        Ok(Self { config, finder })
    }

    pub fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Load `demand` onto `network` one increment at a time.
    ///
    /// Flows add to whatever the network already carries.  Degenerate or
    /// empty demand and an empty increment list leave the network untouched
    /// and return an empty summary.
    pub fn run<O: AssignmentObserver>(
        &self,
        network:  &mut FlowNetwork,
        demand:   &DemandMatrix,
        observer: &mut O,
    ) -> AssignmentSummary {
        let mut summary = AssignmentSummary::default();

        if demand.degenerate || demand.is_empty() || self.config.increments.is_empty() {
            log::info!("nothing to assign ({} OD pairs, {} increments)", demand.len(), self.config.increments.len());
            observer.on_run_end(&summary);
            return summary;
        }

        // Resolve endpoints once.  A zone outside the network, or a pair
        // whose ends share a centroid, is unroutable.
        let endpoints: Vec<Option<(NodeId, NodeId)>> = demand
            .iter()
            .map(|p| {
                let from = network.centroid_of(p.origin.as_str())?;
                let to = network.centroid_of(p.destination.as_str())?;
                (from != to).then_some((from, to))
            })
            .collect();

        for (step, &fraction) in self.config.increments.iter().enumerate() {
            observer.on_step_start(step, fraction);

            // ── ① Costs ───────────────────────────────────────────────────
            update_costs(network, &self.config.bpr);

            let mut report = StepReport::new(step, fraction);
            for (pair, ends) in demand.iter().zip(&endpoints) {
                let volume = pair.volume * fraction;

                // ── ② Paths ───────────────────────────────────────────────
                let routes = match ends {
                    Some((from, to)) => self.finder.find_paths(network, *from, *to, self.config.k_paths),
                    None => Vec::new(),
                };
                if routes.is_empty() {
                    log::debug!("no path {} → {}; dropping {volume:.3}", pair.origin, pair.destination);
                    report.dropped_volume += volume;
                    report.unroutable_pairs += 1;
                    continue;
                }

                // ── ③ Split ───────────────────────────────────────────────
                let costs: Vec<f64> = routes.iter().map(|r| r.cost_min).collect();
                let shares = logit_split(&costs, self.config.theta);
                for (route, share) in routes.iter().zip(shares) {
                    let add = volume * share;
                    for &link in &route.links {
                        network.add_flow(link, add);
                    }
                }
                report.loaded_volume += volume;
            }

            log::info!(
                "step {}/{} (fraction {:.3}): loaded {:.1}, dropped {:.1} over {} unroutable pairs",
                step + 1,
                self.config.increments.len(),
                fraction,
                report.loaded_volume,
                report.dropped_volume,
                report.unroutable_pairs,
            );
            observer.on_step_end(&report, network);
            summary.steps.push(report);
        }

        observer.on_run_end(&summary);
        summary
    }
}

/// Validate `config` and run it with [`YenPathFinder`] and no observer.
pub fn assign(
    network: &mut FlowNetwork,
    demand:  &DemandMatrix,
    config:  &AssignmentConfig,
) -> AssignResult<AssignmentSummary> {
    let engine = AssignmentEngine::new(config.clone(), YenPathFinder)?;
    Ok(engine.run(network, demand, &mut NoopObserver))
}
