//! Link cost and route-choice functions.

use mf_core::BprParams;
use mf_network::FlowNetwork;

/// BPR link cost in minutes: `t0 · (1 + alpha · (flow / capacity)^beta)`.
///
/// A link without capacity is impassable (`+∞`).
#[inline]
pub fn bpr_cost(free_time_min: f64, flow: f64, capacity: f64, bpr: &BprParams) -> f64 {
    if capacity <= 0.0 {
        return f64::INFINITY;
    }
    free_time_min * (1.0 + bpr.alpha * (flow / capacity).powf(bpr.beta))
}

/// Recompute `link_cost_min` for every link from its current flow.
pub fn update_costs(network: &mut FlowNetwork, bpr: &BprParams) {
    for i in 0..network.link_count() {
        network.link_cost_min[i] = bpr_cost(
            network.link_free_time_min[i],
            network.link_flow[i],
            network.link_capacity[i],
            bpr,
        );
    }
}

/// Logit split over a candidate path set.
///
/// Utility is `-theta · (cost - min_cost)`; probabilities are proportional to
/// `exp(utility)` and sum to 1 over the candidates given.  Measuring cost
/// relative to the cheapest path keeps the exponent non-positive, so nothing
/// overflows.
pub fn logit_split(costs: &[f64], theta: f64) -> Vec<f64> {
    let min = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = costs.iter().map(|c| (-theta * (c - min)).exp()).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}
