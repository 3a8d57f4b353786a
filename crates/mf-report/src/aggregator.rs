//! Network flows → per-zone report.

use rustc_hash::FxHashMap;

use mf_core::ZoneId;
use mf_network::{FlowNetwork, LinkKind, NodeKind};

use crate::metric::METRIC_SLOTS;
use crate::{ColumnTemplate, FlowReport, Metric};

/// Links at or below this flow are treated as numerical noise.
pub const NOISE_FLOOR: f64 = 0.1;

/// Sums link flows into the metrics named by a [`ColumnTemplate`].
pub struct FlowAggregator {
    template: ColumnTemplate,
}

impl FlowAggregator {
    pub fn new(template: ColumnTemplate) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &ColumnTemplate {
        &self.template
    }

    /// Build the report for the network's current flows.
    ///
    /// Raw flows are summed per zone and metric first; each sum is then
    /// rounded to the nearest integer.  Only zones with at least one link
    /// above [`NOISE_FLOOR`] get a row.
    pub fn aggregate(&self, network: &FlowNetwork) -> FlowReport {
        let mut sums: FxHashMap<ZoneId, [f64; METRIC_SLOTS]> = FxHashMap::default();

        for link in network.links() {
            let i = link.index();
            let flow = network.link_flow[i];
            if flow <= NOISE_FLOOR {
                continue;
            }
            let Some((zone, metric)) = classify(network, i) else {
                continue;
            };
            sums.entry(zone).or_insert([0.0; METRIC_SLOTS])[metric.slot()] += flow;
        }

        let slots: Vec<Option<usize>> = self
            .template
            .value_columns()
            .map(|(_, metric)| metric.map(Metric::slot))
            .collect();

        let rows = sums
            .into_iter()
            .map(|(zone, sums)| {
                let values = slots
                    .iter()
                    .map(|slot| slot.map_or(0, |s| sums[s].round() as i64))
                    .collect();
                (network.zone_code(zone).clone(), values)
            })
            .collect();

        let report = FlowReport::new(self.template.clone(), rows);
        log::info!("aggregated flows for {} zones", report.len());
        report
    }
}

/// Zone and metric a link's flow counts toward, if any.
fn classify(network: &FlowNetwork, link: usize) -> Option<(ZoneId, Metric)> {
    let from = network.node_kind(network.link_from[link]);
    let to = network.node_kind(network.link_to[link]);
    match (network.link_kind[link], from, to) {
        (LinkKind::Internal, NodeKind::Centroid { zone }, NodeKind::Boundary { direction, .. }) => {
            Some((zone, Metric::CentroidOut(direction)))
        }
        (
            LinkKind::Passing,
            NodeKind::Boundary { zone, direction: entry },
            NodeKind::Boundary { direction: exit, .. },
        ) => Some((zone, Metric::Through { entry, exit })),
        _ => None,
    }
}
