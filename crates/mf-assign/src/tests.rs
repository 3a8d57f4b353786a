//! Unit tests for mf-assign.

use mf_core::{LinkClasses, ZoneCode};
use mf_demand::{DemandMatrix, OdPair};
use mf_network::{FlowNetwork, NetworkBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `513204613` sits directly north of `513204611`.
const NORTH: &str = "513204613";
const SOUTH: &str = "513204611";

const BLOCK: [&str; 4] = ["513204611", "513204612", "513204613", "513204614"];

fn build(zones: &[&str]) -> FlowNetwork {
    NetworkBuilder::new(LinkClasses::default())
        .unwrap()
        .build(zones.iter().copied())
        .unwrap()
}

fn demand(pairs: &[(&str, &str, f64)]) -> DemandMatrix {
    let pairs: Vec<OdPair> = pairs
        .iter()
        .map(|&(o, d, v)| OdPair { origin: ZoneCode::from(o), destination: ZoneCode::from(d), volume: v })
        .collect();
    let volume = pairs.iter().map(|p| p.volume).sum();
    DemandMatrix {
        candidate_pairs: pairs.len(),
        candidate_volume: volume,
        retained_volume: volume,
        pairs,
        ..DemandMatrix::default()
    }
}

// ── BPR cost ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bpr {
    use approx::assert_relative_eq;
    use mf_core::BprParams;

    use crate::bpr_cost;

    #[test]
    fn zero_flow_is_free_flow_time() {
        assert_relative_eq!(bpr_cost(0.75, 0.0, 1000.0, &BprParams::default()), 0.75);
    }

    #[test]
    fn at_capacity() {
        // 0.5 · (1 + 0.15 · 1^4)
        assert_relative_eq!(bpr_cost(0.5, 500.0, 500.0, &BprParams::default()), 0.575, epsilon = 1e-12);
    }

    #[test]
    fn non_decreasing_in_flow() {
        let bpr = BprParams::default();
        let mut last = 0.0;
        for i in 0..50 {
            let c = bpr_cost(0.5, i as f64 * 40.0, 500.0, &bpr);
            assert!(c >= last);
            last = c;
        }
    }

    #[test]
    fn no_capacity_is_impassable() {
        let bpr = BprParams::default();
        assert_eq!(bpr_cost(0.5, 0.0, 0.0, &bpr), f64::INFINITY);
        assert_eq!(bpr_cost(0.5, 10.0, -1.0, &bpr), f64::INFINITY);
    }
}

// ── Logit split ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod logit {
    use approx::assert_relative_eq;

    use crate::logit_split;

    #[test]
    fn sums_to_one_and_prefers_cheapest() {
        let p = logit_split(&[3.0, 1.0, 2.0], 0.1);
        assert_eq!(p.len(), 3);
        assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(p.iter().all(|&x| x > 0.0));
        assert!(p[1] > p[2] && p[2] > p[0]);
    }

    #[test]
    fn single_path_takes_everything() {
        assert_eq!(logit_split(&[12.5], 0.1), vec![1.0]);
    }

    #[test]
    fn equal_costs_split_evenly() {
        let p = logit_split(&[2.0, 2.0], 0.1);
        assert_relative_eq!(p[0], 0.5);
        assert_relative_eq!(p[1], 0.5);
    }

    #[test]
    fn large_cost_gap_does_not_overflow() {
        let p = logit_split(&[0.0, 1e6], 1.0);
        assert_relative_eq!(p[0], 1.0);
        assert_relative_eq!(p[1], 0.0);
    }

    #[test]
    fn empty_input() {
        assert!(logit_split(&[], 0.1).is_empty());
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use approx::assert_relative_eq;
    use mf_core::{AssignmentConfig, Direction};
    use mf_demand::DemandMatrix;
    use mf_network::{FlowNetwork, YenPathFinder};

    use super::{BLOCK, NORTH, SOUTH, build, demand};
    use crate::{
        AssignError, AssignmentEngine, AssignmentObserver, AssignmentSummary, NoopObserver,
        StepReport, assign, bpr_cost,
    };

    /// Records link flows after every step.
    #[derive(Default)]
    struct FlowSnapshots {
        starts:    Vec<(usize, f64)>,
        snapshots: Vec<Vec<f64>>,
        ended:     bool,
    }

    impl AssignmentObserver for FlowSnapshots {
        fn on_step_start(&mut self, step: usize, fraction: f64) {
            self.starts.push((step, fraction));
        }
        fn on_step_end(&mut self, _report: &StepReport, network: &FlowNetwork) {
            self.snapshots.push(network.link_flow.clone());
        }
        fn on_run_end(&mut self, _summary: &AssignmentSummary) {
            self.ended = true;
        }
    }

    fn config(increments: Vec<f64>, k_paths: usize) -> AssignmentConfig {
        AssignmentConfig { increments, k_paths, ..AssignmentConfig::default() }
    }

    #[test]
    fn two_zone_scenario() {
        let mut net = build(&[NORTH, SOUTH]);
        let summary = assign(&mut net, &demand(&[(NORTH, SOUTH, 10.0)]), &AssignmentConfig::default()).unwrap();

        let n = net.zone_id(NORTH).unwrap();
        let s = net.zone_id(SOUTH).unwrap();
        let path = [
            (net.centroid(n), net.boundary(n, Direction::South)),
            (net.boundary(n, Direction::South), net.boundary(s, Direction::North)),
            (net.boundary(s, Direction::North), net.centroid(s)),
        ];
        for (from, to) in path {
            let link = net.find_link(from, to).unwrap();
            assert_relative_eq!(net.link_flow[link.index()], 10.0);
        }
        // Nothing else carries flow.
        assert_relative_eq!(net.total_flow(), 30.0);
        assert_relative_eq!(summary.loaded_volume(), 10.0);
        assert_eq!(summary.dropped_volume(), 0.0);
    }

    #[test]
    fn empty_increments_leave_network_unchanged() {
        let mut net = build(&[NORTH, SOUTH]);
        let before = net.link_cost_min.clone();
        let summary = assign(&mut net, &demand(&[(NORTH, SOUTH, 10.0)]), &config(vec![], 1)).unwrap();
        assert!(summary.is_noop());
        assert_eq!(net.total_flow(), 0.0);
        assert_eq!(net.link_cost_min, before);
    }

    #[test]
    fn degenerate_demand_is_noop() {
        let mut net = build(&[NORTH, SOUTH]);
        let mut observer = FlowSnapshots::default();
        let engine = AssignmentEngine::new(AssignmentConfig::default(), YenPathFinder).unwrap();
        let d = mf_demand::DemandGenerator::new().generate(&[]);
        let summary = engine.run(&mut net, &d, &mut observer);
        assert!(summary.is_noop());
        assert!(observer.starts.is_empty());
        assert!(observer.ended);
        assert_eq!(net.total_flow(), 0.0);
    }

    #[test]
    fn flows_never_decrease_across_steps() {
        let mut net = build(&BLOCK);
        let d = demand(&[("513204611", "513204614", 40.0), ("513204612", "513204613", 25.0)]);
        let engine = AssignmentEngine::new(config(vec![0.25, 0.25, 0.5], 2), YenPathFinder).unwrap();
        let mut observer = FlowSnapshots::default();
        engine.run(&mut net, &d, &mut observer);

        assert_eq!(observer.starts, vec![(0, 0.25), (1, 0.25), (2, 0.5)]);
        assert_eq!(observer.snapshots.len(), 3);
        for w in observer.snapshots.windows(2) {
            for (a, b) in w[0].iter().zip(&w[1]) {
                assert!(b >= a);
            }
        }
        assert!(observer.ended);
    }

    #[test]
    fn costs_recomputed_once_per_step() {
        let mut net = build(&[NORTH, SOUTH]);
        let engine = AssignmentEngine::new(config(vec![0.5, 0.5], 1), YenPathFinder).unwrap();
        engine.run(&mut net, &demand(&[(NORTH, SOUTH, 10.0)]), &mut NoopObserver);

        // Step 2 priced links with step 1's flow of 5; flow is now 10.
        let n = net.zone_id(NORTH).unwrap();
        let link = net.find_link(net.centroid(n), net.boundary(n, Direction::South)).unwrap();
        let i = link.index();
        assert_relative_eq!(net.link_flow[i], 10.0);
        let expected = bpr_cost(net.link_free_time_min[i], 5.0, net.link_capacity[i], &engine.config().bpr);
        assert_relative_eq!(net.link_cost_min[i], expected, epsilon = 1e-12);
    }

    #[test]
    fn equal_paths_share_volume() {
        let mut net = build(&BLOCK);
        assign(&mut net, &demand(&[("513204611", "513204614", 10.0)]), &config(vec![1.0], 2)).unwrap();

        let sw = net.zone_id("513204611").unwrap();
        let c = net.centroid(sw);
        let east = net.find_link(c, net.boundary(sw, Direction::East)).unwrap();
        let north = net.find_link(c, net.boundary(sw, Direction::North)).unwrap();
        assert_relative_eq!(net.link_flow[east.index()], 5.0, epsilon = 1e-9);
        assert_relative_eq!(net.link_flow[north.index()], 5.0, epsilon = 1e-9);
    }

    #[test]
    fn rerun_accumulates_until_reset() {
        let mut net = build(&[NORTH, SOUTH]);
        let d = demand(&[(NORTH, SOUTH, 10.0)]);
        let cfg = AssignmentConfig::default();
        assign(&mut net, &d, &cfg).unwrap();
        assign(&mut net, &d, &cfg).unwrap();
        assert_relative_eq!(net.total_flow(), 60.0);

        net.reset_flows();
        assert_eq!(net.total_flow(), 0.0);
        assign(&mut net, &d, &cfg).unwrap();
        assert_relative_eq!(net.total_flow(), 30.0);
    }

    #[test]
    fn unreachable_pair_volume_is_dropped() {
        // Diagonal cells share no edge.
        let mut net = build(&["513204611", "513204614"]);
        let d = demand(&[("513204611", "513204614", 10.0)]);
        let summary = assign(&mut net, &d, &config(vec![0.5, 0.5], 1)).unwrap();

        assert_eq!(net.total_flow(), 0.0);
        assert_eq!(summary.steps.len(), 2);
        assert_relative_eq!(summary.dropped_volume(), 10.0);
        assert_eq!(summary.loaded_volume(), 0.0);
        assert!(summary.steps.iter().all(|s| s.unroutable_pairs == 1));
    }

    #[test]
    fn zone_outside_network_is_unroutable() {
        let mut net = build(&[NORTH, SOUTH]);
        let d = demand(&[(NORTH, SOUTH, 4.0), (NORTH, "533946111", 6.0)]);
        let summary = assign(&mut net, &d, &AssignmentConfig::default()).unwrap();
        assert_relative_eq!(summary.loaded_volume(), 4.0);
        assert_relative_eq!(summary.dropped_volume(), 6.0);
        assert_relative_eq!(net.total_flow(), 12.0);
    }

    #[test]
    fn same_zone_pair_is_not_loaded() {
        let mut net = build(&[NORTH, SOUTH]);
        let d = demand(&[(NORTH, NORTH, 5.0), (NORTH, SOUTH, 10.0)]);
        let summary = assign(&mut net, &d, &AssignmentConfig::default()).unwrap();
        assert_relative_eq!(summary.loaded_volume(), 10.0);
        assert_relative_eq!(summary.dropped_volume(), 5.0);
        assert_eq!(summary.steps[0].unroutable_pairs, 1);
        assert_relative_eq!(net.total_flow(), 30.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let bad = AssignmentConfig { theta: 0.0, ..AssignmentConfig::default() };
        assert!(matches!(AssignmentEngine::new(bad, YenPathFinder), Err(AssignError::Config(_))));

        let bad = config(vec![1.0], 0);
        assert!(matches!(AssignmentEngine::new(bad, YenPathFinder), Err(AssignError::Config(_))));

        let bad = config(vec![0.5, -0.5], 1);
        let mut net = build(&[NORTH]);
        assert!(assign(&mut net, &DemandMatrix::default(), &bad).is_err());
    }
}
