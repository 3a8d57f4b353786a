//! Path finding over current link costs.
//!
//! # Pluggability
//!
//! The assignment engine calls path finding via the [`PathFinder`] trait, so
//! alternative algorithms can be swapped in without touching the engine.
//! [`YenPathFinder`] is the default; [`DijkstraPathFinder`] ignores `k` and
//! always returns the single shortest path.
//!
//! # Cost units
//!
//! Costs are minutes (`f64`) read from [`FlowNetwork::link_cost_min`].  A
//! link whose cost is infinite or NaN is impassable.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use mf_core::{LinkId, NodeId};

use crate::FlowNetwork;

// ── Route ─────────────────────────────────────────────────────────────────────

/// One simple path: the links in travel order plus the visited nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub links:    Vec<LinkId>,
    /// `links.len() + 1` nodes, origin first.
    pub nodes:    Vec<NodeId>,
    /// Sum of link costs at the time the route was found.
    pub cost_min: f64,
}

impl Route {
    /// Assemble a route starting at `from` and following `links`.
    pub fn from_links(network: &FlowNetwork, from: NodeId, links: Vec<LinkId>) -> Route {
        let mut nodes = Vec::with_capacity(links.len() + 1);
        nodes.push(from);
        let mut cost_min = 0.0;
        for &l in &links {
            nodes.push(network.link_to[l.index()]);
            cost_min += network.link_cost_min[l.index()];
        }
        Route { links, nodes, cost_min }
    }

    /// `true` if origin and destination coincide.
    pub fn is_trivial(&self) -> bool {
        self.links.is_empty()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable candidate-path generator.
pub trait PathFinder: Send + Sync {
    /// Up to `k` distinct simple paths `from → to`, cheapest first.
    ///
    /// Returns an empty vec when `to` is unreachable.  `from == to` yields a
    /// single trivial route.
    fn find_paths(&self, network: &FlowNetwork, from: NodeId, to: NodeId, k: usize) -> Vec<Route>;
}

/// Single shortest path by Dijkstra's algorithm.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn find_paths(&self, network: &FlowNetwork, from: NodeId, to: NodeId, _k: usize) -> Vec<Route> {
        let banned_nodes = vec![false; network.node_count()];
        shortest_path(network, from, to, &banned_nodes, &FxHashSet::default())
            .into_iter()
            .collect()
    }
}

/// Yen's k-shortest simple paths.
///
/// Candidates with equal cost are ordered by their link sequence, so results
/// are reproducible.  `k == 1` does a single Dijkstra search.
pub struct YenPathFinder;

impl PathFinder for YenPathFinder {
    fn find_paths(&self, network: &FlowNetwork, from: NodeId, to: NodeId, k: usize) -> Vec<Route> {
        yen(network, from, to, k)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Min-heap entry: lowest cost first, then lowest node id.
#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    cost: f64,
    node: NodeId,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `from` to `to`, never entering `banned_nodes` or using
/// `banned_links`.
fn shortest_path(
    network:      &FlowNetwork,
    from:         NodeId,
    to:           NodeId,
    banned_nodes: &[bool],
    banned_links: &FxHashSet<LinkId>,
) -> Option<Route> {
    if from == to {
        return Some(Route { links: vec![], nodes: vec![from], cost_min: 0.0 });
    }

    let n = network.node_count();
    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_link = vec![LinkId::INVALID; n];

    dist[from.index()] = 0.0;
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: 0.0, node: from });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        if node == to {
            return Some(reconstruct(network, &prev_link, from, to));
        }
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for link in network.out_links(node) {
            let next = network.link_to[link.index()];
            let w = network.link_cost_min[link.index()];
            if !w.is_finite() || banned_nodes[next.index()] || banned_links.contains(&link) {
                continue;
            }
            let new_cost = cost + w;
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev_link[next.index()] = link;
                heap.push(HeapEntry { cost: new_cost, node: next });
            }
        }
    }

    None
}

fn reconstruct(network: &FlowNetwork, prev_link: &[LinkId], from: NodeId, to: NodeId) -> Route {
    let mut links = Vec::new();
    let mut cur = to;
    while cur != from {
        let l = prev_link[cur.index()];
        links.push(l);
        cur = network.link_from[l.index()];
    }
    links.reverse();
    Route::from_links(network, from, links)
}

// ── Yen ───────────────────────────────────────────────────────────────────────

fn yen(network: &FlowNetwork, from: NodeId, to: NodeId, k: usize) -> Vec<Route> {
    let n = network.node_count();
    let no_links = FxHashSet::default();
    let Some(first) = shortest_path(network, from, to, &vec![false; n], &no_links) else {
        return vec![];
    };

    let mut accepted = vec![first];
    let mut candidates: Vec<Route> = Vec::new();

    while accepted.len() < k {
        let last = &accepted[accepted.len() - 1];

        for i in 0..last.links.len() {
            let spur = last.nodes[i];
            let root = &last.links[..i];

            // Forbid the next link of every accepted path sharing this root.
            let banned_links: FxHashSet<LinkId> = accepted
                .iter()
                .filter(|p| p.links.len() > i && p.links[..i] == *root)
                .map(|p| p.links[i])
                .collect();

            // Keep the spur path simple: no revisiting root nodes.
            let mut banned_nodes = vec![false; n];
            for node in &last.nodes[..i] {
                banned_nodes[node.index()] = true;
            }

            let Some(spur_path) = shortest_path(network, spur, to, &banned_nodes, &banned_links) else {
                continue;
            };
            let mut links = root.to_vec();
            links.extend(spur_path.links);

            let known = accepted.iter().chain(candidates.iter()).any(|p| p.links == links);
            if !known {
                candidates.push(Route::from_links(network, from, links));
            }
        }

        let best = candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.cost_min
                    .total_cmp(&b.cost_min)
                    .then_with(|| a.links.cmp(&b.links))
            })
            .map(|(i, _)| i);

        match best {
            Some(i) => accepted.push(candidates.swap_remove(i)),
            None => break,
        }
    }

    accepted
}
