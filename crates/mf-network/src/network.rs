//! Zone network representation.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing links.
//! Given a `NodeId n`, its outgoing links occupy the slice:
//!
//! ```text
//! link_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All link arrays are sorted by source node and indexed by `LinkId`.  Static
//! attributes (`link_length_km`, `link_capacity`, …) never change after
//! construction; `link_flow` and `link_cost_min` are the only mutable state
//! and are written by the assignment engine.
//!
//! # Node layout
//!
//! Zone `z` owns nodes `5z .. 5z + 5`: the centroid first, then the boundary
//! nodes in [`Direction::ALL`] order (N, S, E, W).

use rustc_hash::FxHashMap;

use mf_core::{Direction, LinkId, NodeId, ZoneCode, ZoneId};

/// Number of nodes created per zone (one centroid, four boundaries).
pub const NODES_PER_ZONE: usize = 5;

// ── Node & link variants ──────────────────────────────────────────────────────

/// What a node represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    /// Source and sink of all demand of `zone`.
    Centroid { zone: ZoneId },
    /// Entry/exit point on one side of `zone`.
    Boundary { zone: ZoneId, direction: Direction },
}

impl NodeKind {
    pub fn zone(self) -> ZoneId {
        match self {
            NodeKind::Centroid { zone } | NodeKind::Boundary { zone, .. } => zone,
        }
    }
}

/// What a link represents.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum LinkKind {
    /// Centroid ↔ boundary within one zone.
    Internal,
    /// Boundary → boundary within one zone (through movement).
    Passing,
    /// Boundary ↔ boundary across a shared edge of two adjacent zones.
    Connector,
}

// ── FlowNetwork ───────────────────────────────────────────────────────────────

/// Directed zone graph in CSR format with per-link flow and cost state.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`NetworkBuilder`](crate::NetworkBuilder).
///
/// Mutation requires `&mut`, so a service sharing one network between
/// requests guards it with a single lock; an idle network can be read
/// concurrently through `&FlowNetwork`.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    // ── Zone data ─────────────────────────────────────────────────────────
    /// Zone codes in ascending order.  Indexed by `ZoneId`.
    pub zone_codes: Vec<ZoneCode>,

    // ── Node data ─────────────────────────────────────────────────────────
    /// Variant of each node.  Indexed by `NodeId`.
    pub node_kind: Vec<NodeKind>,

    // ── CSR link adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Static link data (indexed by LinkId) ─────────────────────────────
    pub link_from:           Vec<NodeId>,
    pub link_to:             Vec<NodeId>,
    pub link_kind:           Vec<LinkKind>,
    pub link_length_km:      Vec<f64>,
    /// Vehicles per period.
    pub link_capacity:       Vec<f64>,
    pub link_free_speed_kmh: Vec<f64>,
    /// `length / free_speed · 60`.
    pub link_free_time_min:  Vec<f64>,

    // ── Mutable link state ────────────────────────────────────────────────
    /// Cumulative assigned flow.  Never decreases during a run.
    pub link_flow:     Vec<f64>,
    /// Current travel cost in minutes, used as the path-finding weight.
    pub link_cost_min: Vec<f64>,

    zone_index: FxHashMap<ZoneCode, ZoneId>,
}

impl FlowNetwork {
    pub(crate) fn from_parts(
        zone_codes:     Vec<ZoneCode>,
        node_kind:      Vec<NodeKind>,
        node_out_start: Vec<u32>,
        links:          LinkColumns,
    ) -> Self {
        let zone_index = zone_codes
            .iter()
            .enumerate()
            .map(|(i, code)| (code.clone(), ZoneId(i as u32)))
            .collect();
        let link_count = links.to.len();
        Self {
            zone_codes,
            node_kind,
            node_out_start,
            link_from:           links.from,
            link_to:             links.to,
            link_kind:           links.kind,
            link_length_km:      links.length_km,
            link_capacity:       links.capacity,
            link_free_speed_kmh: links.free_speed_kmh,
            link_cost_min:       links.free_time_min.clone(),
            link_free_time_min:  links.free_time_min,
            link_flow:           vec![0.0; link_count],
            zone_index,
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn zone_count(&self) -> usize {
        self.zone_codes.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_kind.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zone_codes.is_empty()
    }

    // ── Zone / node lookups ───────────────────────────────────────────────

    /// `ZoneId` of the zone with the given code, if it is part of the network.
    pub fn zone_id(&self, code: &str) -> Option<ZoneId> {
        self.zone_index.get(code).copied()
    }

    pub fn zone_code(&self, zone: ZoneId) -> &ZoneCode {
        &self.zone_codes[zone.index()]
    }

    #[inline]
    pub fn centroid(&self, zone: ZoneId) -> NodeId {
        NodeId((zone.index() * NODES_PER_ZONE) as u32)
    }

    #[inline]
    pub fn boundary(&self, zone: ZoneId, direction: Direction) -> NodeId {
        NodeId((zone.index() * NODES_PER_ZONE + 1 + direction.ordinal()) as u32)
    }

    /// Centroid node of the zone with the given code.
    pub fn centroid_of(&self, code: &str) -> Option<NodeId> {
        self.zone_id(code).map(|z| self.centroid(z))
    }

    #[inline]
    pub fn node_kind(&self, node: NodeId) -> NodeKind {
        self.node_kind[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `LinkId`s of all outgoing links from `node`.
    #[inline]
    pub fn out_links(&self, node: NodeId) -> impl Iterator<Item = LinkId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| LinkId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The link `from → to`, if one exists.
    pub fn find_link(&self, from: NodeId, to: NodeId) -> Option<LinkId> {
        self.out_links(from).find(|l| self.link_to[l.index()] == to)
    }

    /// All link ids in CSR order.
    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        (0..self.link_count()).map(|i| LinkId(i as u32))
    }

    // ── Flow state ────────────────────────────────────────────────────────

    /// Add assigned volume to one link.
    #[inline]
    pub fn add_flow(&mut self, link: LinkId, volume: f64) {
        self.link_flow[link.index()] += volume;
    }

    /// Zero every link flow and restore free-flow costs.
    ///
    /// Assignment runs accumulate onto whatever flow is already loaded; call
    /// this between independent scenarios.
    pub fn reset_flows(&mut self) {
        self.link_flow.fill(0.0);
        self.link_cost_min.copy_from_slice(&self.link_free_time_min);
    }

    /// Sum of flow over all links.
    pub fn total_flow(&self) -> f64 {
        self.link_flow.iter().sum()
    }

    /// Number of undirected connector pairs (each is two directed links).
    pub fn connector_pairs(&self) -> usize {
        self.link_kind.iter().filter(|k| **k == LinkKind::Connector).count() / 2
    }
}

/// Column-wise link attributes handed from the builder to the network.
#[derive(Default)]
pub(crate) struct LinkColumns {
    pub from:           Vec<NodeId>,
    pub to:             Vec<NodeId>,
    pub kind:           Vec<LinkKind>,
    pub length_km:      Vec<f64>,
    pub capacity:       Vec<f64>,
    pub free_speed_kmh: Vec<f64>,
    pub free_time_min:  Vec<f64>,
}
