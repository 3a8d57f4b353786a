//! Zone set → [`FlowNetwork`].
//!
//! The builder lays out five nodes per zone, adds the intra-zone links, then
//! asks the mesh resolver for each zone's north and east neighbor.  South and
//! west connectivity follows from the neighbors' own north/east lookups, so
//! every shared edge is discovered exactly once.

use rustc_hash::{FxHashMap, FxHashSet};

use mf_core::{Direction, LinkClass, LinkClasses, NodeId, ZoneCode, ZoneId};

use crate::network::{LinkColumns, NODES_PER_ZONE};
use crate::{FlowNetwork, LinkKind, NetworkError, NetworkResult, NodeKind};

/// Builds a [`FlowNetwork`] from a zone set.
///
/// # Example
///
/// ```
/// use mf_core::LinkClasses;
/// use mf_network::NetworkBuilder;
///
/// let net = NetworkBuilder::new(LinkClasses::default())
///     .unwrap()
///     .build(["513204611", "513204613"])
///     .unwrap();
/// assert_eq!(net.node_count(), 10);
/// assert_eq!(net.connector_pairs(), 1);
/// ```
pub struct NetworkBuilder {
    classes: LinkClasses,
}

struct RawLink {
    from:  NodeId,
    to:    NodeId,
    kind:  LinkKind,
    class: LinkClass,
}

impl NetworkBuilder {
    /// Fails fast on a structurally invalid link class (negative capacity,
    /// non-positive speed, negative length).
    pub fn new(classes: LinkClasses) -> NetworkResult<Self> {
        classes.validate()?;
        Ok(Self { classes })
    }

    /// Build the network for `zones`.
    ///
    /// Duplicate codes are collapsed and zones are laid out in ascending code
    /// order, so the same zone set always yields the same node and link ids.
    /// Codes the mesh resolver cannot handle still get their five nodes and
    /// intra-zone links, only no connectors.
    pub fn build<I, C>(&self, zones: I) -> NetworkResult<FlowNetwork>
    where
        I: IntoIterator<Item = C>,
        C: Into<ZoneCode>,
    {
        let mut codes: Vec<ZoneCode> = zones.into_iter().map(Into::into).collect();
        codes.sort_unstable();
        codes.dedup();

        let zone_count = codes.len();
        if zone_count
            .checked_mul(NODES_PER_ZONE)
            .is_none_or(|n| n >= u32::MAX as usize)
        {
            return Err(NetworkError::TooManyZones(zone_count));
        }

        let index: FxHashMap<&str, ZoneId> = codes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), ZoneId(i as u32)))
            .collect();

        // ── Nodes ─────────────────────────────────────────────────────────
        let mut node_kind = Vec::with_capacity(zone_count * NODES_PER_ZONE);
        for z in 0..zone_count {
            let zone = ZoneId(z as u32);
            node_kind.push(NodeKind::Centroid { zone });
            for direction in Direction::ALL {
                node_kind.push(NodeKind::Boundary { zone, direction });
            }
        }

        // 8 internal + 12 passing per zone, up to 4 connectors per zone.
        let mut raw: Vec<RawLink> = Vec::with_capacity(zone_count * 24);

        // ── Intra-zone links ──────────────────────────────────────────────
        for z in 0..zone_count {
            let zone = ZoneId(z as u32);
            let c = centroid(zone);
            for d in Direction::ALL {
                let b = boundary(zone, d);
                raw.push(RawLink { from: c, to: b, kind: LinkKind::Internal, class: self.classes.internal });
                raw.push(RawLink { from: b, to: c, kind: LinkKind::Internal, class: self.classes.internal });
            }
            for entry in Direction::ALL {
                for exit in Direction::ALL {
                    if entry != exit {
                        raw.push(RawLink {
                            from:  boundary(zone, entry),
                            to:    boundary(zone, exit),
                            kind:  LinkKind::Passing,
                            class: self.classes.passing,
                        });
                    }
                }
            }
        }

        // ── Inter-zone connectors ─────────────────────────────────────────
        let mut seen: FxHashSet<(ZoneId, ZoneId)> = FxHashSet::default();
        let mut unresolved = 0usize;
        for (z, code) in codes.iter().enumerate() {
            let zone = ZoneId(z as u32);
            for side in [Direction::North, Direction::East] {
                let other = match mf_mesh::neighbor(code.as_str(), side) {
                    Ok(n) => n,
                    Err(e) => {
                        log::debug!("no {side} neighbor for zone {code}: {e}");
                        unresolved += 1;
                        continue;
                    }
                };
                let Some(&other) = index.get(other.as_str()) else {
                    continue;
                };
                let key = (zone.min(other), zone.max(other));
                if !seen.insert(key) {
                    continue;
                }
                let a = boundary(zone, side);
                let b = boundary(other, side.opposite());
                raw.push(RawLink { from: a, to: b, kind: LinkKind::Connector, class: self.classes.connector });
                raw.push(RawLink { from: b, to: a, kind: LinkKind::Connector, class: self.classes.connector });
            }
        }

        if unresolved > 0 {
            log::warn!("{unresolved} adjacency lookups failed; affected zones lack connectors");
        }
        log::info!(
            "built network: {} zones, {} nodes, {} links, {} connector pairs",
            zone_count,
            node_kind.len(),
            raw.len(),
            seen.len(),
        );

        let (node_out_start, links) = to_csr(raw, node_kind.len());
        Ok(FlowNetwork::from_parts(codes, node_kind, node_out_start, links))
    }
}

#[inline]
fn centroid(zone: ZoneId) -> NodeId {
    NodeId((zone.index() * NODES_PER_ZONE) as u32)
}

#[inline]
fn boundary(zone: ZoneId, direction: Direction) -> NodeId {
    NodeId((zone.index() * NODES_PER_ZONE + 1 + direction.ordinal()) as u32)
}

/// Sort links by source node and build the CSR row pointer.
///
/// The sort is stable, so links of one node keep their insertion order.
fn to_csr(mut raw: Vec<RawLink>, node_count: usize) -> (Vec<u32>, LinkColumns) {
    raw.sort_by_key(|l| l.from.0);

    let mut cols = LinkColumns::default();
    for l in &raw {
        cols.from.push(l.from);
        cols.to.push(l.to);
        cols.kind.push(l.kind);
        cols.length_km.push(l.class.length_km);
        cols.capacity.push(l.class.capacity);
        cols.free_speed_kmh.push(l.class.free_speed_kmh);
        cols.free_time_min.push(l.class.free_time_min());
    }

    let mut node_out_start = vec![0u32; node_count + 1];
    for l in &raw {
        node_out_start[l.from.index() + 1] += 1;
    }
    for i in 1..=node_count {
        node_out_start[i] += node_out_start[i - 1];
    }
    debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

    (node_out_start, cols)
}
