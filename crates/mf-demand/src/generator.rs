//! Gravity-model OD generation.
//!
//! The dense strategy multiplies the full production × attraction outer
//! product and filters it; for large zone sets that product does not fit in
//! memory.  A product over the generator's cell limit, or one whose
//! `try_reserve_exact` fails, switches to the per-origin strategy, which
//! filters one row at a time.  Both evaluate the same `P[i] · A[j]` products
//! against the same threshold and therefore retain the same pairs.
//!
//! Zones sharing a code are one zone: their potentials are summed before
//! either strategy runs, so no pair ever starts and ends at the same code.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;

use mf_core::{Zone, ZoneCode};
use rustc_hash::FxHashMap;

use crate::statistics::non_negative;
use crate::{DemandMatrix, OdPair, Strategy};

/// Pairs at or below this many trips are discarded.
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.1;

/// Maximum retained pairs.  Keeps assignment cost bounded; volume beyond the
/// cap is reported in [`DemandMatrix::truncated_volume`].
pub const DEFAULT_PAIR_LIMIT: usize = 100;

/// Largest outer product the dense strategy materializes: 2²⁷ cells, 1 GiB
/// of `f64`.
pub const DEFAULT_DENSE_CELL_LIMIT: usize = 1 << 27;

/// Retained pair before zone codes are attached.
#[derive(Copy, Clone, Debug)]
struct Candidate {
    origin:      usize,
    destination: usize,
    volume:      f64,
}

/// Turns zone potentials into a sparse [`DemandMatrix`].
///
/// # Example
///
/// ```
/// use mf_core::Zone;
/// use mf_demand::DemandGenerator;
///
/// let zones = [Zone::new("513204611", 10.0, 0.0), Zone::new("513204612", 0.0, 20.0)];
/// let demand = DemandGenerator::new().generate(&zones);
/// assert_eq!(demand.len(), 1);
/// assert_eq!(demand.pairs[0].volume, 10.0);
/// ```
#[derive(Clone, Debug)]
pub struct DemandGenerator {
    pair_limit:       usize,
    dense_cell_limit: usize,
    forced:           Option<Strategy>,
}

impl DemandGenerator {
    pub fn new() -> Self {
        Self { pair_limit: DEFAULT_PAIR_LIMIT, dense_cell_limit: DEFAULT_DENSE_CELL_LIMIT, forced: None }
    }

    /// Override the top-K cap.  `usize::MAX` disables it.
    pub fn with_pair_limit(mut self, limit: usize) -> Self {
        self.pair_limit = limit;
        self
    }

    /// Cap the `n²` cells the dense strategy may allocate.  Larger zone sets
    /// are computed per origin.
    pub fn with_dense_cell_limit(mut self, cells: usize) -> Self {
        self.dense_cell_limit = cells;
        self
    }

    /// Pin the computation strategy.  `Strategy::Dense` still falls back to
    /// per-origin when the full matrix is over the cell limit or cannot be
    /// allocated.
    pub fn force_strategy(mut self, strategy: Strategy) -> Self {
        self.forced = Some(strategy);
        self
    }

    pub fn pair_limit(&self) -> usize {
        self.pair_limit
    }

    pub fn dense_cell_limit(&self) -> usize {
        self.dense_cell_limit
    }

    /// Generate the retained OD pairs for `zones`.
    ///
    /// Zero total attraction yields an empty matrix with `degenerate` set.
    ///
    /// Zones repeating an earlier code are merged into it; pairs follow the
    /// order in which codes first appear.
    pub fn generate(&self, zones: &[Zone]) -> DemandMatrix {
        let Potentials { codes, production, attraction } = Potentials::merge(zones);

        let total: f64 = attraction.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            log::warn!("total attraction is zero; no demand to assign");
            return DemandMatrix::degenerate();
        }

        let dense_result = match self.forced {
            Some(Strategy::PerOrigin) => None,
            _ => dense(&production, &attraction, total, self.dense_cell_limit),
        };
        let (mut candidates, strategy) = match dense_result {
            Some(c) => (c, Strategy::Dense),
            None => {
                if self.forced != Some(Strategy::PerOrigin) {
                    log::warn!(
                        "full {n}×{n} demand matrix is over the {limit}-cell limit or does not fit in memory; \
                         switching to per-origin computation",
                        n = codes.len(),
                        limit = self.dense_cell_limit,
                    );
                }
                (per_origin(&production, &attraction, total), Strategy::PerOrigin)
            }
        };

        let candidate_pairs = candidates.len();
        let candidate_volume: f64 = candidates.iter().map(|c| c.volume).sum();
        log::info!("found {candidate_pairs} significant OD pairs ({strategy:?})");

        if candidates.len() > self.pair_limit {
            // Largest first; equal volumes keep input order.
            candidates.sort_by(|a, b| {
                b.volume
                    .total_cmp(&a.volume)
                    .then_with(|| (a.origin, a.destination).cmp(&(b.origin, b.destination)))
            });
            candidates.truncate(self.pair_limit);
            candidates.sort_by(by_position);
        }

        let pairs: Vec<OdPair> = candidates
            .iter()
            .map(|c| OdPair {
                origin:      ZoneCode::clone(codes[c.origin]),
                destination: ZoneCode::clone(codes[c.destination]),
                volume:      c.volume,
            })
            .collect();
        let retained_volume: f64 = pairs.iter().map(|p| p.volume).sum();

        if pairs.len() < candidate_pairs {
            log::warn!(
                "kept top {} of {} OD pairs; dropped {:.1} of {:.1} trips",
                pairs.len(),
                candidate_pairs,
                candidate_volume - retained_volume,
                candidate_volume,
            );
        }

        DemandMatrix {
            pairs,
            candidate_pairs,
            candidate_volume,
            retained_volume,
            strategy: Some(strategy),
            degenerate: false,
        }
    }
}

impl Default for DemandGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-code potentials, negatives and NaN clamped to zero.
struct Potentials<'a> {
    codes:      Vec<&'a ZoneCode>,
    production: Vec<f64>,
    attraction: Vec<f64>,
}

impl<'a> Potentials<'a> {
    fn merge(zones: &'a [Zone]) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut codes = Vec::with_capacity(zones.len());
        let mut production = Vec::with_capacity(zones.len());
        let mut attraction = Vec::with_capacity(zones.len());

        for zone in zones {
            let p = non_negative(zone.production);
            let a = non_negative(zone.attraction);
            match index.entry(zone.code.as_str()) {
                Entry::Occupied(e) => {
                    production[*e.get()] += p;
                    attraction[*e.get()] += a;
                }
                Entry::Vacant(e) => {
                    e.insert(codes.len());
                    codes.push(&zone.code);
                    production.push(p);
                    attraction.push(a);
                }
            }
        }

        if codes.len() < zones.len() {
            log::warn!("merged {} zones with repeated codes", zones.len() - codes.len());
        }
        Self { codes, production, attraction }
    }
}

fn by_position(a: &Candidate, b: &Candidate) -> Ordering {
    (a.origin, a.destination).cmp(&(b.origin, b.destination))
}

/// Materialize the full product, then filter.  `None` if `n²` overflows,
/// exceeds `cell_limit`, or the allocation fails.
fn dense(production: &[f64], attraction: &[f64], total: f64, cell_limit: usize) -> Option<Vec<Candidate>> {
    let n = production.len();
    let cells = n.checked_mul(n).filter(|&c| c <= cell_limit)?;

    let mut product: Vec<f64> = Vec::new();
    product.try_reserve_exact(cells).ok()?;
    for &p in production {
        product.extend(attraction.iter().map(|&a| p * a));
    }

    let threshold = SIGNIFICANCE_THRESHOLD * total;
    let candidates = product
        .iter()
        .enumerate()
        .filter(|&(idx, &v)| v > threshold && idx / n != idx % n)
        .map(|(idx, &v)| Candidate { origin: idx / n, destination: idx % n, volume: v / total })
        .collect();
    Some(candidates)
}

/// Filter one origin row at a time.
fn per_origin(production: &[f64], attraction: &[f64], total: f64) -> Vec<Candidate> {
    let threshold = SIGNIFICANCE_THRESHOLD * total;
    let mut candidates = Vec::new();
    for (i, &p) in production.iter().enumerate() {
        if p <= 0.0 {
            continue;
        }
        for (j, &a) in attraction.iter().enumerate() {
            let v = p * a;
            if i != j && v > threshold {
                candidates.push(Candidate { origin: i, destination: j, volume: v / total });
            }
        }
    }
    candidates
}
