//! Sparse OD demand.

use mf_core::ZoneCode;

/// Trips from one zone to another within the modelled period.
///
/// `origin != destination` and `volume > 0` always hold for generated pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct OdPair {
    pub origin:      ZoneCode,
    pub destination: ZoneCode,
    pub volume:      f64,
}

/// How the retained pairs were computed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// Full `n × n` product held in memory.
    Dense,
    /// One origin row at a time; no full matrix.
    PerOrigin,
}

/// Retained OD pairs plus bookkeeping on what the significance filter and
/// the top-K cap let through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemandMatrix {
    /// Retained pairs in ascending (origin, destination) input order.
    pub pairs: Vec<OdPair>,

    /// Pairs that passed the significance threshold, before the cap.
    pub candidate_pairs: usize,

    /// Total volume of those candidate pairs.
    pub candidate_volume: f64,

    /// Total volume of `pairs`.
    pub retained_volume: f64,

    /// `None` when no computation took place (degenerate input).
    pub strategy: Option<Strategy>,

    /// Total attraction was zero: there is nothing to assign.
    pub degenerate: bool,
}

impl DemandMatrix {
    pub(crate) fn degenerate() -> Self {
        Self { degenerate: true, ..Self::default() }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Candidate volume discarded by the top-K cap.
    pub fn truncated_volume(&self) -> f64 {
        (self.candidate_volume - self.retained_volume).max(0.0)
    }

    /// Candidate pairs discarded by the top-K cap.
    pub fn truncated_pairs(&self) -> usize {
        self.candidate_pairs - self.pairs.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OdPair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a DemandMatrix {
    type Item = &'a OdPair;
    type IntoIter = std::slice::Iter<'a, OdPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
