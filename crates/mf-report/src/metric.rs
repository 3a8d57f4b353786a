//! Report column names.

use std::fmt;

use mf_core::Direction;

const CENTROID_OUT_PREFIX: &str = "juusinkukaku_kansen_";
const THROUGH_PREFIX: &str = "kyoukaikukaku_kansen_";

/// Number of distinct metrics per zone: 4 centroid-out + 4·4 through slots
/// (the diagonal is never populated).
pub(crate) const METRIC_SLOTS: usize = 20;

/// One per-zone flow metric.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Metric {
    /// Flow leaving the centroid toward the `Direction` boundary.
    CentroidOut(Direction),
    /// Flow passing the zone from the `entry` edge to the `exit` boundary.
    Through { entry: Direction, exit: Direction },
}

impl Metric {
    /// Parse a column name.  `None` for anything that is not a metric
    /// (including the key column).
    pub fn parse(name: &str) -> Option<Metric> {
        if let Some(rest) = name.strip_prefix(CENTROID_OUT_PREFIX) {
            return Direction::from_letter(rest).map(Metric::CentroidOut);
        }
        let rest = name.strip_prefix(THROUGH_PREFIX)?;
        let (edge, exit) = rest.rsplit_once('_')?;
        let entry = Direction::from_edge_label(edge)?;
        let exit = Direction::from_letter(exit)?;
        (entry != exit).then_some(Metric::Through { entry, exit })
    }

    pub fn column_name(self) -> String {
        match self {
            Metric::CentroidOut(d) => format!("{CENTROID_OUT_PREFIX}{}", d.as_str()),
            Metric::Through { entry, exit } => {
                format!("{THROUGH_PREFIX}{}_{}", entry.edge_label(), exit.as_str())
            }
        }
    }

    /// Dense index in `0..METRIC_SLOTS`.
    #[inline]
    pub(crate) fn slot(self) -> usize {
        match self {
            Metric::CentroidOut(d) => d.ordinal(),
            Metric::Through { entry, exit } => 4 + entry.ordinal() * 4 + exit.ordinal(),
        }
    }

    /// Every metric the aggregator can produce, centroid-out first.
    pub fn all() -> impl Iterator<Item = Metric> {
        let out = Direction::ALL.into_iter().map(Metric::CentroidOut);
        let through = Direction::ALL.into_iter().flat_map(|entry| {
            Direction::ALL
                .into_iter()
                .filter(move |&exit| exit != entry)
                .map(move |exit| Metric::Through { entry, exit })
        });
        out.chain(through)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column_name())
    }
}
