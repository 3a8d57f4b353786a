//! Aggregated per-zone report.

use std::collections::BTreeMap;

use mf_core::ZoneCode;

use crate::{ColumnTemplate, KEY_COLUMN, Metric};

/// Rounded per-zone metrics, one row per zone with flow.
///
/// Row values follow the template's value columns (key column excluded).
#[derive(Clone, Debug, PartialEq)]
pub struct FlowReport {
    template: ColumnTemplate,
    value_columns: Vec<String>,
    rows: BTreeMap<ZoneCode, Vec<i64>>,
}

/// Headline figures of a [`FlowReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReportSummary {
    /// Zones in the report.
    pub total_zones:  usize,
    /// Zones whose metrics sum to a non-zero value.
    pub active_zones: usize,
    /// Sum of every reported value.
    pub total_flow:   i64,
    /// Busiest zones by row total, largest first; ties in code order.
    pub top_zones:    Vec<(ZoneCode, i64)>,
}

impl FlowReport {
    pub(crate) fn new(template: ColumnTemplate, rows: BTreeMap<ZoneCode, Vec<i64>>) -> Self {
        let value_columns = template
            .columns()
            .iter()
            .filter(|c| *c != KEY_COLUMN)
            .cloned()
            .collect();
        Self { template, value_columns, rows }
    }

    /// All output columns, key column included.
    pub fn columns(&self) -> &[String] {
        self.template.columns()
    }

    pub fn value_columns(&self) -> &[String] {
        &self.value_columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in ascending zone-code order.
    pub fn rows(&self) -> impl Iterator<Item = (&ZoneCode, &[i64])> {
        self.rows.iter().map(|(code, values)| (code, values.as_slice()))
    }

    pub fn row(&self, code: &str) -> Option<&[i64]> {
        self.rows.get(code).map(Vec::as_slice)
    }

    /// Value of `column` for zone `code`.  `None` if the zone has no row or
    /// the column is not in the template.
    pub fn get(&self, code: &str, column: &str) -> Option<i64> {
        let pos = self.value_columns.iter().position(|c| c == column)?;
        self.row(code).map(|values| values[pos])
    }

    pub fn metric(&self, code: &str, metric: Metric) -> Option<i64> {
        self.get(code, &metric.column_name())
    }

    /// Sum of the zone's row.  `None` if the zone has no row.
    pub fn zone_total(&self, code: &str) -> Option<i64> {
        self.row(code).map(row_total)
    }

    pub fn summary(&self, top_n: usize) -> ReportSummary {
        let totals: Vec<(&ZoneCode, i64)> = self
            .rows()
            .map(|(code, values)| (code, row_total(values)))
            .collect();

        let mut ranked = totals.clone();
        // Stable: equal totals keep code order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(top_n);

        ReportSummary {
            total_zones:  totals.len(),
            active_zones: totals.iter().filter(|(_, t)| *t != 0).count(),
            total_flow:   totals.iter().map(|(_, t)| t).sum(),
            top_zones:    ranked.into_iter().map(|(c, t)| (c.clone(), t)).collect(),
        }
    }
}

fn row_total(values: &[i64]) -> i64 {
    values.iter().sum()
}
