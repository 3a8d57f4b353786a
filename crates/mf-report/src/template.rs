//! Output column layout.

use std::io::Read;
use std::path::Path;

use mf_core::Direction;

use crate::{Metric, ReportResult};

/// Name of the zone-code column.
pub const KEY_COLUMN: &str = "key_code";

/// Ordered output columns, key column included.
///
/// Columns that do not name a [`Metric`] are kept and report 0.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnTemplate {
    columns: Vec<String>,
}

impl ColumnTemplate {
    /// Use `columns` as given; [`KEY_COLUMN`] is prepended when absent.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if !columns.iter().any(|c| c == KEY_COLUMN) {
            columns.insert(0, KEY_COLUMN.to_owned());
        }
        Self { columns }
    }

    /// Read the header row of a template CSV.  Data rows are ignored.
    pub fn from_csv_header<R: Read>(reader: R) -> ReportResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers()?;
        Ok(Self::new(headers.iter().map(str::trim)))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReportResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_header(file)
    }

    /// All columns in output order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns other than the key, each with its parsed metric.
    pub(crate) fn value_columns(&self) -> impl Iterator<Item = (&str, Option<Metric>)> {
        self.columns
            .iter()
            .filter(|c| *c != KEY_COLUMN)
            .map(|c| (c.as_str(), Metric::parse(c)))
    }
}

impl Default for ColumnTemplate {
    /// `key_code` plus the four centroid-out columns.
    fn default() -> Self {
        Self::new(
            std::iter::once(KEY_COLUMN.to_owned())
                .chain(Direction::ALL.into_iter().map(|d| Metric::CentroidOut(d).column_name())),
        )
    }
}
