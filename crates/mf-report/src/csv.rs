//! CSV output backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::{FlowReport, KEY_COLUMN, ReportResult};

/// Writes a [`FlowReport`] as one CSV table in template column order.
pub struct CsvReportWriter<W: Write> {
    out: Writer<W>,
}

impl CsvReportWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> ReportResult<Self> {
        Ok(Self { out: Writer::from_path(path)? })
    }
}

impl<W: Write> CsvReportWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self { out: Writer::from_writer(writer) }
    }

    /// Write the header and every row, then flush.
    pub fn write(&mut self, report: &FlowReport) -> ReportResult<()> {
        self.out.write_record(report.columns())?;

        for (code, values) in report.rows() {
            let mut values = values.iter();
            let record: Vec<String> = report
                .columns()
                .iter()
                .map(|c| {
                    if c == KEY_COLUMN {
                        code.to_string()
                    } else {
                        values.next().map_or_else(String::new, i64::to_string)
                    }
                })
                .collect();
            self.out.write_record(&record)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> ReportResult<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}
