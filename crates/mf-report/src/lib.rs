//! `mf-report` — per-zone flow report.
//!
//! [`FlowAggregator`] walks a loaded [`FlowNetwork`](mf_network::FlowNetwork)
//! and sums link flows into per-zone metrics:
//!
//! | Link                              | Column                                  |
//! |-----------------------------------|-----------------------------------------|
//! | centroid → boundary `d`           | `juusinkukaku_kansen_{d}`               |
//! | boundary `a` → boundary `b`       | `kyoukaikukaku_kansen_{edge(a)}_{b}`    |
//!
//! where `d`, `b` ∈ `n|s|e|w` and `edge` maps N→`top`, S→`bottom`,
//! E→`right`, W→`left`.  Connectors and boundary → centroid links are not
//! reported.  The [`ColumnTemplate`] fixes which columns appear and in what
//! order; [`CsvReportWriter`] writes the result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mf_report::{ColumnTemplate, CsvReportWriter, FlowAggregator};
//!
//! let template = ColumnTemplate::from_path("template.csv")?;
//! let report = FlowAggregator::new(template).aggregate(&network);
//! CsvReportWriter::create("flows.csv")?.write(&report)?;
//! ```

pub mod aggregator;
pub mod csv;
pub mod error;
pub mod metric;
pub mod report;
pub mod template;


pub use aggregator::{FlowAggregator, NOISE_FLOOR};
pub use csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use metric::Metric;
pub use report::{FlowReport, ReportSummary};
pub use template::{ColumnTemplate, KEY_COLUMN};
