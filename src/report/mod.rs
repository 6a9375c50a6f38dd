//! Report module - summary text export

mod exporter;

pub use exporter::{ReportError, SummaryExporter, SUMMARY_REPORT_FILE};
