//! Building utility CSV analysis and trend report generation.
//!
//! Batch pipeline over per-building utility records: load CSVs, clean and
//! merge them, compute summary statistics, render trend charts and export
//! a flat-text report.

pub mod charts;
pub mod data;
pub mod pipeline;
pub mod report;
pub mod stats;
