//! Summary Exporter Module
//! Writes the computed summary metrics to a flat text report.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::stats::SummaryStats;

pub const SUMMARY_REPORT_FILE: &str = "summary_report.txt";

const REPORT_TITLE: &str = "BUILDING UTILITY SUMMARY REPORT";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the summary mapping as `key: value` lines under a fixed banner.
pub struct SummaryExporter;

impl Default for SummaryExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export to the fixed report path, replacing any previous report.
    pub fn export(&self, summary: &SummaryStats) -> Result<(), ReportError> {
        self.export_to(summary, Path::new(SUMMARY_REPORT_FILE))?;
        info!("summary saved: {SUMMARY_REPORT_FILE}");
        Ok(())
    }

    /// Export to an arbitrary path, overwriting whatever is there.
    pub fn export_to(&self, summary: &SummaryStats, path: &Path) -> Result<(), ReportError> {
        fs::write(path, Self::render(summary))?;
        Ok(())
    }

    fn render(summary: &SummaryStats) -> String {
        let mut text = String::new();
        text.push_str(REPORT_TITLE);
        text.push('\n');
        text.push_str(&"=".repeat(REPORT_TITLE.len()));
        text.push_str("\n\n");
        for (key, value) in summary.entries() {
            text.push_str(&format!("{key}: {value:.2}\n"));
        }
        text
    }
}
