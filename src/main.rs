//! Utility Report - Building Utility CSV Analysis & Trend Reports
//!
//! A Rust tool for analyzing per-building utility CSV data and generating
//! trend charts plus a flat-text summary report.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use utility_report::pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    pipeline::run()
}
