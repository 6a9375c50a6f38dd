//! Pipeline Orchestration
//! Sequences loading, cleaning, merging, aggregation and reporting for the
//! fixed set of building data sources.

use anyhow::Result;
use polars::prelude::*;
use tracing::{error, info};

use crate::charts::TrendChartRenderer;
use crate::data::{DataCleaner, DataLoader, BUILDING_COLUMN};
use crate::report::SummaryExporter;
use crate::stats::SummaryCalculator;

pub const BUILDING_A_CSV: &str = "BuildingA.csv";
pub const BUILDING_B_CSV: &str = "BuildingB.csv";
// Optional third source, not wired into the run:
// pub const BUILDING_C_CSV: &str = "BuildingC.csv";

/// Run the full batch report over the two building sources.
///
/// An absent or empty source ends the run early with an error message but
/// a success exit, matching the historical behavior of this report.
pub fn run() -> Result<()> {
    info!("starting building utility report");

    let loader = DataLoader::new();
    let cleaner = DataCleaner::new();

    let raw_a = loader.load_csv(BUILDING_A_CSV)?;
    let raw_b = loader.load_csv(BUILDING_B_CSV)?;

    if raw_a.is_empty() || raw_b.is_empty() {
        error!("one or more CSV files could not be loaded, exiting");
        return Ok(());
    }

    let clean_a = cleaner.clean(raw_a)?;
    let clean_b = cleaner.clean(raw_b)?;

    let labeled_a = label_building(clean_a, "A")?;
    let labeled_b = label_building(clean_b, "B")?;
    let merged = merge_sources(&labeled_a, &labeled_b)?;

    let summary = SummaryCalculator::compute_summary(&merged)?;
    info!("summary: {summary:?}");

    TrendChartRenderer::new().render_trends(&merged)?;
    SummaryExporter::new().export(&summary)?;

    info!("report complete");
    Ok(())
}

/// Attach the label column distinguishing the data source a row came from.
pub fn label_building(df: DataFrame, label: &str) -> Result<DataFrame, PolarsError> {
    df.lazy()
        .with_column(lit(label).alias(BUILDING_COLUMN))
        .collect()
}

/// Concatenate two sources into one table, first source's rows first.
pub fn merge_sources(a: &DataFrame, b: &DataFrame) -> Result<DataFrame, PolarsError> {
    a.vstack(b)
}
