//! Summary Statistics Module
//! Aggregate statistics over the merged building records.

use polars::prelude::*;
use thiserror::Error;

use crate::data::{ENERGY_COLUMN, MAINTENANCE_COLUMN, WATER_COLUMN};

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Seven scalar statistics over the merged table, all buildings combined.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_energy: f64,
    pub avg_energy: f64,
    pub max_energy: f64,
    pub total_water: f64,
    pub avg_water: f64,
    pub total_maintenance_cost: f64,
    pub avg_maintenance_cost: f64,
}

impl SummaryStats {
    /// Metric name/value pairs in report order.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("total_energy", self.total_energy),
            ("avg_energy", self.avg_energy),
            ("max_energy", self.max_energy),
            ("total_water", self.total_water),
            ("avg_water", self.avg_water),
            ("total_maintenance_cost", self.total_maintenance_cost),
            ("avg_maintenance_cost", self.avg_maintenance_cost),
        ]
    }
}

/// Handles aggregate statistics over cleaned, merged record tables.
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// Compute the seven summary metrics over the full population.
    ///
    /// A frame with zero rows yields zero sums and NaN averages; the
    /// orchestrator's emptiness guard runs before this point.
    pub fn compute_summary(df: &DataFrame) -> Result<SummaryStats, StatsError> {
        let energy = Self::metric_values(df, ENERGY_COLUMN)?;
        let water = Self::metric_values(df, WATER_COLUMN)?;
        let maintenance = Self::metric_values(df, MAINTENANCE_COLUMN)?;

        Ok(SummaryStats {
            total_energy: energy.sum().unwrap_or(0.0),
            avg_energy: energy.mean().unwrap_or(f64::NAN),
            max_energy: energy.max().unwrap_or(f64::NAN),
            total_water: water.sum().unwrap_or(0.0),
            avg_water: water.mean().unwrap_or(f64::NAN),
            total_maintenance_cost: maintenance.sum().unwrap_or(0.0),
            avg_maintenance_cost: maintenance.mean().unwrap_or(f64::NAN),
        })
    }

    fn metric_values(df: &DataFrame, name: &str) -> Result<Float64Chunked, StatsError> {
        let values = df.column(name)?.cast(&DataType::Float64)?;
        Ok(values.f64()?.clone())
    }
}
