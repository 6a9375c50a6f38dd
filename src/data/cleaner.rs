//! Data Cleaner Module
//! Date normalization, mean imputation and sorting of raw building records.

use polars::prelude::*;
use thiserror::Error;

use crate::data::{DATE_COLUMN, NUMERIC_COLUMNS};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles cleaning of raw per-building record tables.
pub struct DataCleaner;

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw record table.
    ///
    /// Date values that fail to parse become null and their rows are
    /// dropped. Missing numeric values are imputed with the column mean
    /// over the values that were originally present; all means are taken
    /// before any column is filled. Rows come out in ascending date order,
    /// stable for ties.
    pub fn clean(&self, df: DataFrame) -> Result<DataFrame, CleanerError> {
        let dated = df
            .lazy()
            .with_column(col(DATE_COLUMN).str().to_date(StrptimeOptions {
                strict: false,
                ..Default::default()
            }))
            .filter(col(DATE_COLUMN).is_not_null())
            .collect()?;

        let mut imputed = Vec::with_capacity(NUMERIC_COLUMNS.len());
        for name in NUMERIC_COLUMNS {
            let values = dated.column(name)?.cast(&DataType::Float64)?;
            let mean = values.f64()?.mean().unwrap_or(f64::NAN);
            imputed.push(col(name).cast(DataType::Float64).fill_null(lit(mean)));
        }

        let cleaned = dated
            .lazy()
            .with_columns(imputed)
            .sort(
                [DATE_COLUMN],
                SortMultipleOptions::default().with_maintain_order(true),
            )
            .collect()?;

        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ENERGY_COLUMN, MAINTENANCE_COLUMN, WATER_COLUMN};
    use chrono::NaiveDate;

    fn raw_frame() -> DataFrame {
        df!(
            DATE_COLUMN => &["2023-01-02", "not-a-date", "2023-01-01"],
            ENERGY_COLUMN => &[Some(120.0), Some(90.0), None],
            WATER_COLUMN => &[Some(510.0), None, Some(500.0)],
            MAINTENANCE_COLUMN => &[22.0, 19.0, 20.0],
        )
        .unwrap()
    }

    #[test]
    fn drops_rows_with_unparseable_dates() {
        let cleaned = DataCleaner::new().clean(raw_frame()).unwrap();

        assert_eq!(cleaned.height(), 2);
        assert_eq!(cleaned.column(DATE_COLUMN).unwrap().null_count(), 0);
    }

    #[test]
    fn imputes_missing_values_with_column_mean() {
        let cleaned = DataCleaner::new().clean(raw_frame()).unwrap();

        // The only surviving row with a present energy value reads 120, so
        // the imputed value on the other row must also be 120.
        let energy = cleaned.column(ENERGY_COLUMN).unwrap().f64().unwrap();
        assert_eq!(energy.null_count(), 0);
        assert_eq!(energy.get(0), Some(120.0));
        assert_eq!(energy.get(1), Some(120.0));

        let water = cleaned.column(WATER_COLUMN).unwrap().f64().unwrap();
        assert_eq!(water.null_count(), 0);
    }

    #[test]
    fn sorts_ascending_by_date() {
        let cleaned = DataCleaner::new().clean(raw_frame()).unwrap();

        let dates: Vec<NaiveDate> = cleaned
            .column(DATE_COLUMN)
            .unwrap()
            .as_materialized_series()
            .date()
            .unwrap()
            .as_date_iter()
            .flatten()
            .collect();

        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let df = df!(
            DATE_COLUMN => &["2023-01-01", "2023-01-01", "2023-01-01"],
            ENERGY_COLUMN => &[1.0, 2.0, 3.0],
            WATER_COLUMN => &[10.0, 20.0, 30.0],
            MAINTENANCE_COLUMN => &[0.1, 0.2, 0.3],
        )
        .unwrap();

        let cleaned = DataCleaner::new().clean(df).unwrap();
        let energy = cleaned.column(ENERGY_COLUMN).unwrap().f64().unwrap();

        assert_eq!(energy.get(0), Some(1.0));
        assert_eq!(energy.get(1), Some(2.0));
        assert_eq!(energy.get(2), Some(3.0));
    }

    #[test]
    fn never_adds_rows() {
        let raw = raw_frame();
        let input_height = raw.height();
        let cleaned = DataCleaner::new().clean(raw).unwrap();

        assert!(cleaned.height() <= input_height);
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let df = df!(
            ENERGY_COLUMN => &[100.0],
            WATER_COLUMN => &[500.0],
            MAINTENANCE_COLUMN => &[20.0],
        )
        .unwrap();

        assert!(DataCleaner::new().clean(df).is_err());
    }
}
