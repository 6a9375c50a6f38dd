//! CSV Data Loader Module
//! Handles per-building CSV file loading using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a CSV file using Polars.
    ///
    /// A missing file is reported and yields an empty frame so the caller
    /// decides whether the run continues. Malformed content is an error.
    pub fn load_csv(&self, file_path: &str) -> Result<DataFrame, LoaderError> {
        if !Path::new(file_path).exists() {
            error!("file not found: {file_path}");
            return Ok(DataFrame::empty());
        }

        // Lazy scan for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        info!("loaded {file_path} ({} rows)", df.height());
        Ok(df)
    }
}
