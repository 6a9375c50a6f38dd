//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanerError, DataCleaner};
pub use loader::{DataLoader, LoaderError};

/// Date column shared by every source file.
pub const DATE_COLUMN: &str = "Date";

/// Metric columns expected in every source file.
pub const ENERGY_COLUMN: &str = "Energy_Consumption_kWh";
pub const WATER_COLUMN: &str = "Water_Usage_Liters";
pub const MAINTENANCE_COLUMN: &str = "Maintenance_Cost";

/// Label column attached after cleaning; never present in source data.
pub const BUILDING_COLUMN: &str = "Building";

/// The numeric columns subject to mean imputation.
pub const NUMERIC_COLUMNS: [&str; 3] = [ENERGY_COLUMN, WATER_COLUMN, MAINTENANCE_COLUMN];
