//! Charts module - trend chart rendering

mod renderer;

pub use renderer::{
    ChartError, TrendChartRenderer, ENERGY_CHART_FILE, MAINTENANCE_CHART_FILE, WATER_CHART_FILE,
};
