//! Trend Chart Renderer
//! Renders per-metric time-series line charts, one series per building.

use chrono::NaiveDate;
use plotters::prelude::*;
use polars::prelude::*;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::data::{BUILDING_COLUMN, DATE_COLUMN, ENERGY_COLUMN, MAINTENANCE_COLUMN, WATER_COLUMN};

pub const ENERGY_CHART_FILE: &str = "energy_trend.png";
pub const WATER_CHART_FILE: &str = "water_trend.png";
pub const MAINTENANCE_CHART_FILE: &str = "maintenance_cost_trend.png";

const CHART_SIZE: (u32, u32) = (1000, 500);

/// Series palette, one color per building.
const PALETTE: [RGBColor; 4] = [
    RGBColor(231, 76, 60),  // Red
    RGBColor(52, 152, 219), // Blue
    RGBColor(46, 204, 113), // Green
    RGBColor(243, 156, 18), // Orange
];

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to render {path}: {message}")]
    Render { path: String, message: String },
    #[error("Failed to display chart: {0}")]
    Display(#[from] std::io::Error),
}

/// One metric's chart definition.
struct TrendSpec {
    column: &'static str,
    title: &'static str,
    y_label: &'static str,
    file: &'static str,
}

const TRENDS: [TrendSpec; 3] = [
    TrendSpec {
        column: ENERGY_COLUMN,
        title: "Energy Consumption Over Time",
        y_label: "Energy (kWh)",
        file: ENERGY_CHART_FILE,
    },
    TrendSpec {
        column: WATER_COLUMN,
        title: "Water Usage Over Time",
        y_label: "Water (Liters)",
        file: WATER_CHART_FILE,
    },
    TrendSpec {
        column: MAINTENANCE_COLUMN,
        title: "Maintenance Cost Over Time",
        y_label: "Cost",
        file: MAINTENANCE_CHART_FILE,
    },
];

/// Renders static trend chart images from the merged record table.
pub struct TrendChartRenderer;

impl Default for TrendChartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendChartRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render all three trend charts into the working directory and open
    /// each with the system default image viewer.
    pub fn render_trends(&self, df: &DataFrame) -> Result<(), ChartError> {
        for spec in &TRENDS {
            self.render_metric(df, spec, Path::new(spec.file))?;
            info!("chart saved: {}", spec.file);
            open::that(spec.file)?;
        }
        Ok(())
    }

    fn render_metric(
        &self,
        df: &DataFrame,
        spec: &TrendSpec,
        path: &Path,
    ) -> Result<(), ChartError> {
        let series = Self::trend_series(df, spec.column)?;
        Self::draw(&series, spec, path).map_err(|e| ChartError::Render {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn draw(
        series: &[(String, Vec<(NaiveDate, f64)>)],
        spec: &TrendSpec,
        path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (x_range, y_range) = Self::axis_ranges(series);

        let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(spec.title, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(spec.y_label)
            .x_labels(8)
            .draw()?;

        for (i, (building, points)) in series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(2),
                ))?
                .label(format!("Building {building}"))
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
            chart.draw_series(points.iter().map(|p| Circle::new(*p, 3, color.filled())))?;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Per-building (date, value) series, building labels sorted.
    fn trend_series(
        df: &DataFrame,
        column: &str,
    ) -> Result<Vec<(String, Vec<(NaiveDate, f64)>)>, ChartError> {
        let mut series = Vec::new();

        for building in Self::building_labels(df)? {
            let subset = df
                .clone()
                .lazy()
                .filter(col(BUILDING_COLUMN).eq(lit(building.as_str())))
                .collect()?;

            let dates: Vec<Option<NaiveDate>> = subset
                .column(DATE_COLUMN)?
                .as_materialized_series()
                .date()?
                .as_date_iter()
                .collect();
            let values = subset.column(column)?.f64()?;

            let points: Vec<(NaiveDate, f64)> = dates
                .into_iter()
                .zip(values.into_iter())
                .filter_map(|(date, value)| Some((date?, value?)))
                .collect();

            series.push((building, points));
        }

        Ok(series)
    }

    fn building_labels(df: &DataFrame) -> Result<Vec<String>, ChartError> {
        let unique = df.column(BUILDING_COLUMN)?.unique()?;
        let mut labels: Vec<String> = unique
            .as_materialized_series()
            .iter()
            .filter_map(|v| {
                if v.is_null() {
                    None
                } else {
                    Some(v.to_string().trim_matches('"').to_string())
                }
            })
            .collect();
        labels.sort();
        Ok(labels)
    }

    fn axis_ranges(
        series: &[(String, Vec<(NaiveDate, f64)>)],
    ) -> (Range<NaiveDate>, Range<f64>) {
        let mut min_date: Option<NaiveDate> = None;
        let mut max_date: Option<NaiveDate> = None;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for (_, points) in series {
            for &(date, value) in points {
                min_date = Some(min_date.map_or(date, |d| d.min(date)));
                max_date = Some(max_date.map_or(date, |d| d.max(date)));
                if !value.is_nan() {
                    y_min = y_min.min(value);
                    y_max = y_max.max(value);
                }
            }
        }

        let start = min_date.unwrap_or_default();
        let mut end = max_date.unwrap_or(start);
        if end <= start {
            // a degenerate span still needs a drawable axis
            end = start + chrono::Duration::days(1);
        }

        if y_min.is_infinite() {
            return (start..end, 0.0..100.0);
        }

        let pad = ((y_max - y_min) * 0.15).max(1.0);
        (start..end, (y_min - pad).floor()..(y_max + pad).ceil())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataCleaner;

    fn labeled(df: DataFrame, label: &str) -> DataFrame {
        df.lazy()
            .with_column(lit(label).alias(BUILDING_COLUMN))
            .collect()
            .unwrap()
    }

    fn merged_frame() -> DataFrame {
        let cleaner = DataCleaner::new();

        let a = df!(
            DATE_COLUMN => &["2023-01-01", "2023-01-02"],
            ENERGY_COLUMN => &[100.0, 120.0],
            WATER_COLUMN => &[500.0, 510.0],
            MAINTENANCE_COLUMN => &[20.0, 22.0],
        )
        .unwrap();
        let b = df!(
            DATE_COLUMN => &["2023-01-01"],
            ENERGY_COLUMN => &[150.0],
            WATER_COLUMN => &[600.0],
            MAINTENANCE_COLUMN => &[30.0],
        )
        .unwrap();

        let a = labeled(cleaner.clean(a).unwrap(), "A");
        let b = labeled(cleaner.clean(b).unwrap(), "B");
        a.vstack(&b).unwrap()
    }

    #[test]
    fn series_split_by_building_label() {
        let series = TrendChartRenderer::trend_series(&merged_frame(), ENERGY_COLUMN).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "A");
        assert_eq!(series[1].0, "B");
        assert_eq!(series[0].1.len(), 2);
        assert_eq!(series[1].1.len(), 1);
        assert_eq!(series[1].1[0].1, 150.0);
    }

    #[test]
    fn axis_ranges_cover_and_pad_the_data() {
        let series = TrendChartRenderer::trend_series(&merged_frame(), ENERGY_COLUMN).unwrap();
        let (x_range, y_range) = TrendChartRenderer::axis_ranges(&series);

        assert_eq!(
            x_range.start,
            chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert!(x_range.end > x_range.start);
        assert!(y_range.start < 100.0);
        assert!(y_range.end > 150.0);
    }

    #[test]
    fn axis_ranges_fall_back_without_points() {
        let (x_range, y_range) = TrendChartRenderer::axis_ranges(&[]);

        assert!(x_range.end > x_range.start);
        assert_eq!(y_range, 0.0..100.0);
    }
}
