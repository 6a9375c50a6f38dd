//! Statistics module - summary aggregation

mod calculator;

pub use calculator::{StatsError, SummaryCalculator, SummaryStats};
