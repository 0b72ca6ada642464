//! Statistics Calculator Module
//! Descriptive statistics over loaded sensor values.

use crate::data::SensorTable;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};

/// Label used for the flat series of all values.
pub const ALL_VALUES_LABEL: &str = "all";

/// Descriptive statistics for one series of values.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesStats {
    pub label: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub p05: f64,
    pub p95: f64,
}

impl Default for SeriesStats {
    fn default() -> Self {
        Self {
            label: String::new(),
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            variance: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
            p05: f64::NAN,
            p95: f64::NAN,
        }
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(label: &str, values: &[f64]) -> SeriesStats {
        let n = values.len();
        if n == 0 {
            return SeriesStats {
                label: label.to_string(),
                ..SeriesStats::default()
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        // statrs reports NaN for the sample variance of a single value
        let variance = if n > 1 { values.variance() } else { 0.0 };

        SeriesStats {
            label: label.to_string(),
            count: n,
            mean: values.mean(),
            median: Data::new(values.to_vec()).median(),
            std: variance.sqrt(),
            variance,
            min: values.min(),
            max: values.max(),
            p05: Self::percentile(&sorted, 5.0),
            p95: Self::percentile(&sorted, 95.0),
        }
    }

    /// Statistics for every column of the table, labelled `col0`, `col1`, ...
    pub fn compute_column_stats(table: &SensorTable) -> Vec<SeriesStats> {
        table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| Self::compute_descriptive_stats(&format!("col{i}"), column))
            .collect()
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    ///
    /// statrs' `OrderStatistics::percentile` uses a different estimator, so
    /// p05/p95 are interpolated here.
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }
}
