//! Rendering of loaded values and statistics for standard output.

use crate::data::SensorTable;
use crate::stats::SeriesStats;
use serde::Serialize;
use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Output format for the loaded data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bracketed list, e.g. `[1.0, 2.0, 3.0]`, using Rust float formatting.
    #[default]
    List,
    /// JSON array.
    Json,
}

/// Shape of the loaded data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Flat(Vec<f64>),
    Rows(SensorTable),
}

impl Values {
    pub fn value_count(&self) -> usize {
        match self {
            Values::Flat(values) => values.len(),
            Values::Rows(table) => table.value_count(),
        }
    }
}

pub fn render_values(values: &Values, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::List => Ok(match values {
            Values::Flat(values) => format!("{values:?}"),
            Values::Rows(table) => format!("{:?}", table.rows()),
        }),
        OutputFormat::Json => Ok(serde_json::to_string(values)?),
    }
}

pub fn render_stats(stats: &[SeriesStats], format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::List => {
            let mut out = String::new();
            for s in stats {
                writeln!(
                    out,
                    "{}: count={} mean={:.6} median={:.6} std={:.6} min={:.6} max={:.6} p05={:.6} p95={:.6}",
                    s.label, s.count, s.mean, s.median, s.std, s.min, s.max, s.p05, s.p95
                )?;
            }
            Ok(out.trim_end().to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string(stats)?),
    }
}
