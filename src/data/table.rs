//! Row-preserving view of parsed sensor data.

use serde::Serialize;

/// Parsed data rows, header excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SensorTable {
    rows: Vec<Vec<f64>>,
}

impl SensorTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of values across all rows.
    pub fn value_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when every row has the same number of fields.
    pub fn is_uniform(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// Shared row width, if rows are uniform and there is at least one.
    pub fn width(&self) -> Option<usize> {
        match self.rows.first() {
            Some(first) if self.is_uniform() => Some(first.len()),
            _ => None,
        }
    }

    /// Concatenate all rows in row-major order.
    pub fn flatten(self) -> Vec<f64> {
        self.rows.into_iter().flatten().collect()
    }

    /// Transpose into columns.
    ///
    /// Ragged rows only contribute to the columns they reach, so columns may
    /// differ in length.
    pub fn columns(&self) -> Vec<Vec<f64>> {
        let max_width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut columns = vec![Vec::with_capacity(self.rows.len()); max_width];

        for row in &self.rows {
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(*value);
            }
        }

        columns
    }
}
