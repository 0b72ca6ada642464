//! CSV Data Loader Module
//! Reads a sensor CSV file and parses its data rows into floating-point values.

use super::table::SensorTable;
use std::borrow::Cow;
use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File loaded when no path is given.
pub const DEFAULT_PATH: &str = "active.csv";

/// Number of leading lines treated as a header.
const HEADER_LINES: usize = 1;

const DELIMITER: char = ',';

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid number {field:?} at line {line}, column {column}: {source}")]
    Parse {
        line: usize,
        column: usize,
        field: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Loads numeric sensor data from a CSV file with one header row.
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl DataLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file as one flat, row-major sequence of values.
    pub fn load(&self) -> Result<Vec<f64>, LoaderError> {
        let text = Self::read(&self.path)?;
        Self::parse(&text)
    }

    /// Load the file keeping one entry per data row.
    pub fn load_rows(&self) -> Result<SensorTable, LoaderError> {
        let text = Self::read(&self.path)?;
        Self::parse_rows(&text)
    }

    /// Read the full contents of `path`.
    pub fn read(path: &Path) -> Result<String, LoaderError> {
        debug!(path = %path.display(), "reading CSV file");
        fs::read_to_string(path).map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse CSV text into a flat sequence, dropping the header line.
    pub fn parse(text: &str) -> Result<Vec<f64>, LoaderError> {
        Self::parse_rows(text).map(SensorTable::flatten)
    }

    /// Parse CSV text into rows of values, dropping the header line.
    ///
    /// The first failing field aborts the whole parse.
    pub fn parse_rows(text: &str) -> Result<SensorTable, LoaderError> {
        let mut rows = Vec::new();

        for (index, line) in split_lines(text).enumerate().skip(HEADER_LINES) {
            let row = line
                .split(DELIMITER)
                .enumerate()
                .map(|(column, field)| Self::parse_field(field, index + 1, column))
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(row);
        }

        let table = SensorTable::new(rows);
        if !table.is_uniform() {
            warn!(rows = table.row_count(), "CSV rows have differing field counts");
        }
        debug!(
            rows = table.row_count(),
            values = table.value_count(),
            "parsed CSV data"
        );
        Ok(table)
    }

    // Surrounding whitespace and `_` between digits are tolerated, anything else
    // must be a float literal.
    fn parse_field(field: &str, line: usize, column: usize) -> Result<f64, LoaderError> {
        strip_digit_separators(field.trim())
            .parse::<f64>()
            .map_err(|source| LoaderError::Parse {
                line,
                column,
                field: field.to_string(),
                source,
            })
    }
}

/// Split on `\n`, `\r\n` and a lone `\r`. A trailing line break does not
/// produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let break_len = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + break_len..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Remove `_` digit separators such as `1_000`. Misplaced underscores are
/// left in so the field fails to parse.
fn strip_digit_separators(field: &str) -> Cow<'_, str> {
    if !field.contains('_') {
        return Cow::Borrowed(field);
    }
    let bytes = field.as_bytes();
    let between_digits = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if between_digits {
        Cow::Owned(field.replace('_', ""))
    } else {
        Cow::Borrowed(field)
    }
}
