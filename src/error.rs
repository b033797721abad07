//! Error types for tplot operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, configuring or rendering a plot.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (missing file, unreadable stream, failed write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Invalid grid dimensions.
    #[error("Invalid dimensions: {height}x{width}")]
    InvalidDimensions {
        /// Height in rows.
        height: usize,
        /// Width in columns.
        width: usize,
    },

    /// Column index is not a valid 1-based index.
    #[error("Invalid column index {0}: columns are numbered from 1")]
    InvalidColumn(usize),

    /// A row has fewer tokens than a requested column.
    #[error("Line {line}: column {column} requested but the row has only {available} fields")]
    ColumnOutOfRange {
        /// 1-based line number.
        line: usize,
        /// 1-based column index.
        column: usize,
        /// Number of tokens on the row.
        available: usize,
    },

    /// A selected cell is not a finite number.
    #[error("Line {line}, column {column}: cannot parse {token:?} as a number")]
    ParseValue {
        /// 1-based line number.
        line: usize,
        /// 1-based column index.
        column: usize,
        /// The offending token.
        token: String,
    },

    /// Malformed option string (column list, size, legends).
    #[error("Invalid {what} spec {input:?}: {reason}")]
    InvalidSpec {
        /// Which option was malformed.
        what: &'static str,
        /// The raw option value.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Y-axis range with min not strictly below max.
    #[error("Invalid y-range: min ({min}) must be less than max ({max})")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Series of different lengths passed to the renderer.
    #[error("Series {series} has {len} points, expected {expected}")]
    SeriesLengthMismatch {
        /// Index of the offending series.
        series: usize,
        /// Its length.
        len: usize,
        /// Length of the first series.
        expected: usize,
    },

    /// No series provided where at least one is required.
    #[error("Empty data provided: at least one series is required")]
    EmptyData,
}
