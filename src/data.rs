//! Column loader for whitespace-delimited numeric text.
//!
//! Rows are read in order and the selected columns are transposed into a
//! series-major [`SeriesMatrix`]: series `s` holds the values of the `s`-th
//! selected column, point `i` comes from the `i`-th row.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validated 1-based column selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<usize>,
    label_column: Option<usize>,
}

impl ColumnSelection {
    /// Select the given 1-based value columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains 0.
    pub fn new(columns: Vec<usize>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::EmptyData);
        }
        if let Some(&bad) = columns.iter().find(|&&c| c == 0) {
            return Err(Error::InvalidColumn(bad));
        }
        Ok(Self { columns, label_column: None })
    }

    /// Also read per-point labels from a 1-based column.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` is 0.
    pub fn with_labels(mut self, column: usize) -> Result<Self> {
        if column == 0 {
            return Err(Error::InvalidColumn(column));
        }
        self.label_column = Some(column);
        Ok(self)
    }

    /// Selected value columns (1-based).
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Label column (1-based), if any.
    #[must_use]
    pub const fn label_column(&self) -> Option<usize> {
        self.label_column
    }
}

/// Rectangular series-major matrix of plot values.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMatrix {
    series: Vec<Vec<f64>>,
}

impl SeriesMatrix {
    /// Build a matrix from per-series value vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no series or their lengths differ.
    pub fn from_series(series: Vec<Vec<f64>>) -> Result<Self> {
        let expected = series.first().ok_or(Error::EmptyData)?.len();
        if let Some((idx, s)) = series.iter().enumerate().find(|(_, s)| s.len() != expected) {
            return Err(Error::SeriesLengthMismatch { series: idx, len: s.len(), expected });
        }
        Ok(Self { series })
    }

    /// Number of series (S).
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Number of points per series (P).
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Values of one series.
    #[must_use]
    pub fn series(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    /// Iterate over series in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(Vec::as_slice)
    }

    /// Minimum and maximum over every value, or `None` when there are no points.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut values = self.series.iter().flatten().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

/// Values plus optional per-point labels.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Series-major values.
    pub matrix: SeriesMatrix,
    /// One label per point when a label column was selected.
    pub labels: Option<Vec<String>>,
}

/// Where the input rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (borrowed, never closed by the loader).
    Stdin,
    /// A file opened and closed by the loader.
    File(PathBuf),
}

impl InputSource {
    /// Interpret an optional path argument; absent or `-` means standard input.
    #[must_use]
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            None => Self::Stdin,
            Some(p) if p.as_os_str() == "-" => Self::Stdin,
            Some(p) => Self::File(p.to_path_buf()),
        }
    }

    /// Read and parse the selected columns from this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a row is malformed.
    pub fn load(&self, selection: &ColumnSelection) -> Result<DataSet> {
        match self {
            Self::Stdin => load(io::stdin().lock(), selection),
            Self::File(path) => {
                let file = File::open(path)?;
                load(BufReader::new(file), selection)
            }
        }
    }
}

/// Parse the selected columns of every row read from `reader`.
///
/// # Errors
///
/// Fails on the first row that is too short for a selected column, or whose
/// selected cell is not a finite number. Read errors are propagated.
///
/// # Example
///
/// ```
/// use tplot::data::{load, ColumnSelection};
///
/// let selection = ColumnSelection::new(vec![1, 2]).unwrap();
/// let data = load("1 2\n3 4\n".as_bytes(), &selection).unwrap();
/// assert_eq!(data.matrix.series(0), Some(&[1.0, 3.0][..]));
/// assert_eq!(data.matrix.series(1), Some(&[2.0, 4.0][..]));
/// ```
pub fn load<R: BufRead>(reader: R, selection: &ColumnSelection) -> Result<DataSet> {
    let mut series: Vec<Vec<f64>> = vec![Vec::new(); selection.columns.len()];
    let mut labels = selection.label_column.map(|_| Vec::new());

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        for (values, &column) in series.iter_mut().zip(&selection.columns) {
            let token = field(&tokens, column, line_no)?;
            values.push(parse_value(token, column, line_no)?);
        }

        if let (Some(labels), Some(column)) = (labels.as_mut(), selection.label_column) {
            labels.push(field(&tokens, column, line_no)?.to_string());
        }
    }

    let matrix = SeriesMatrix::from_series(series)?;
    debug!(
        series = matrix.series_count(),
        points = matrix.point_count(),
        labelled = labels.is_some(),
        "loaded input"
    );
    Ok(DataSet { matrix, labels })
}

fn field<'a>(tokens: &[&'a str], column: usize, line: usize) -> Result<&'a str> {
    tokens
        .get(column - 1)
        .copied()
        .ok_or(Error::ColumnOutOfRange { line, column, available: tokens.len() })
}

fn parse_value(token: &str, column: usize, line: usize) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::ParseValue { line, column, token: token.to_string() }),
    }
}
