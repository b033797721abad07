//! Plot configuration.
//!
//! Precedence: CLI > config file > defaults. Option strings (`-k`, `-s`, `-y`,
//! `-l`) are parsed here so malformed values fail before any input is read.

use crate::data::SeriesMatrix;
use crate::error::{Error, Result};
use crate::grid::check_dimensions;
use crate::output::ColorMode;
use crate::plots::{ScatterPlot, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::scale::check_range;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional YAML defaults file.
///
/// ```yaml
/// height: 20
/// width: 80
/// y_range: [-1.0, 1.0]
/// color: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Grid height in rows.
    pub height: Option<usize>,
    /// Grid width in columns.
    pub width: Option<usize>,
    /// Y-axis range override as `[min, max]`.
    pub y_range: Option<(f64, f64)>,
    /// Emit ANSI colors.
    pub color: Option<bool>,
}

impl FileConfig {
    /// Load from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or unknown keys.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }
}

/// Resolved rendering configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Grid height in rows.
    pub height: usize,
    /// Grid width in columns.
    pub width: usize,
    /// Y-axis range override.
    pub y_range: Option<(f64, f64)>,
    /// Legend texts; `None` means `Series N` defaults.
    pub legends: Option<Vec<String>>,
    /// Output color mode.
    pub color: ColorMode,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            y_range: None,
            legends: None,
            color: ColorMode::Ansi,
        }
    }
}

impl PlotConfig {
    /// Layer a config file over the current values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file holds a zero or oversized dimension or an
    /// invalid range.
    pub fn with_file(mut self, file: &FileConfig) -> Result<Self> {
        if let Some(height) = file.height {
            self.height = height;
        }
        if let Some(width) = file.width {
            self.width = width;
        }
        check_dimensions(self.height, self.width)?;
        if let Some((min, max)) = file.y_range {
            self.y_range = Some(check_range(min, max)?);
        }
        if let Some(color) = file.color {
            self.color = if color { ColorMode::Ansi } else { ColorMode::Plain };
        }
        Ok(self)
    }

    /// Apply a `H` or `H,W` size spec.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is malformed.
    pub fn with_size_spec(mut self, spec: &str) -> Result<Self> {
        let (height, width) = parse_size(spec)?;
        self.height = height;
        if let Some(width) = width {
            self.width = width;
        }
        Ok(self)
    }

    /// Apply a `min,max` y-range spec.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is malformed or `min >= max`.
    pub fn with_range_spec(mut self, spec: &str) -> Result<Self> {
        self.y_range = Some(parse_range(spec)?);
        Ok(self)
    }

    /// Apply a comma-separated legend spec. An empty spec keeps the defaults.
    #[must_use]
    pub fn with_legend_spec(mut self, spec: &str) -> Self {
        if !spec.is_empty() {
            self.legends = Some(parse_legends(spec));
        }
        self
    }

    /// Set the color mode.
    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Legend texts for `series_count` series.
    #[must_use]
    pub fn legends_for(&self, series_count: usize) -> Vec<String> {
        self.legends.clone().unwrap_or_else(|| default_legends(series_count))
    }

    /// Scatter plot builder for a loaded matrix.
    #[must_use]
    pub fn scatter(&self, matrix: &SeriesMatrix) -> ScatterPlot {
        let plot = ScatterPlot::new()
            .matrix(matrix)
            .size(self.height, self.width)
            .legends(self.legends_for(matrix.series_count()));
        match self.y_range {
            Some((min, max)) => plot.y_range(min, max),
            None => plot,
        }
    }
}

/// Parse a comma-separated list of 1-based column indices.
///
/// # Errors
///
/// Returns an error for empty items, non-integers or 0.
pub fn parse_columns(spec: &str) -> Result<Vec<usize>> {
    spec.split(',')
        .map(|item| {
            let item = item.trim();
            match item.parse::<usize>() {
                Ok(0) => Err(Error::InvalidColumn(0)),
                Ok(col) => Ok(col),
                Err(e) => Err(invalid("column", spec, format!("{item:?}: {e}"))),
            }
        })
        .collect()
}

/// Parse `H` or `H,W` into a height and optional width.
///
/// # Errors
///
/// Returns an error for non-integers, zeros, more than two parts, or a size
/// beyond [`MAX_DIMENSION`](crate::grid::MAX_DIMENSION).
pub fn parse_size(spec: &str) -> Result<(usize, Option<usize>)> {
    let parts = spec
        .split(',')
        .map(|item| {
            let item = item.trim();
            match item.parse::<usize>() {
                Ok(0) => Err(invalid("size", spec, "dimensions must be positive".to_string())),
                Ok(n) => Ok(n),
                Err(e) => Err(invalid("size", spec, format!("{item:?}: {e}"))),
            }
        })
        .collect::<Result<Vec<usize>>>()?;

    let (height, width) = match parts.as_slice() {
        [height] => (*height, None),
        [height, width] => (*height, Some(*width)),
        _ => return Err(invalid("size", spec, "expected H or H,W".to_string())),
    };
    check_dimensions(height, width.unwrap_or(DEFAULT_WIDTH))?;
    Ok((height, width))
}

/// Parse `min,max` into a validated range.
///
/// # Errors
///
/// Returns an error for anything but two finite numbers with `min < max`.
pub fn parse_range(spec: &str) -> Result<(f64, f64)> {
    let parts = spec
        .split(',')
        .map(|item| {
            let item = item.trim();
            item.parse::<f64>().map_err(|e| invalid("y-range", spec, format!("{item:?}: {e}")))
        })
        .collect::<Result<Vec<f64>>>()?;

    match parts.as_slice() {
        [min, max] => check_range(*min, *max),
        _ => Err(invalid("y-range", spec, "expected min,max".to_string())),
    }
}

/// Split a comma-separated legend spec verbatim.
#[must_use]
pub fn parse_legends(spec: &str) -> Vec<String> {
    spec.split(',').map(str::to_string).collect()
}

/// `Series 1`, `Series 2`, ...
#[must_use]
pub fn default_legends(series_count: usize) -> Vec<String> {
    (1..=series_count).map(|i| format!("Series {i}")).collect()
}

fn invalid(what: &'static str, input: &str, reason: String) -> Error {
    Error::InvalidSpec { what, input: input.to_string(), reason }
}
