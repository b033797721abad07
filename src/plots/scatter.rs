//! Character-grid scatter plot.
//!
//! Every series shares one vertical scale. The horizontal position of a point
//! is its index, mapped over `[0, P - 1]` onto the grid width. Series are drawn
//! in index order on top of an optional zero line; a cell hit a second time
//! shows the collision marker in the color of the last series to hit it.

use crate::color::{palette_color, Color};
use crate::data::SeriesMatrix;
use crate::error::{Error, Result};
use crate::grid::{check_dimensions, Cell, Grid, BLANK, COLLISION, DASH, MARKER};
use crate::scale::{check_range, linspace, GridScale};
use tracing::{debug, warn};

/// Default grid height in rows.
pub const DEFAULT_HEIGHT: usize = 13;
/// Default grid width in columns.
pub const DEFAULT_WIDTH: usize = 100;
/// Maximum number of x-axis tick labels.
pub const MAX_X_LABELS: usize = 10;

/// Builder for terminal scatter plots.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    series: Vec<Vec<f64>>,
    height: usize,
    width: usize,
    y_range: Option<(f64, f64)>,
    legends: Vec<String>,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterPlot {
    /// Create a new scatter plot builder with the default 13x100 grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            y_range: None,
            legends: Vec::new(),
        }
    }

    /// Append one series.
    #[must_use]
    pub fn series(mut self, values: &[f64]) -> Self {
        self.series.push(values.to_vec());
        self
    }

    /// Append every series of a loaded matrix.
    #[must_use]
    pub fn matrix(mut self, matrix: &SeriesMatrix) -> Self {
        self.series.extend(matrix.iter().map(<[f64]>::to_vec));
        self
    }

    /// Set the grid size in rows and columns.
    #[must_use]
    pub fn size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Override the data-derived vertical bounds.
    #[must_use]
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    /// Set legend texts, one per series. An empty list hides the legend.
    #[must_use]
    pub fn legends<I, S>(mut self, legends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legends = legends.into_iter().map(Into::into).collect();
        self
    }

    /// Validate and freeze the plot.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no series, the series lengths differ, a
    /// dimension is zero or too large, or the y-range is not finite with
    /// `min < max`.
    pub fn build(self) -> Result<BuiltScatterPlot> {
        check_dimensions(self.height, self.width)?;

        if let Some((min, max)) = self.y_range {
            check_range(min, max)?;
        }

        let matrix = SeriesMatrix::from_series(self.series)?;

        if !self.legends.is_empty() && self.legends.len() != matrix.series_count() {
            warn!(
                legends = self.legends.len(),
                series = matrix.series_count(),
                "legend count does not match series count"
            );
        }

        Ok(BuiltScatterPlot {
            matrix,
            height: self.height,
            width: self.width,
            y_range: self.y_range,
            legends: self.legends,
        })
    }
}

/// A validated scatter plot, ready to render.
#[derive(Debug, Clone)]
pub struct BuiltScatterPlot {
    matrix: SeriesMatrix,
    height: usize,
    width: usize,
    y_range: Option<(f64, f64)>,
    legends: Vec<String>,
}

/// One line of the legend block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// Series color.
    pub color: Color,
    /// Series name, `Series N` (1-based).
    pub name: String,
    /// User-supplied legend text, empty when missing.
    pub text: String,
}

/// A fully rendered plot, independent of the output representation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFrame {
    /// The plot area.
    pub grid: Grid,
    /// One formatted label per grid row, top first.
    pub y_labels: Vec<String>,
    /// X tick label row, exactly `grid.width()` characters.
    pub x_labels: String,
    /// Legend lines, empty when no legends were set.
    pub legend: Vec<LegendEntry>,
}

impl BuiltScatterPlot {
    /// The plotted values.
    #[must_use]
    pub fn matrix(&self) -> &SeriesMatrix {
        &self.matrix
    }

    /// Vertical bounds shared by every series.
    ///
    /// The y-range override wins; otherwise the data extent is used. `None`
    /// when there is neither an override nor any data point.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.y_range.or_else(|| self.matrix.value_range())
    }

    /// Bucket of the zero line, if it falls on the grid.
    #[must_use]
    pub fn zero_row(&self) -> Option<usize> {
        self.y_bounds().and_then(|bounds| GridScale::new(bounds, self.height).bucket(0.0))
    }

    /// Render into a fresh frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be allocated.
    pub fn render(&self) -> Result<PlotFrame> {
        let mut grid = Grid::new(self.height, self.width)?;
        let (min, max) = self.y_bounds().unwrap_or((0.0, 0.0));

        if let Some(bucket) = self.zero_row() {
            grid.fill_row(grid.screen_row(bucket), Cell::new(DASH, Color::Gray));
        }

        if let Some(bounds) = self.y_bounds() {
            self.place_markers(&mut grid, bounds);
        }

        let y_labels =
            linspace(max, min, self.height).into_iter().map(|v| format!("{v:>7.2}")).collect();

        debug!(
            height = self.height,
            width = self.width,
            min,
            max,
            points = self.matrix.point_count(),
            "rendered scatter plot"
        );

        Ok(PlotFrame {
            grid,
            y_labels,
            x_labels: self.x_label_row(),
            legend: self.legend_entries(),
        })
    }

    fn place_markers(&self, grid: &mut Grid, bounds: (f64, f64)) {
        let points = self.matrix.point_count();
        if points == 0 {
            return;
        }
        let y = GridScale::new(bounds, self.height);
        let x = GridScale::new((0.0, (points - 1) as f64), self.width);

        for (series_idx, values) in self.matrix.iter().enumerate() {
            let color = palette_color(series_idx);
            for (i, &value) in values.iter().enumerate() {
                let (Some(bucket), Some(col)) = (y.bucket(value), x.bucket(i as f64)) else {
                    continue;
                };
                let row = grid.screen_row(bucket);
                let symbol = match grid.get(row, col) {
                    Some(cell) if cell.is_background() => MARKER,
                    _ => COLLISION,
                };
                grid.set(row, col, Cell::new(symbol, color));
            }
        }
    }

    /// Up to ten evenly spaced point indices written at their columns.
    fn x_label_row(&self) -> String {
        let points = self.matrix.point_count();
        let mut row = vec![BLANK; self.width];
        if points == 0 {
            return row.into_iter().collect();
        }

        let last = (points - 1) as f64;
        let x = GridScale::new((0.0, last), self.width);
        for tick in linspace(0.0, last, points.min(MAX_X_LABELS)) {
            let index = tick as usize;
            let Some(pos) = x.bucket(index as f64) else {
                continue;
            };
            for (j, ch) in index.to_string().chars().enumerate() {
                if let Some(slot) = row.get_mut(pos + j) {
                    *slot = ch;
                }
            }
        }
        row.into_iter().collect()
    }

    /// One entry per series. Missing legend text is empty; extra text is ignored.
    fn legend_entries(&self) -> Vec<LegendEntry> {
        if self.legends.is_empty() {
            return Vec::new();
        }
        (0..self.matrix.series_count())
            .map(|i| LegendEntry {
                color: palette_color(i),
                name: format!("Series {}", i + 1),
                text: self.legends.get(i).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(frame: &PlotFrame, row: usize, col: usize) -> Cell {
        *frame.grid.get(row, col).unwrap()
    }

    #[test]
    fn test_scatter_plot_builder() {
        let plot = ScatterPlot::new()
            .series(&[1.0, 2.0, 3.0])
            .series(&[4.0, 5.0, 6.0])
            .size(5, 20)
            .build()
            .unwrap();

        assert_eq!(plot.matrix().series_count(), 2);
        assert_eq!(plot.matrix().point_count(), 3);
    }

    #[test]
    fn test_scatter_plot_empty_data() {
        let result = ScatterPlot::new().build();
        assert!(matches!(result, Err(Error::EmptyData)));
    }

    #[test]
    fn test_scatter_plot_length_mismatch() {
        let result = ScatterPlot::new().series(&[1.0, 2.0, 3.0]).series(&[4.0, 5.0]).build();
        assert!(matches!(result, Err(Error::SeriesLengthMismatch { .. })));
    }

    #[test]
    fn test_invalid_dimensions() {
        let result = ScatterPlot::new().series(&[1.0]).size(0, 10).build();
        assert!(matches!(result, Err(Error::InvalidDimensions { height: 0, width: 10 })));
    }

    #[test]
    fn test_reversed_or_empty_range_rejected() {
        assert!(ScatterPlot::new().series(&[1.0]).y_range(3.0, 1.0).build().is_err());
        assert!(ScatterPlot::new().series(&[1.0]).y_range(2.0, 2.0).build().is_err());
        assert!(ScatterPlot::new().series(&[1.0]).y_range(f64::NAN, 2.0).build().is_err());
        assert!(ScatterPlot::new().series(&[1.0]).y_range(-1e308, 1e308).build().is_err());
    }

    #[test]
    fn test_oversized_grid_rejected_at_build() {
        let result = ScatterPlot::new().series(&[1.0]).size(usize::MAX / 2, 3).build();
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_two_crossing_series() {
        let frame = ScatterPlot::new()
            .series(&[1.0, 2.0, 3.0])
            .series(&[3.0, 2.0, 1.0])
            .size(3, 3)
            .y_range(1.0, 3.0)
            .build()
            .unwrap()
            .render()
            .unwrap();

        // Top row: value 3 of series 1 at index 0, series 0 at index 2.
        assert_eq!(cell(&frame, 0, 0), Cell::new(MARKER, Color::Green));
        assert_eq!(cell(&frame, 0, 2), Cell::new(MARKER, Color::Red));
        assert_eq!(cell(&frame, 0, 1), Cell::BLANK);
        // Both series pass through the center.
        assert_eq!(cell(&frame, 1, 1), Cell::new(COLLISION, Color::Green));
        // Bottom row: value 1.
        assert_eq!(cell(&frame, 2, 0), Cell::new(MARKER, Color::Red));
        assert_eq!(cell(&frame, 2, 2), Cell::new(MARKER, Color::Green));
    }

    #[test]
    fn test_collision_uses_last_series_color() {
        let frame = ScatterPlot::new()
            .series(&[5.0, 5.0])
            .series(&[5.0, 0.0])
            .series(&[5.0, 1.0])
            .size(4, 2)
            .y_range(0.0, 6.0)
            .build()
            .unwrap()
            .render()
            .unwrap();

        let bucket = GridScale::new((0.0, 6.0), 4).bucket(5.0).unwrap();
        let row = frame.grid.screen_row(bucket);
        assert_eq!(cell(&frame, row, 0), Cell::new(COLLISION, Color::Blue));
    }

    #[test]
    fn test_same_series_collision() {
        let frame = ScatterPlot::new()
            .series(&[1.0, 1.0, 1.0, 1.0])
            .size(2, 2)
            .y_range(0.0, 1.0)
            .build()
            .unwrap()
            .render()
            .unwrap();

        // Indices 0..=2 share column 0, index 3 is alone in column 1.
        assert_eq!(cell(&frame, 0, 0), Cell::new(COLLISION, Color::Red));
        assert_eq!(cell(&frame, 0, 1), Cell::new(MARKER, Color::Red));
    }

    #[test]
    fn test_zero_line_drawn_under_markers() {
        let plot = ScatterPlot::new()
            .series(&[-1.0, 0.0, 1.0])
            .size(3, 3)
            .build()
            .unwrap();
        assert_eq!(plot.zero_row(), Some(1));

        let frame = plot.render().unwrap();
        assert_eq!(cell(&frame, 1, 0), Cell::new(DASH, Color::Gray));
        assert_eq!(cell(&frame, 1, 1), Cell::new(MARKER, Color::Red));
        assert_eq!(cell(&frame, 1, 2), Cell::new(DASH, Color::Gray));
    }

    #[test]
    fn test_zero_line_absent_when_out_of_range() {
        let plot = ScatterPlot::new().series(&[1.0, 2.0, 3.0]).size(3, 3).build().unwrap();
        assert_eq!(plot.zero_row(), None);

        let frame = plot.render().unwrap();
        assert!(frame.grid.rows().all(|r| r.iter().all(|c| c.symbol != DASH)));
    }

    #[test]
    fn test_points_outside_range_dropped() {
        let frame = ScatterPlot::new()
            .series(&[10.0, 20.0, 30.0])
            .size(3, 3)
            .y_range(15.0, 25.0)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(frame.grid.row_text(0).as_deref(), Some("   "));
        assert_eq!(frame.grid.row_text(1).as_deref(), Some(" o "));
        assert_eq!(frame.grid.row_text(2).as_deref(), Some("   "));
    }

    #[test]
    fn test_constant_series_collapses_to_bottom_row() {
        let frame = ScatterPlot::new()
            .series(&[4.0, 4.0, 4.0])
            .size(3, 3)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(frame.grid.row_text(2).as_deref(), Some("ooo"));
        assert_eq!(frame.y_labels, vec!["   4.00"; 3]);
    }

    #[test]
    fn test_empty_series_renders_blank() {
        let frame = ScatterPlot::new()
            .series(&[])
            .size(4, 10)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert!(frame.grid.is_blank());
        assert_eq!(frame.x_labels, " ".repeat(10));
        assert_eq!(frame.y_labels.len(), 4);
    }

    #[test]
    fn test_empty_series_with_range_draws_zero_line() {
        let plot = ScatterPlot::new()
            .series(&[])
            .size(3, 4)
            .y_range(-1.0, 1.0)
            .build()
            .unwrap();
        assert_eq!(plot.zero_row(), Some(1));

        let frame = plot.render().unwrap();
        assert_eq!(frame.grid.row_text(0).as_deref(), Some("    "));
        assert_eq!(frame.grid.row_text(1).as_deref(), Some("----"));
        assert_eq!(frame.grid.row_text(2).as_deref(), Some("    "));
        assert!(frame.grid.row(1).unwrap().iter().all(|c| *c == Cell::new(DASH, Color::Gray)));
        assert!(frame
            .grid
            .rows()
            .all(|r| r.iter().all(|c| c.symbol != MARKER && c.symbol != COLLISION)));
        assert_eq!(frame.x_labels, "    ");
        assert_eq!(frame.y_labels, vec!["   1.00", "   0.00", "  -1.00"]);
    }

    #[test]
    fn test_y_labels_descend() {
        let frame = ScatterPlot::new()
            .series(&[0.0, 10.0])
            .size(3, 5)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(frame.y_labels, vec!["  10.00", "   5.00", "   0.00"]);
    }

    #[test]
    fn test_x_labels_few_points() {
        let frame = ScatterPlot::new()
            .series(&[1.0, 2.0, 3.0])
            .size(2, 9)
            .build()
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(frame.x_labels, "0   1   2");
    }

    #[test]
    fn test_x_labels_capped_at_ten() {
        let values: Vec<f64> = (0..100).map(f64::from).collect();
        let frame = ScatterPlot::new().series(&values).build().unwrap().render().unwrap();

        assert_eq!(frame.x_labels.chars().count(), DEFAULT_WIDTH);
        let ticks: Vec<&str> = frame.x_labels.split_whitespace().collect();
        // The last tick sits in the last column, so only its first digit fits.
        assert_eq!(ticks, vec!["0", "11", "22", "33", "44", "55", "66", "77", "88", "9"]);
    }

    #[test]
    fn test_x_labels_overwrite_and_truncate() {
        // Ticks 0..8 share column 0, 11..17 start at column 1, 20 at column 2.
        let values: Vec<f64> = (0..21).map(f64::from).collect();
        let frame = ScatterPlot::new().series(&values).size(2, 3).build().unwrap().render().unwrap();

        assert_eq!(frame.x_labels, "812");
    }

    #[test]
    fn test_legend_policy() {
        let plot = ScatterPlot::new()
            .series(&[1.0])
            .series(&[2.0])
            .series(&[3.0])
            .legends(["cpu", "mem"])
            .build()
            .unwrap();
        let legend = plot.render().unwrap().legend;

        assert_eq!(legend.len(), 3);
        assert_eq!(legend[0].name, "Series 1");
        assert_eq!(legend[1].text, "mem");
        assert_eq!(legend[1].color, Color::Green);
        assert_eq!(legend[2].text, "");

        let extra = ScatterPlot::new()
            .series(&[1.0])
            .legends(["a", "b", "c"])
            .build()
            .unwrap()
            .render()
            .unwrap();
        assert_eq!(extra.legend.len(), 1);
    }

    #[test]
    fn test_no_legends_hides_block() {
        let frame = ScatterPlot::new().series(&[1.0]).build().unwrap().render().unwrap();
        assert!(frame.legend.is_empty());
    }
}
