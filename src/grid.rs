//! Character grid used as the plot canvas.
//!
//! Rows are stored top to bottom. Plot code addresses rows bottom-up through
//! [`Grid::screen_row`], so bucket 0 of the value scale is the last stored row.

use crate::color::Color;
use crate::error::{Error, Result};

/// Blank cell symbol.
pub const BLANK: char = ' ';
/// Zero-line symbol.
pub const DASH: char = '-';
/// Single data point marker.
pub const MARKER: char = 'o';
/// Marker for a cell hit more than once.
pub const COLLISION: char = 'x';

/// Largest accepted height or width.
pub const MAX_DIMENSION: usize = 10_000;

/// Validate grid dimensions: each in `1..=MAX_DIMENSION`, product representable.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] otherwise.
pub fn check_dimensions(height: usize, width: usize) -> Result<usize> {
    let in_bounds = |n: usize| (1..=MAX_DIMENSION).contains(&n);
    match height.checked_mul(width) {
        Some(cells) if in_bounds(height) && in_bounds(width) => Ok(cells),
        _ => Err(Error::InvalidDimensions { height, width }),
    }
}

/// One character cell with an optional color tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character.
    pub symbol: char,
    /// Foreground color, `None` for uncolored text.
    pub color: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// Uncolored blank cell.
    pub const BLANK: Self = Self { symbol: BLANK, color: None };

    /// Create a colored cell.
    #[must_use]
    pub const fn new(symbol: char, color: Color) -> Self {
        Self { symbol, color: Some(color) }
    }

    /// Whether a marker may be placed here without a collision.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        self.symbol == BLANK || self.symbol == DASH
    }
}

/// Fixed-size `height x width` array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Cells in row-major order, top row first.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a blank grid.
    ///
    /// # Errors
    ///
    /// Returns an error if height or width is zero or above [`MAX_DIMENSION`].
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let cells = check_dimensions(height, width)?;
        Ok(Self { height, width, cells: vec![Cell::BLANK; cells] })
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Stored (top-down) row for a bottom-up bucket index.
    #[must_use]
    pub const fn screen_row(&self, bucket: usize) -> usize {
        self.height - bucket - 1
    }

    /// Cell at a stored row and column.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    /// Overwrite a cell; out-of-bounds writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = cell;
        }
    }

    /// Fill a stored row with one cell value.
    pub fn fill_row(&mut self, row: usize, cell: Cell) {
        if let Some(r) = self.row_mut(row) {
            r.fill(cell);
        }
    }

    /// Cells of a stored row.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    fn row_mut(&mut self, row: usize) -> Option<&mut [Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&mut self.cells[start..start + self.width])
    }

    /// Iterate over stored rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Whether every cell is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::BLANK)
    }

    /// Row as plain text, colors dropped.
    #[must_use]
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.row(row).map(|cells| cells.iter().map(|c| c.symbol).collect())
    }
}
