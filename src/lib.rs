//! # tplot
//!
//! Terminal scatter plots of whitespace-delimited numeric columns.
//!
//! Selected columns of a text table become series; values are quantized onto a
//! fixed-size character grid and printed with y-axis labels, x-axis ticks, a
//! gray zero line and a colored legend.
//!
//! ## Quick Start
//!
//! ```rust
//! use tplot::prelude::*;
//!
//! let selection = ColumnSelection::new(vec![1, 2])?;
//! let data = tplot::data::load("1 3\n2 2\n3 1\n".as_bytes(), &selection)?;
//!
//! let frame = ScatterPlot::new()
//!     .matrix(&data.matrix)
//!     .size(5, 20)
//!     .legends(["rising", "falling"])
//!     .build()?
//!     .render()?;
//!
//! let text = TerminalEncoder::new().mode(ColorMode::Plain).render(&frame);
//! assert!(text.contains("Legends:"));
//! # Ok::<(), tplot::Error>(())
//! ```
//!
//! ## Layout
//!
//! ```text
//!    3.00 | o       o
//!    2.00 |     x
//!    1.00 | o       o
//!          +---------
//!          0   1   2
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Logical colors and the series palette.
pub mod color;

/// Character grid canvas.
pub mod grid;

/// Value-to-grid scale functions.
pub mod scale;

// ============================================================================
// Input
// ============================================================================

/// Column loader for whitespace-delimited text.
pub mod data;

/// Option parsing and config file.
pub mod config;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Plot types.
pub mod plots;

/// Output encoders.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use tplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{palette_color, Color};
    pub use crate::config::{FileConfig, PlotConfig};
    pub use crate::data::{ColumnSelection, DataSet, InputSource, SeriesMatrix};
    pub use crate::error::{Error, Result};
    pub use crate::grid::{Cell, Grid};
    pub use crate::output::{ColorMode, TerminalEncoder};
    pub use crate::plots::{BuiltScatterPlot, LegendEntry, PlotFrame, ScatterPlot};
    pub use crate::scale::{grid_index, GridScale, Scale};
}
