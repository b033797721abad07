//! Plot types.
//!
//! Provides the terminal scatter plot with a builder API.

mod scatter;

pub use scatter::{
    BuiltScatterPlot, LegendEntry, PlotFrame, ScatterPlot, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    MAX_X_LABELS,
};
