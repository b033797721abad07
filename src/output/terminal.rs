//! Terminal output encoder (ASCII/ANSI).
//!
//! Turns a [`PlotFrame`] into text. Two modes:
//! - ANSI: each colored cell is wrapped in its foreground escape and a reset
//! - Plain: symbols only, for pipes and `NO_COLOR` terminals

use crate::color::{Color, RESET};
use crate::error::Result;
use crate::plots::PlotFrame;
use std::fmt;
use std::io::Write;

/// Left margin before the axis rule and the x tick row.
const AXIS_INDENT: &str = "         ";

/// Terminal color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// ANSI foreground escapes.
    #[default]
    Ansi,
    /// No escape sequences.
    Plain,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct TerminalEncoder {
    mode: ColorMode,
}

impl TerminalEncoder {
    /// Create a new terminal encoder with ANSI colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color mode.
    #[must_use]
    pub fn mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Render a frame to a string.
    ///
    /// Layout: a blank line, one `<label> | <cells>` line per grid row, the
    /// axis rule, the x tick row, the legend block if any, a blank line.
    #[must_use]
    pub fn render(&self, frame: &PlotFrame) -> String {
        let grid = &frame.grid;
        let mut output = String::with_capacity((grid.width() * 2 + 12) * (grid.height() + 8));
        // Writing into a String cannot fail.
        let _ = self.encode(frame, &mut output);
        output
    }

    /// Render a frame and write it to `out`, then flush.
    ///
    /// The frame is fully rendered before the first byte is written.
    ///
    /// # Errors
    ///
    /// Returns an error if writing or flushing fails.
    pub fn write_to<W: Write>(&self, frame: &PlotFrame, out: &mut W) -> Result<()> {
        let text = self.render(frame);
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Write a frame to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is closed.
    pub fn print(&self, frame: &PlotFrame) -> Result<()> {
        self.write_to(frame, &mut std::io::stdout().lock())
    }

    fn encode<W: fmt::Write>(&self, frame: &PlotFrame, out: &mut W) -> fmt::Result {
        let grid = &frame.grid;

        out.write_char('\n')?;
        for (label, cells) in frame.y_labels.iter().zip(grid.rows()) {
            write!(out, "{label} | ")?;
            for cell in cells {
                self.write_colored(out, cell.symbol, cell.color)?;
            }
            out.write_char('\n')?;
        }

        writeln!(out, "{AXIS_INDENT}+{}", "-".repeat(grid.width()))?;
        writeln!(out, "{AXIS_INDENT}{}", frame.x_labels)?;

        if !frame.legend.is_empty() {
            out.write_str("\nLegends:\n")?;
            for entry in &frame.legend {
                out.write_str("  ")?;
                self.write_colored(out, &entry.name, Some(entry.color))?;
                writeln!(out, ": {}", entry.text)?;
            }
        }
        out.write_char('\n')
    }

    fn write_colored<W: fmt::Write>(
        &self,
        out: &mut W,
        text: impl fmt::Display,
        color: Option<Color>,
    ) -> fmt::Result {
        match (self.mode, color) {
            (ColorMode::Ansi, Some(color)) => write!(out, "{}{text}{RESET}", color.ansi()),
            _ => write!(out, "{text}"),
        }
    }
}
