//! Logical terminal colors and the series palette.
//!
//! Rendering works on [`Color`] tags only. Escape sequences are resolved by
//! [`Color::ansi`] when the terminal encoder emits text, so the grid logic
//! stays independent of the output representation.

/// ANSI reset sequence.
pub const RESET: &str = "\x1b[0m";

/// Logical foreground color of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Standard red.
    Red,
    /// Standard green.
    Green,
    /// Standard blue.
    Blue,
    /// Standard yellow.
    Yellow,
    /// Standard magenta.
    Magenta,
    /// Standard cyan.
    Cyan,
    /// Bright black, used for the zero line.
    Gray,
}

/// Series colors, cycled by series index.
pub const PALETTE: [Color; 6] =
    [Color::Red, Color::Green, Color::Blue, Color::Yellow, Color::Magenta, Color::Cyan];

impl Color {
    /// ANSI foreground escape sequence for this color.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::Gray => "\x1b[90m",
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
        }
    }
}

/// Palette color for a series.
#[must_use]
pub const fn palette_color(series_index: usize) -> Color {
    PALETTE[series_index % PALETTE.len()]
}
