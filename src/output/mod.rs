//! Output encoders (terminal).

mod terminal;

pub use terminal::{ColorMode, TerminalEncoder};
