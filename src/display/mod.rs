//! The drawing surface the engine renders onto.
//!
//! Everything the animation needs from a terminal goes through [`Display`]:
//! querying its size, placing glyphs, polling for a key and pausing. The
//! crossterm-backed [`TerminalDisplay`] is the real implementation.

pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use crate::error::Result;
use crate::renderer::MatrixColor;

pub use terminal::{Restorer, TerminalDisplay};

/// A single keypress as the input handler sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C while the terminal is in raw mode
    Interrupt,
    Other,
}

pub trait Display {
    /// Current size as `(rows, cols)`
    fn query_dimensions(&mut self) -> Result<(u16, u16)>;

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    /// Draw one glyph at the cursor and advance it
    fn draw_glyph(&mut self, glyph: char, color: MatrixColor, bold: bool) -> Result<()>;

    fn clear(&mut self) -> Result<()>;

    /// Make everything drawn since the last call visible
    fn present(&mut self) -> Result<()>;

    /// Non-blocking; `None` when no key is waiting
    fn poll_key(&mut self) -> Result<Option<Key>>;

    fn sleep(&mut self, duration: Duration);
}
