use std::collections::VecDeque;
use std::time::Duration;

use super::{Display, Key};
use crate::error::{RainError, Result};
use crate::renderer::MatrixColor;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Draw {
    pub row: u16,
    pub col: u16,
    pub glyph: char,
    pub color: MatrixColor,
    pub bold: bool,
}

/// In-memory display that records every call
#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    /// `None` makes dimension queries fail
    pub dimensions: Option<(u16, u16)>,
    pub keys: VecDeque<Key>,
    pub draws: Vec<Draw>,
    pub clears: usize,
    pub presents: usize,
    pub sleeps: Vec<Duration>,
    cursor: (u16, u16),
}

impl RecordingDisplay {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            dimensions: Some((rows, cols)),
            ..Self::default()
        }
    }

    pub fn draw_at(&self, row: u16, col: u16) -> Option<&Draw> {
        self.draws.iter().rev().find(|d| d.row == row && d.col == col)
    }
}

impl Display for RecordingDisplay {
    fn query_dimensions(&mut self) -> Result<(u16, u16)> {
        self.dimensions
            .ok_or_else(|| RainError::Terminal("no terminal attached".to_string()))
    }

    fn move_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        self.cursor = (row, col);
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, color: MatrixColor, bold: bool) -> Result<()> {
        let (row, col) = self.cursor;
        self.draws.push(Draw {
            row,
            col,
            glyph,
            color,
            bold,
        });
        self.cursor.1 += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        Ok(self.keys.pop_front())
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
