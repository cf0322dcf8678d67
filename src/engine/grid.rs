use crate::error::{RainError, Result};

/// One position in a stream column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    /// Bright leading glyph of a stream
    Head,
    /// Trailing glyph, by code in the active glyph set
    Glyph(u32),
}

impl Cell {
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }
}

/// Cells of every active column, stored column by column so each stream
/// can be updated as one contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-blank grid of `rows` x `cols` active columns
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or(RainError::Allocation(usize::MAX))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| RainError::Allocation(len))?;
        cells.resize(len, Cell::Blank);

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[cfg(test)]
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[col * self.rows + row])
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[col * self.rows + row] = cell;
        }
    }

    pub fn column(&self, col: usize) -> &[Cell] {
        let start = col * self.rows;
        &self.cells[start..start + self.rows]
    }

    pub fn column_mut(&mut self, col: usize) -> &mut [Cell] {
        let start = col * self.rows;
        &mut self.cells[start..start + self.rows]
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_blank())
    }
}
