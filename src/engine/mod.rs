//! The stream simulation: grid, per-column state and the update pass.

pub mod column;
pub mod grid;
pub mod scroll;
pub mod settings;
pub mod source;

pub use column::ColumnState;
pub use grid::{Cell, Grid};
pub use settings::{Action, BoldPolicy, ScrollStyle, Settings};
pub use source::{CharSource, LiveSource, PreallocatedSource};

use tracing::debug;

use crate::error::{RainError, Result};

/// Smallest terminal size, in rows and columns, the engine lays out for
pub const MIN_DIMENSION: u16 = 10;

/// Active stream columns for a screen width; odd columns stay blank
pub fn active_columns(screen_cols: u16) -> usize {
    (usize::from(screen_cols) + 1) / 2
}

/// Grid and column table, always built and replaced together
#[derive(Debug, Clone)]
pub struct EngineState {
    grid: Grid,
    columns: Vec<ColumnState>,
}

impl EngineState {
    pub fn new(rows: usize, cols: usize, source: &mut dyn CharSource) -> Result<Self> {
        let grid = Grid::new(rows, cols)?;

        let mut columns = Vec::new();
        columns
            .try_reserve_exact(cols)
            .map_err(|_| RainError::Allocation(cols))?;
        columns.extend((0..cols).map(|_| ColumnState::fresh(source, rows)));

        Ok(Self { grid, columns })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    /// Advance one column by one frame
    pub fn update_column(&mut self, col: usize, settings: &Settings, source: &mut dyn CharSource) {
        let cells = self.grid.column_mut(col);
        let column = &mut self.columns[col];
        match settings.scroll {
            ScrollStyle::Real => scroll::real_scroll(cells, column, source, settings.glyphs),
            ScrollStyle::Fake => {
                scroll::fake_scroll(cells, column, source, settings.glyphs, settings.changes)
            }
        }
    }
}

/// Owns the animation state and its character source
pub struct Engine {
    state: EngineState,
    source: Box<dyn CharSource>,
    screen_cols: u16,
    frame: u8,
}

impl Engine {
    /// Lay out streams for a `rows` x `cols` screen, clamped to the minimum
    pub fn new(rows: u16, cols: u16, mut source: Box<dyn CharSource>) -> Result<Self> {
        let rows = rows.max(MIN_DIMENSION);
        let cols = cols.max(MIN_DIMENSION);
        let state = EngineState::new(usize::from(rows), active_columns(cols), source.as_mut())?;
        debug!("Engine laid out for {}x{}", rows, cols);

        Ok(Self {
            state,
            source,
            screen_cols: cols,
            frame: 0,
        })
    }

    /// Discard all streams and lay out afresh for new dimensions
    pub fn rebuild(&mut self, rows: u16, cols: u16) -> Result<()> {
        let rows = rows.max(MIN_DIMENSION);
        let cols = cols.max(MIN_DIMENSION);
        self.state = EngineState::new(usize::from(rows), active_columns(cols), self.source.as_mut())?;
        self.screen_cols = cols;
        debug!("Engine rebuilt for {}x{}", rows, cols);
        Ok(())
    }

    /// Run one update pass over every active column
    pub fn advance(&mut self, settings: &Settings) {
        if !settings.paused {
            for col in 0..self.state.columns.len() {
                let due = !settings.async_cadence || self.state.columns[col].is_due(self.frame);
                if due {
                    self.state.update_column(col, settings, self.source.as_mut());
                }
            }
        }
        self.frame = self.frame % 4 + 1;
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.state.grid
    }

    pub fn rows(&self) -> usize {
        self.state.grid.rows()
    }

    pub fn screen_cols(&self) -> u16 {
        self.screen_cols
    }

    /// Rotating async counter, `0` before the first pass then `1..=4`
    pub fn frame_counter(&self) -> u8 {
        self.frame
    }

    /// Grid for drawing alongside the source, for flickering heads
    pub fn render_parts(&mut self) -> (&Grid, &mut dyn CharSource) {
        (&self.state.grid, self.source.as_mut())
    }
}
