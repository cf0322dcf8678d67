use super::source::CharSource;

/// Per-column stream bookkeeping, parallel to the grid's columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnState {
    /// Target visible length of the current stream, in `[3, rows/2 + 2]`
    pub length: usize,
    /// Blank rows left before the next stream starts
    pub spaces: usize,
    /// Frames to skip in async mode, in `[1, 3]`
    pub update_cadence: u8,
}

impl ColumnState {
    /// Fresh state for a column; draws spaces, then length, then cadence
    pub fn fresh(source: &mut dyn CharSource, rows: usize) -> Self {
        let spaces = fresh_spaces(source, rows);
        let length = fresh_length(source, rows);
        let update_cadence = (source.next() % 3 + 1) as u8;
        Self {
            length,
            spaces,
            update_cadence,
        }
    }

    /// Whether the async cadence gate lets this column move on `frame`
    pub fn is_due(&self, frame: u8) -> bool {
        frame > self.update_cadence
    }
}

pub fn fresh_length(source: &mut dyn CharSource, rows: usize) -> usize {
    source.next() as usize % (rows / 2).max(1) + 3
}

pub fn fresh_spaces(source: &mut dyn CharSource, rows: usize) -> usize {
    source.next() as usize % rows.max(1) + 1
}
