//! The two per-column update algorithms.
//!
//! Both advance one column slice by exactly one frame. Real scrolling
//! shifts every cell down a row; fake scrolling leaves cells in place and
//! moves each stream by growing its head and erasing its tail.

use super::column::{fresh_length, fresh_spaces, ColumnState};
use super::grid::Cell;
use super::source::{glyph_code, CharSource};
use crate::renderer::GlyphSet;

pub fn real_scroll(
    cells: &mut [Cell],
    column: &mut ColumnState,
    source: &mut dyn CharSource,
    glyphs: GlyphSet,
) {
    let rows = cells.len();
    if rows < 2 {
        return;
    }

    cells.copy_within(0..rows - 1, 1);
    let run = cells[1..].iter().take_while(|c| !c.is_blank()).count();

    cells[0] = if cells[1].is_blank() {
        if column.spaces > 0 {
            column.spaces -= 1;
            Cell::Blank
        } else {
            let start = if source.next() % 3 == 1 {
                Cell::Head
            } else {
                Cell::Glyph(glyph_code(source, glyphs))
            };
            column.length = fresh_length(source, rows);
            column.spaces = fresh_spaces(source, rows);
            start
        }
    } else if run < column.length {
        Cell::Glyph(glyph_code(source, glyphs))
    } else {
        Cell::Blank
    };
}

pub fn fake_scroll(
    cells: &mut [Cell],
    column: &mut ColumnState,
    source: &mut dyn CharSource,
    glyphs: GlyphSet,
    changes: bool,
) {
    let rows = cells.len();
    if rows == 0 {
        return;
    }

    if cells[0].is_blank() {
        if column.spaces > 0 {
            column.spaces -= 1;
        } else {
            column.length = fresh_length(source, rows);
            cells[0] = Cell::Head;
            column.spaces = fresh_spaces(source, rows);
        }
    }

    let mut i = 0;
    let mut first = true;
    while i < rows {
        while i < rows && cells[i].is_blank() {
            i += 1;
        }
        if i >= rows {
            break;
        }

        let start = i;
        while i < rows && !cells[i].is_blank() {
            if changes && source.next() & 7 == 0 {
                cells[i] = Cell::Glyph(glyph_code(source, glyphs));
            }
            i += 1;
        }
        let len = i - start;
        let at_bottom = i >= rows;

        if cells[i - 1] == Cell::Head {
            cells[i - 1] = Cell::Glyph(glyph_code(source, glyphs));
        }
        if i < rows {
            cells[i] = Cell::Head;
        }

        // Only the topmost segment may still be growing from row 0. Segments
        // below it lose their tail each frame. So does a segment resting on
        // the bottom row, even when it is not longer than `length`; otherwise
        // it would sit there until the next stream starts instead of clearing
        // `length + rows` updates after it began.
        if len > column.length || !first || at_bottom {
            cells[start] = Cell::Blank;
        }
        first = false;
        i += 1;
    }
}
