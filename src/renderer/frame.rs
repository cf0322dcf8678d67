use crate::display::Display;
use crate::engine::source::glyph_code;
use crate::engine::{BoldPolicy, Cell, Engine, Settings};
use crate::error::Result;
use crate::renderer::glyphs::LAMBDA;
use crate::renderer::MatrixColor;

const HEAD_COLOR: MatrixColor = MatrixColor::White;

/// Projects the grid onto a display, plus an optional centered message box
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    message: Option<String>,
}

impl Renderer {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// Draw every active column, the message overlay, then present
    pub fn render(
        &self,
        engine: &mut Engine,
        settings: &Settings,
        display: &mut dyn Display,
    ) -> Result<()> {
        let screen_cols = engine.screen_cols();
        let (grid, source) = engine.render_parts();

        for col in 0..grid.cols() {
            let screen_col = (col * 2) as u16;
            let color = if settings.rainbow {
                MatrixColor::rainbow(col)
            } else {
                settings.color
            };

            for (row, cell) in grid.column(col).iter().enumerate() {
                display.move_cursor(row as u16, screen_col)?;
                match *cell {
                    Cell::Blank => display.draw_glyph(' ', color, false)?,
                    Cell::Head => {
                        let glyph = settings.glyphs.glyph(glyph_code(source, settings.glyphs));
                        display.draw_glyph(glyph, HEAD_COLOR, settings.bold != BoldPolicy::None)?;
                    }
                    Cell::Glyph(code) => {
                        let glyph = if settings.lambda {
                            LAMBDA
                        } else {
                            settings.glyphs.glyph(code)
                        };
                        display.draw_glyph(glyph, color, settings.bold.applies_to(code))?;
                    }
                }
            }
        }

        if let Some(message) = &self.message {
            draw_message(message, grid.rows(), screen_cols, display)?;
        }
        display.present()
    }
}

fn draw_message(message: &str, rows: usize, cols: u16, display: &mut dyn Display) -> Result<()> {
    let len = message.chars().count();
    let width = len + 4;
    let top = (rows / 2).saturating_sub(1);
    let left = (usize::from(cols).saturating_sub(len) / 2).saturating_sub(2);

    let padded: Vec<char> = format!("  {}  ", message).chars().collect();
    let lines = [vec![' '; width], padded, vec![' '; width]];

    for (offset, line) in lines.iter().enumerate() {
        display.move_cursor((top + offset) as u16, left as u16)?;
        for glyph in line.iter().take(usize::from(cols).saturating_sub(left)) {
            display.draw_glyph(*glyph, MatrixColor::White, false)?;
        }
    }
    Ok(())
}
