pub mod colors;
pub mod frame;
pub mod glyphs;

pub use colors::MatrixColor;
pub use frame::Renderer;
pub use glyphs::GlyphSet;
