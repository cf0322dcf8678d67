//! Digirain - falling character streams for the terminal
//!
//! The animation is split into a few small layers:
//!
//! - **Engine**: the grid of cells, per-column stream state and the two
//!   scrolling algorithms, driven by a pluggable character source
//! - **Renderer**: maps cells to glyphs and colors on a [`display::Display`]
//! - **Display**: the crossterm terminal surface
//! - **Driver**: the frame loop, key bindings and signal handling
//! - **Config**: command-line options

pub mod config;
pub mod display;
pub mod driver;
pub mod engine;
pub mod error;
pub mod renderer;

// Re-export commonly used types
pub use config::{Args, Config};
pub use display::{Display, TerminalDisplay};
pub use driver::{FrameDriver, SignalHandler};
pub use engine::{CharSource, Engine, LiveSource, PreallocatedSource, Settings};
pub use error::{RainError, Result};
pub use renderer::Renderer;
