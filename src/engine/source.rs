//! Pseudo-random value sources feeding the stream engine.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::display::Display;
use crate::error::{RainError, Result};
use crate::renderer::{GlyphSet, MatrixColor};

pub const PREALLOC_MIN: usize = 512;
pub const PREALLOC_MAX: usize = 8192;
pub const PREALLOC_DEFAULT: usize = 1024;

const FILL_BANNER: &str = "Knock, knock, Neo.";
const FILL_STEP: Duration = Duration::from_millis(180);

pub trait CharSource {
    /// Next non-negative value
    fn next(&mut self) -> u32;
}

/// Draw a glyph code within the set's range
pub fn glyph_code(source: &mut dyn CharSource, glyphs: GlyphSet) -> u32 {
    let (min, max) = glyphs.code_range();
    source.next() % (max - min) + min
}

/// Unbounded xorshift generator
#[derive(Debug, Clone)]
pub struct LiveSource {
    state: u64,
}

impl LiveSource {
    pub fn with_seed(seed: u64) -> Self {
        // xorshift is stuck at zero forever
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    /// Seeded once from the wall clock
    pub fn from_clock() -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        debug!("Seeding live source with {}", seed);
        Self::with_seed(seed)
    }
}

impl CharSource for LiveSource {
    fn next(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 33) as u32
    }
}

/// Fixed buffer of values replayed cyclically.
///
/// Trades randomness for a bounded per-frame cost; the sequence repeats with
/// a period equal to the buffer size.
#[derive(Debug, Clone)]
pub struct PreallocatedSource {
    values: Vec<u32>,
    index: usize,
}

impl PreallocatedSource {
    /// Replay `values` in order. An empty buffer yields zeros.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Fill `size` values from `seed`, showing progress on the display
    pub fn fill(size: usize, seed: &mut dyn CharSource, display: &mut dyn Display) -> Result<Self> {
        if !(PREALLOC_MIN..=PREALLOC_MAX).contains(&size) {
            return Err(RainError::InvalidPrealloc(size));
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(size)
            .map_err(|_| RainError::Allocation(size))?;

        let banner: Vec<char> = FILL_BANNER.chars().collect();
        let segment = (size / banner.len()).saturating_sub(2).max(1);

        display.move_cursor(0, 0)?;
        display.draw_glyph(banner[0], MatrixColor::Green, true)?;
        display.present()?;
        let mut shown = 1;

        for i in 0..size {
            values.push(seed.next());

            if i / segment > shown && shown < banner.len() {
                display.move_cursor(0, shown as u16)?;
                display.draw_glyph(banner[shown], MatrixColor::Green, true)?;
                display.present()?;
                shown += 1;
                display.sleep(FILL_STEP);
            }
        }

        display.clear()?;
        info!("Preallocated {} random values", size);
        Ok(Self::from_values(values))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CharSource for PreallocatedSource {
    fn next(&mut self) -> u32 {
        let Some(&value) = self.values.get(self.index) else {
            return 0;
        };
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
