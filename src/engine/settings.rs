use std::time::Duration;

use tracing::debug;

use crate::renderer::{GlyphSet, MatrixColor};

pub const PACING_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollStyle {
    /// Old-style scrolling that shifts whole columns
    Real,
    /// In-place growth
    #[default]
    Fake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoldPolicy {
    #[default]
    None,
    /// Glyphs with odd codes
    Some,
    All,
}

impl BoldPolicy {
    pub fn applies_to(self, code: u32) -> bool {
        match self {
            BoldPolicy::None => false,
            BoldPolicy::Some => code & 1 == 1,
            BoldPolicy::All => true,
        }
    }
}

/// Mode toggles read by the engine and renderer every frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub scroll: ScrollStyle,
    pub async_cadence: bool,
    pub bold: BoldPolicy,
    pub rainbow: bool,
    pub changes: bool,
    pub paused: bool,
    pub lambda: bool,
    pub color: MatrixColor,
    pub glyphs: GlyphSet,
    /// Frame delay in tens of milliseconds
    pub pacing: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll: ScrollStyle::default(),
            async_cadence: true,
            bold: BoldPolicy::default(),
            rainbow: false,
            changes: false,
            paused: false,
            lambda: false,
            color: MatrixColor::default(),
            glyphs: GlyphSet::default(),
            pacing: 4,
        }
    }
}

/// A runtime change to [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleAsync,
    SetBold(BoldPolicy),
    ToggleScroll,
    SetPacing(u8),
    /// Fixed color; turns rainbow off
    SetColor(MatrixColor),
    ToggleRainbow,
    ToggleLambda,
    TogglePause,
    ToggleChanges,
}

impl Settings {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.pacing) * 10)
    }

    pub fn apply(&mut self, action: Action) {
        debug!("Applying {:?}", action);
        match action {
            Action::ToggleAsync => self.async_cadence = !self.async_cadence,
            Action::SetBold(policy) => self.bold = policy,
            Action::ToggleScroll => {
                self.scroll = match self.scroll {
                    ScrollStyle::Real => ScrollStyle::Fake,
                    ScrollStyle::Fake => ScrollStyle::Real,
                }
            }
            Action::SetPacing(pacing) => self.pacing = pacing.min(PACING_MAX),
            Action::SetColor(color) => {
                self.color = color;
                self.rainbow = false;
            }
            Action::ToggleRainbow => self.rainbow = !self.rainbow,
            Action::ToggleLambda => {
                if self.glyphs.supports_lambda() {
                    self.lambda = !self.lambda;
                }
            }
            Action::TogglePause => self.paused = !self.paused,
            Action::ToggleChanges => self.changes = !self.changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scroll, ScrollStyle::Fake);
        assert!(settings.async_cadence);
        assert_eq!(settings.bold, BoldPolicy::None);
        assert_eq!(settings.frame_delay(), Duration::from_millis(40));
    }

    #[test]
    fn test_bold_policy() {
        assert!(!BoldPolicy::None.applies_to(33));
        assert!(BoldPolicy::Some.applies_to(33));
        assert!(!BoldPolicy::Some.applies_to(34));
        assert!(BoldPolicy::All.applies_to(34));
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        settings.apply(Action::ToggleScroll);
        assert_eq!(settings.scroll, ScrollStyle::Real);
        settings.apply(Action::ToggleScroll);
        assert_eq!(settings.scroll, ScrollStyle::Fake);

        settings.apply(Action::TogglePause);
        settings.apply(Action::ToggleChanges);
        settings.apply(Action::ToggleAsync);
        assert!(settings.paused && settings.changes && !settings.async_cadence);
    }

    #[test]
    fn test_fixed_color_clears_rainbow() {
        let mut settings = Settings::default();
        settings.apply(Action::ToggleRainbow);
        assert!(settings.rainbow);
        settings.apply(Action::SetColor(MatrixColor::Red));
        assert!(!settings.rainbow);
        assert_eq!(settings.color, MatrixColor::Red);
    }

    #[test]
    fn test_lambda_needs_plain_glyphs() {
        let mut settings = Settings {
            glyphs: GlyphSet::AltCharset,
            ..Settings::default()
        };
        settings.apply(Action::ToggleLambda);
        assert!(!settings.lambda);

        settings.glyphs = GlyphSet::Katakana;
        settings.apply(Action::ToggleLambda);
        assert!(settings.lambda);
    }

    #[test]
    fn test_pacing_is_capped() {
        let mut settings = Settings::default();
        settings.apply(Action::SetPacing(0));
        assert_eq!(settings.frame_delay(), Duration::ZERO);
        settings.apply(Action::SetPacing(42));
        assert_eq!(settings.pacing, PACING_MAX);
    }
}
