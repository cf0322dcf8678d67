//! Command-line options and their translation into start-up settings.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::settings::PACING_MAX;
use crate::engine::source::{PREALLOC_DEFAULT, PREALLOC_MAX, PREALLOC_MIN};
use crate::engine::{BoldPolicy, ScrollStyle, Settings};
use crate::error::{RainError, Result};
use crate::renderer::{GlyphSet, MatrixColor};

const LOCK_MESSAGE: &str = "Computer locked.";

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "digirain", version, about = "Digital rain for the terminal", long_about = None)]
pub struct Args {
    /// Asynchronous scroll (default)
    #[arg(short = 'a')]
    pub async_scroll: bool,

    /// Synchronous scroll
    #[arg(short = 'A')]
    pub sync_scroll: bool,

    /// Bold some characters
    #[arg(short = 'b')]
    pub bold: bool,

    /// Bold all characters
    #[arg(short = 'B')]
    pub bold_all: bool,

    /// No bold characters (overrides -b and -B)
    #[arg(short = 'n')]
    pub no_bold: bool,

    /// Half-width katakana (overrides -l and -x)
    #[arg(short = 'c')]
    pub katakana: bool,

    /// Color: green, red, blue, yellow, cyan, magenta, white
    #[arg(short = 'C', value_name = "COLOR")]
    pub color: Option<String>,

    /// Force the linux terminal type (accepted for compatibility, no effect)
    #[arg(short = 'f')]
    pub force_linux: bool,

    /// Characters change while scrolling
    #[arg(short = 'k')]
    pub changes: bool,

    /// Linux console font glyphs (overrides -x)
    #[arg(short = 'l')]
    pub linux_font: bool,

    /// Lock mode: quit keys and interrupts are ignored
    #[arg(short = 'L')]
    pub lock: bool,

    /// Lambda mode
    #[arg(short = 'm')]
    pub lambda: bool,

    /// Message to show in the middle of the screen
    #[arg(short = 'M', value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Old-style scrolling
    #[arg(short = 'o')]
    pub old_scroll: bool,

    /// Preallocate random values (1024 unless -P is given)
    #[arg(short = 'p')]
    pub prealloc: bool,

    /// Number of values to preallocate, 512 to 8192
    #[arg(short = 'P', value_name = "COUNT")]
    pub prealloc_size: Option<usize>,

    /// Rainbow mode
    #[arg(short = 'r')]
    pub rainbow: bool,

    /// Screensaver mode: exit on the first keypress
    #[arg(short = 's')]
    pub screensaver: bool,

    /// Draw on this tty instead of the controlling terminal
    #[arg(short = 't', value_name = "TTY")]
    pub tty: Option<PathBuf>,

    /// Screen update delay, 0 to 10
    #[arg(short = 'u', value_name = "DELAY", default_value_t = 4)]
    pub pacing: u8,

    /// X window font glyphs
    #[arg(short = 'x')]
    pub xterm_font: bool,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Validated start-up configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub message: Option<String>,
    pub lock: bool,
    pub screensaver: bool,
    /// Size of the preallocated source, `None` for live draws
    pub prealloc: Option<usize>,
    pub tty: Option<PathBuf>,
    /// `-f`; kept so scripts passing it still run, the terminal backend ignores `TERM`
    pub force_linux: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.pacing > PACING_MAX {
            return Err(RainError::InvalidPacing(args.pacing));
        }

        let prealloc = match args.prealloc_size {
            Some(size) if !(PREALLOC_MIN..=PREALLOC_MAX).contains(&size) => {
                return Err(RainError::InvalidPrealloc(size));
            }
            Some(size) => Some(size),
            None if args.prealloc => Some(PREALLOC_DEFAULT),
            None => None,
        };

        let color = match args.color.as_deref() {
            Some(name) => name.parse::<MatrixColor>()?,
            None => MatrixColor::default(),
        };

        let bold = if args.no_bold {
            BoldPolicy::None
        } else if args.bold_all {
            BoldPolicy::All
        } else if args.bold {
            BoldPolicy::Some
        } else {
            BoldPolicy::None
        };

        let glyphs = if args.katakana {
            GlyphSet::Katakana
        } else if args.linux_font || args.xterm_font {
            GlyphSet::AltCharset
        } else {
            GlyphSet::Ascii
        };

        let settings = Settings {
            scroll: if args.old_scroll {
                ScrollStyle::Real
            } else {
                ScrollStyle::Fake
            },
            async_cadence: !args.sync_scroll,
            bold,
            rainbow: args.rainbow,
            changes: args.changes,
            paused: false,
            lambda: args.lambda && glyphs.supports_lambda(),
            color,
            glyphs,
            pacing: args.pacing,
        };

        let message = match args.message {
            Some(message) => Some(message),
            None if args.lock => Some(LOCK_MESSAGE.to_string()),
            None => None,
        };

        Ok(Self {
            settings,
            message,
            lock: args.lock,
            screensaver: args.screensaver,
            prealloc,
            tty: args.tty,
            force_linux: args.force_linux,
            log_file: args.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(std::iter::once("digirain").chain(args.iter().copied()))
            .expect("arguments should parse");
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.message.is_none());
        assert!(config.prealloc.is_none());
        assert!(!config.lock && !config.screensaver);
    }

    #[test]
    fn test_bold_precedence() {
        assert_eq!(config(&["-b"]).unwrap().settings.bold, BoldPolicy::Some);
        assert_eq!(config(&["-b", "-B"]).unwrap().settings.bold, BoldPolicy::All);
        assert_eq!(config(&["-B", "-n"]).unwrap().settings.bold, BoldPolicy::None);
    }

    #[test]
    fn test_glyph_precedence() {
        assert_eq!(config(&["-x"]).unwrap().settings.glyphs, GlyphSet::AltCharset);
        assert_eq!(config(&["-l"]).unwrap().settings.glyphs, GlyphSet::AltCharset);
        assert_eq!(config(&["-l", "-c"]).unwrap().settings.glyphs, GlyphSet::Katakana);
    }

    #[test]
    fn test_lambda_dropped_with_alt_charset() {
        assert!(config(&["-m"]).unwrap().settings.lambda);
        assert!(!config(&["-m", "-x"]).unwrap().settings.lambda);
    }

    #[test]
    fn test_modes() {
        let config = config(&["-A", "-o", "-r", "-k", "-s", "-u", "0"]).unwrap();
        assert!(!config.settings.async_cadence);
        assert_eq!(config.settings.scroll, ScrollStyle::Real);
        assert!(config.settings.rainbow && config.settings.changes);
        assert!(config.screensaver);
        assert_eq!(config.settings.pacing, 0);
    }

    #[test]
    fn test_color() {
        assert_eq!(config(&["-C", "cyan"]).unwrap().settings.color, MatrixColor::Cyan);
        assert!(matches!(
            config(&["-C", "purple"]),
            Err(RainError::InvalidColor(name)) if name == "purple"
        ));
    }

    #[test]
    fn test_pacing_range() {
        assert_eq!(config(&["-u", "10"]).unwrap().settings.pacing, 10);
        assert!(matches!(config(&["-u", "11"]), Err(RainError::InvalidPacing(11))));
    }

    #[test]
    fn test_prealloc() {
        assert_eq!(config(&["-p"]).unwrap().prealloc, Some(PREALLOC_DEFAULT));
        assert_eq!(config(&["-P", "2048"]).unwrap().prealloc, Some(2048));
        assert!(matches!(config(&["-P", "100"]), Err(RainError::InvalidPrealloc(100))));
        assert!(matches!(config(&["-P", "9000"]), Err(RainError::InvalidPrealloc(9000))));
    }

    #[test]
    fn test_lock_message() {
        let locked = config(&["-L"]).unwrap();
        assert!(locked.lock);
        assert_eq!(locked.message.as_deref(), Some(LOCK_MESSAGE));

        let custom = config(&["-L", "-M", "brb"]).unwrap();
        assert_eq!(custom.message.as_deref(), Some("brb"));
    }

    #[test]
    fn test_tty_and_log_file() {
        let config = config(&["-t", "/dev/tty2", "--log-file", "rain.log", "-f"]).unwrap();
        assert_eq!(config.tty, Some(PathBuf::from("/dev/tty2")));
        assert_eq!(config.log_file, Some(PathBuf::from("rain.log")));
        assert!(config.force_linux);
    }

    #[test]
    fn test_force_linux_leaves_settings_alone() {
        let forced = config(&["-f"]).unwrap();
        assert!(forced.force_linux);
        assert_eq!(forced.settings, Settings::default());
    }
}
