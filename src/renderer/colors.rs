use std::str::FromStr;

use crossterm::style::Color;

use crate::error::RainError;

/// The fixed palette streams can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixColor {
    #[default]
    Green,
    Red,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl MatrixColor {
    pub const ALL: [MatrixColor; 7] = [
        MatrixColor::Green,
        MatrixColor::Red,
        MatrixColor::Blue,
        MatrixColor::Yellow,
        MatrixColor::Cyan,
        MatrixColor::Magenta,
        MatrixColor::White,
    ];

    /// Rotation used by rainbow mode; white is reserved for heads.
    pub const RAINBOW: [MatrixColor; 6] = [
        MatrixColor::Green,
        MatrixColor::Red,
        MatrixColor::Blue,
        MatrixColor::Yellow,
        MatrixColor::Cyan,
        MatrixColor::Magenta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatrixColor::Green => "green",
            MatrixColor::Red => "red",
            MatrixColor::Blue => "blue",
            MatrixColor::Yellow => "yellow",
            MatrixColor::Cyan => "cyan",
            MatrixColor::Magenta => "magenta",
            MatrixColor::White => "white",
        }
    }

    /// Rainbow color for an active column index
    pub fn rainbow(column: usize) -> Self {
        Self::RAINBOW[column % Self::RAINBOW.len()]
    }

    /// Convert to the ANSI color the terminal backend understands
    pub fn to_ansi(self) -> Color {
        match self {
            MatrixColor::Green => Color::DarkGreen,
            MatrixColor::Red => Color::DarkRed,
            MatrixColor::Blue => Color::DarkBlue,
            MatrixColor::Yellow => Color::DarkYellow,
            MatrixColor::Cyan => Color::DarkCyan,
            MatrixColor::Magenta => Color::DarkMagenta,
            MatrixColor::White => Color::Grey,
        }
    }
}

impl FromStr for MatrixColor {
    type Err = RainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| RainError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        assert_eq!("red".parse::<MatrixColor>().unwrap(), MatrixColor::Red);
        assert_eq!("white".parse::<MatrixColor>().unwrap(), MatrixColor::White);
        assert!(matches!(
            "purple".parse::<MatrixColor>(),
            Err(RainError::InvalidColor(name)) if name == "purple"
        ));
        // names are matched exactly, like the command line always did
        assert!("Green".parse::<MatrixColor>().is_err());
    }

    #[test]
    fn test_rainbow_rotation() {
        assert_eq!(MatrixColor::rainbow(0), MatrixColor::Green);
        assert_eq!(MatrixColor::rainbow(5), MatrixColor::Magenta);
        assert_eq!(MatrixColor::rainbow(6), MatrixColor::Green);
        assert!(!MatrixColor::RAINBOW.contains(&MatrixColor::White));
    }

    #[test]
    fn test_ansi_conversion() {
        assert_eq!(MatrixColor::Green.to_ansi(), Color::DarkGreen);
        assert_eq!(MatrixColor::White.to_ansi(), Color::Grey);
    }
}
