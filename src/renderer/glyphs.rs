//! Glyph sets and the mapping from cell codes to drawable characters.

/// Half-width katakana and digits; index 0 is never drawn.
const KATAKANA: [char; 44] = [
    ' ', 'ﾊ', 'ﾐ', 'ﾋ', 'ｰ', 'ｳ', 'ｼ', 'ﾅ', 'ﾓ', 'ﾆ', 'ｻ', 'ﾜ', 'ﾂ', 'ｵ', 'ﾘ', 'ｱ', 'ﾎ', 'ﾃ', 'ﾏ',
    'ｹ', 'ﾒ', 'ｴ', 'ｶ', 'ｷ', 'ﾑ', 'ﾕ', 'ﾗ', 'ｾ', 'ﾈ', 'ｽ', 'ﾀ', 'ﾇ', 'ﾍ', '0', '1', '2', '3', '4',
    '5', '6', '7', '8', '9', 'Z',
];

pub const LAMBDA: char = 'λ';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    /// Printable ASCII
    #[default]
    Ascii,
    /// Upper Latin-1 range used by the matrix console and xterm fonts
    AltCharset,
    Katakana,
}

impl GlyphSet {
    /// Half-open range of codes this set draws from
    pub fn code_range(self) -> (u32, u32) {
        match self {
            GlyphSet::Ascii => (33, 123),
            GlyphSet::AltCharset => (166, 217),
            GlyphSet::Katakana => (1, KATAKANA.len() as u32),
        }
    }

    /// Character for `code`, if the set has one
    pub fn lookup(self, code: u32) -> Option<char> {
        match self {
            GlyphSet::Ascii | GlyphSet::AltCharset => char::from_u32(code),
            GlyphSet::Katakana => KATAKANA.get(code as usize).copied(),
        }
    }

    /// Character for `code`, `'?'` outside the set
    pub fn glyph(self, code: u32) -> char {
        self.lookup(code).unwrap_or('?')
    }

    /// Lambda mode only makes sense where the glyph set is not a custom font
    pub fn supports_lambda(self) -> bool {
        self != GlyphSet::AltCharset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_map_to_glyphs() {
        for set in [GlyphSet::Ascii, GlyphSet::AltCharset, GlyphSet::Katakana] {
            let (min, max) = set.code_range();
            assert!(min > 0 && min < max);
            for code in min..max {
                assert!(set.lookup(code).is_some(), "{set:?} code {code}");
            }
        }
        assert_eq!(GlyphSet::Ascii.glyph(63), '?');
        assert_eq!(GlyphSet::Katakana.lookup(44), None);
        assert_eq!(GlyphSet::Katakana.glyph(44), '?');
    }

    #[test]
    fn test_ascii_glyphs() {
        assert_eq!(GlyphSet::Ascii.glyph(33), '!');
        assert_eq!(GlyphSet::Ascii.glyph(122), 'z');
        assert_eq!(GlyphSet::AltCharset.glyph(166), '¦');
        assert_eq!(GlyphSet::Katakana.glyph(43), 'Z');
    }

    #[test]
    fn test_lambda_support() {
        assert!(GlyphSet::Ascii.supports_lambda());
        assert!(!GlyphSet::AltCharset.supports_lambda());
    }
}
