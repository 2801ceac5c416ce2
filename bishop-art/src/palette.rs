//! Glyph palettes used to depict visit counts.

use crate::{Error, Result};
use core::{fmt, str};

/// Glyph for the start square while the bishop is elsewhere.
pub const START_GLYPH: char = 'S';

/// Glyph for the bishop's square in the final frame.
pub const END_GLYPH: char = 'E';

/// Glyph for the bishop's square while walking (BLACK CHESS BISHOP).
pub const BISHOP_GLYPH: char = '\u{265d}';

/// Number of glyphs in every palette.
const PALETTE_LEN: usize = 15;

/// `ascii` palette name.
const ASCII: &str = "ascii";

/// `block` palette name.
const BLOCK: &str = "block";

/// `drawing` palette name.
const DRAWING: &str = "drawing";

/// The classic OpenSSH randomart characters.
const ASCII_GLYPHS: [char; PALETTE_LEN] = [
    ' ', '.', 'o', '+', '=', '*', 'B', 'O', 'X', '@', '%', '&', '#', '/', '^',
];

/// Unicode Block Elements.
const BLOCK_GLYPHS: [char; PALETTE_LEN] = [
    ' ', '\u{2591}', '\u{2592}', '\u{2593}', '\u{2582}', '\u{2584}', '\u{2586}', '\u{259a}',
    '\u{259e}', '\u{259b}', '\u{259c}', '\u{2599}', '\u{259f}', '\u{2587}', '\u{2588}',
];

/// Unicode Box Drawing.
const DRAWING_GLYPHS: [char; PALETTE_LEN] = [
    ' ', '\u{2551}', '\u{2562}', '\u{2553}', '\u{2564}', '\u{2555}', '\u{2566}', '\u{2557}',
    '\u{2568}', '\u{2559}', '\u{256a}', '\u{255b}', '\u{256c}', '\u{255d}', '\u{256e}',
];

/// Palette mapping visit counts to glyphs.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Palette {
    /// Plain ASCII characters, as used by OpenSSH.
    #[default]
    Ascii,

    /// Characters from the Unicode Block Elements set.
    Block,

    /// Characters from the Unicode Box Drawing set.
    Drawing,
}

impl Palette {
    /// Get the string identifier which corresponds to this palette.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => ASCII,
            Self::Block => BLOCK,
            Self::Drawing => DRAWING,
        }
    }

    /// All glyphs in the palette, in order of increasing visit count.
    pub fn glyphs(self) -> &'static [char] {
        match self {
            Self::Ascii => &ASCII_GLYPHS,
            Self::Block => &BLOCK_GLYPHS,
            Self::Drawing => &DRAWING_GLYPHS,
        }
    }

    /// Glyph for a square visited `count` times.
    ///
    /// Counts past the end of the palette saturate at its last glyph.
    pub fn glyph(self, count: u8) -> char {
        let glyphs = self.glyphs();
        let index = usize::from(count).min(glyphs.len().saturating_sub(1));
        glyphs.get(index).copied().unwrap_or(' ')
    }
}

impl AsRef<str> for Palette {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Palette {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            ASCII => Ok(Self::Ascii),
            BLOCK => Ok(Self::Block),
            DRAWING => Ok(Self::Drawing),
            _ => Err(Error::PaletteUnknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BISHOP_GLYPH, END_GLYPH, Palette, START_GLYPH};
    use crate::Error;

    const PALETTES: &[Palette] = &[Palette::Ascii, Palette::Block, Palette::Drawing];

    #[test]
    fn glyph_lookup() {
        assert_eq!(Palette::Ascii.glyph(0), ' ');
        assert_eq!(Palette::Ascii.glyph(1), '.');
        assert_eq!(Palette::Ascii.glyph(5), '*');
        assert_eq!(Palette::Block.glyph(1), '░');
        assert_eq!(Palette::Drawing.glyph(1), '║');
    }

    #[test]
    fn glyph_saturates() {
        for &palette in PALETTES {
            let last = *palette.glyphs().last().unwrap();
            assert_eq!(palette.glyphs().len(), 15);
            assert_eq!(palette.glyph(14), last);
            assert_eq!(palette.glyph(15), last);
            assert_eq!(palette.glyph(u8::MAX), last);
        }

        assert_eq!(Palette::Ascii.glyph(14), '^');
    }

    #[test]
    fn reserved_glyphs_are_not_in_palettes() {
        for &palette in PALETTES {
            for reserved in [START_GLYPH, END_GLYPH, BISHOP_GLYPH] {
                assert!(!palette.glyphs().contains(&reserved));
            }
        }
    }

    #[test]
    fn names() {
        for &palette in PALETTES {
            assert_eq!(palette.as_str().parse::<Palette>(), Ok(palette));
        }

        assert_eq!("rainbow".parse::<Palette>(), Err(Error::PaletteUnknown));
    }
}
