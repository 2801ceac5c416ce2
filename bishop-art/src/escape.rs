//! ANSI escape sequences used to animate frames in place.

use core::fmt;

/// Select Graphic Rendition: reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// 24-bit color.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,

    /// Green channel.
    pub g: u8,

    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Rgb {
        Rgb { r, g, b }
    }
}

/// Move the cursor up the given number of lines: `ESC [ n A`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CursorUp(pub usize);

impl fmt::Display for CursorUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}A", self.0)
    }
}

/// Move the cursor down the given number of lines: `ESC [ n B`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CursorDown(pub usize);

impl fmt::Display for CursorDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}B", self.0)
    }
}

/// Set a 24-bit foreground color: `ESC [ 38;2;r;g;b m`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Foreground(pub Rgb);

impl fmt::Display for Foreground {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "\x1b[38;2;{r};{g};{b}m")
    }
}
