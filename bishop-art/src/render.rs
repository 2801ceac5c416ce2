//! Frame rendering.
//!
//! A frame is the bordered field followed by a carriage return and a
//! cursor-up sequence, so that the next frame overwrites it in place:
//!
//! ```text
//! +-----------------+
//! |                 |
//! |         .       |
//! |        . ♝      |
//! |       .         |
//! |        S        |
//! |                 |
//! |                 |
//! |                 |
//! |                 |
//! +-----------------+
//! ```

use crate::{
    BISHOP_GLYPH, END_GLYPH, FRAME_LINES, Palette, Phase, Position, Rgb, START, START_GLYPH,
    WIDTH, Walker,
    escape::{self, CursorUp},
};
use core::fmt::{self, Write};

/// Renders frames of a walk with a given palette.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Renderer {
    palette: Palette,
    color: Option<Rgb>,
}

impl Renderer {
    /// Create a renderer using the given palette.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            color: None,
        }
    }

    /// Note that frames are drawn in `color`, so the final frame resets it.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Palette used for unreserved squares.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Color the frames are drawn in, if any.
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Render the current state of `walker`.
    pub fn frame<'a>(&'a self, walker: &'a Walker) -> Frame<'a> {
        Frame {
            renderer: self,
            walker,
        }
    }

    /// Glyph for the square at `pos`.
    ///
    /// The bishop takes precedence over the start square.
    fn glyph(&self, walker: &Walker, pos: Position) -> char {
        if pos == walker.position() {
            match walker.phase() {
                Phase::Final => END_GLYPH,
                Phase::PreWalk | Phase::Walking => BISHOP_GLYPH,
            }
        } else if pos == START {
            START_GLYPH
        } else {
            self.palette.glyph(walker.field().count(pos))
        }
    }
}

/// A single frame of the animation.
///
/// Use the [`Display`][`fmt::Display`] impl to emit it.
#[derive(Copy, Clone, Debug)]
pub struct Frame<'a> {
    renderer: &'a Renderer,
    walker: &'a Walker,
}

impl Frame<'_> {
    /// Is this the last frame of the walk?
    pub fn is_final(&self) -> bool {
        self.walker.phase() == Phase::Final
    }

    fn fmt_border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{:-<width$}+", "", width = WIDTH)
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_border(f)?;

        for (y, row) in self.walker.field().rows().enumerate() {
            f.write_char('|')?;

            for x in 0..row.len() {
                let glyph = self.renderer.glyph(self.walker, Position::new(x, y));
                f.write_char(glyph)?;
            }

            f.write_str("|\n")?;
        }

        Self::fmt_border(f)?;

        if self.is_final() && self.renderer.color.is_some() {
            f.write_str(escape::RESET)?;
        }

        write!(f, "\r{}", CursorUp(FRAME_LINES))
    }
}
