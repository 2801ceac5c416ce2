//! Animated output to an ANSI terminal.

use crate::{
    FRAME_LINES, Fingerprint, Frame, Renderer, Result, Rgb, Walker,
    escape::{self, CursorDown, Foreground},
};
use std::io::Write;

/// Output stream frames are drawn to.
///
/// Once anything has been drawn, the terminal must be restored by moving the
/// cursor below the frame and resetting colors. [`Terminal::restore`] does so
/// explicitly; dropping the terminal does so on a best-effort basis, which
/// covers early returns and unwinding.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    dirty: bool,
}

impl<W: Write> Terminal<W> {
    /// Wrap the given output stream.
    pub fn new(out: W) -> Self {
        Self { out, dirty: false }
    }

    /// Write the fingerprint on a line of its own.
    pub fn write_digest(&mut self, fingerprint: &Fingerprint) -> Result<()> {
        writeln!(self.out, "{fingerprint}")?;
        Ok(self.out.flush()?)
    }

    /// Draw subsequent frames in the given color.
    pub fn set_color(&mut self, color: Rgb) -> Result<()> {
        self.dirty = true;
        write!(self.out, "{}", Foreground(color))?;
        Ok(())
    }

    /// Draw a frame over the previous one.
    pub fn draw(&mut self, frame: Frame<'_>) -> Result<()> {
        self.dirty = true;
        write!(self.out, "{frame}")?;
        Ok(self.out.flush()?)
    }

    /// Reset colors and move the cursor below the frame.
    ///
    /// Does nothing if nothing was drawn or the terminal was already restored.
    pub fn restore(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        self.dirty = false;
        write!(self.out, "{}{}", escape::RESET, CursorDown(FRAME_LINES))?;
        Ok(self.out.flush()?)
    }

    /// Borrow the underlying output stream.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Animate a walk.
///
/// Draws the initial frame, then one frame per move followed by a call to
/// `pause`, and finally the end frame. An error from `pause` (typically
/// [`Error::Interrupted`][`crate::Error::Interrupted`]) aborts the walk. The
/// terminal is restored on every path.
pub fn animate<W, P>(
    terminal: &mut Terminal<W>,
    renderer: &Renderer,
    mut walker: Walker,
    mut pause: P,
) -> Result<Walker>
where
    W: Write,
    P: FnMut() -> Result<()>,
{
    let mut walk = || -> Result<()> {
        if let Some(color) = renderer.color() {
            terminal.set_color(color)?;
        }

        terminal.draw(renderer.frame(&walker))?;

        while walker.advance().is_some() {
            terminal.draw(renderer.frame(&walker))?;
            pause()?;
        }

        walker.finish();
        terminal.draw(renderer.frame(&walker))
    };

    match walk() {
        Ok(()) => {
            terminal.restore()?;
            Ok(walker)
        }
        Err(err) => {
            let _ = terminal.restore();
            Err(err)
        }
    }
}
