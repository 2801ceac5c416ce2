//! The field the bishop walks on.

use crate::Move;
use core::slice;

/// Width of the field in columns.
pub const WIDTH: usize = 17;

/// Height of the field in rows.
pub const HEIGHT: usize = 9;

/// Starting square of the bishop: the center of the field, rounded down.
pub const START: Position = Position::new(WIDTH / 2, HEIGHT / 2);

/// Visit counters, indexed `[y][x]`.
type Cells = [[u8; WIDTH]; HEIGHT];

/// Square on the field.
///
/// Positions produced by [`Position::step`] are always inside the field.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Position {
    /// Column, `0..WIDTH`.
    pub x: usize,

    /// Row, `0..HEIGHT`.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Take one diagonal step in the direction of `mv`.
    ///
    /// Each axis is clamped to the field independently, so a bishop pushed
    /// against a wall slides along it.
    pub fn step(self, mv: Move) -> Self {
        let x = if mv.dx() < 0 {
            self.x.saturating_sub(1)
        } else {
            self.x.saturating_add(1)
        };

        let y = if mv.dy() < 0 {
            self.y.saturating_sub(1)
        } else {
            self.y.saturating_add(1)
        };

        Self {
            x: x.min(WIDTH.saturating_sub(1)),
            y: y.min(HEIGHT.saturating_sub(1)),
        }
    }

    /// Is this position inside the field?
    pub const fn in_bounds(self) -> bool {
        self.x < WIDTH && self.y < HEIGHT
    }
}

/// Grid of per-square visit counters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Field {
    cells: Cells,
}

impl Field {
    /// Create an empty field with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the bishop has landed on `pos`.
    ///
    /// Positions outside the field have never been visited.
    pub fn count(&self, pos: Position) -> u8 {
        self.cells
            .get(pos.y)
            .and_then(|row| row.get(pos.x))
            .copied()
            .unwrap_or(0)
    }

    /// Record a visit to `pos`.
    pub fn visit(&mut self, pos: Position) {
        if let Some(cell) = self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            *cell = cell.saturating_add(1);
        }
    }

    /// Sum of all visit counters.
    pub fn total(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .fold(0usize, |sum, &count| sum.saturating_add(count.into()))
    }

    /// Iterate over the rows of the field, top to bottom.
    pub fn rows(&self) -> slice::Iter<'_, [u8; WIDTH]> {
        self.cells.iter()
    }
}
