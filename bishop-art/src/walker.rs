//! The bishop's walk across the field.

use crate::{Field, Moves, Position, START};

/// Stage of a walk.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Phase {
    /// The bishop sits on the start square and no move has been applied.
    PreWalk,

    /// At least one move has been applied.
    Walking,

    /// The walk is over and the bishop's square is the end square.
    Final,
}

/// A bishop walking over a [`Field`], one move at a time.
#[derive(Clone, Debug)]
pub struct Walker {
    moves: Moves,
    field: Field,
    position: Position,
    steps: usize,
    phase: Phase,
}

impl Walker {
    /// Place a bishop on the start square, ready to walk `moves`.
    pub fn new(moves: Moves) -> Self {
        Self {
            moves,
            field: Field::new(),
            position: START,
            steps: 0,
            phase: Phase::PreWalk,
        }
    }

    /// Walk every move and finish.
    pub fn run(moves: Moves) -> Self {
        let mut walker = Self::new(moves);
        while walker.advance().is_some() {}
        walker.finish();
        walker
    }

    /// Apply the next move and count the visit to the square it lands on.
    ///
    /// Returns the new position, or `None` once every move has been applied
    /// or the walk has been finished.
    pub fn advance(&mut self) -> Option<Position> {
        if self.phase == Phase::Final {
            return None;
        }

        let mv = self.moves.as_slice().get(self.steps).copied()?;
        self.position = self.position.step(mv);
        self.field.visit(self.position);
        self.steps = self.steps.saturating_add(1);
        self.phase = Phase::Walking;
        Some(self.position)
    }

    /// End the walk. The current square becomes the end square.
    pub fn finish(&mut self) {
        self.phase = Phase::Final;
    }

    /// Current square of the bishop.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Visit counters accumulated so far.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Current stage of the walk.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of moves applied so far.
    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// The moves being walked.
    pub fn moves(&self) -> &Moves {
        &self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, Walker};
    use crate::{Move, Moves, Position, START};

    #[test]
    fn start_square_is_not_counted() {
        let walker = Walker::new(Moves::new([Move::UpLeft; Moves::LEN]));
        assert_eq!(walker.phase(), Phase::PreWalk);
        assert_eq!(walker.position(), START);
        assert_eq!(walker.field().total(), 0);
    }

    #[test]
    fn each_move_counts_once() {
        let mut walker = Walker::new(Moves::new([Move::UpRight; Moves::LEN]));

        assert_eq!(walker.advance(), Some(Position::new(9, 3)));
        assert_eq!(walker.phase(), Phase::Walking);
        assert_eq!(walker.field().count(Position::new(9, 3)), 1);
        assert_eq!(walker.field().total(), 1);
    }

    #[test]
    fn walk_ends_after_all_moves() {
        let mut walker = Walker::new(Moves::new([Move::DownRight; Moves::LEN]));
        let mut steps = 0;
        while walker.advance().is_some() {
            steps += 1;
        }

        assert_eq!(steps, Moves::LEN);
        assert_eq!(walker.steps_taken(), Moves::LEN);
        assert_eq!(walker.field().total(), Moves::LEN);
        assert_eq!(walker.phase(), Phase::Walking);

        walker.finish();
        assert_eq!(walker.phase(), Phase::Final);
        assert_eq!(walker.advance(), None);
    }
}
