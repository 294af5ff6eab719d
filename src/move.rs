//! Move and position value types.

use std::fmt;

use crate::constants::Square;

/// A square coordinate. `x` is the file (column), `y` the rank (row).
/// Signed so that off-board candidates can be formed and then filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn is_valid(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single move: either a quiet step or a whole capture chain.
///
/// `takes` lists every jumped square in chain order and `taken_pieces` the
/// occupant of each at generation time, index-aligned with `takes`. The
/// captured occupants are needed to restore the board when the move is
/// cancelled; pieces only leave the board when the move is committed, not
/// while a chain is being explored.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub origin: Position,
    pub dest: Position,
    pub takes: Vec<Position>,
    pub taken_pieces: Vec<Square>,
}

impl Move {
    pub fn new(
        origin: Position,
        dest: Position,
        takes: Vec<Position>,
        taken_pieces: Vec<Square>,
    ) -> Move {
        debug_assert_eq!(takes.len(), taken_pieces.len());
        Move {
            origin,
            dest,
            takes,
            taken_pieces,
        }
    }

    /// A one-square step with no captures.
    pub fn quiet(origin: Position, dest: Position) -> Move {
        Move::new(origin, dest, Vec::new(), Vec::new())
    }

    pub fn is_capture(&self) -> bool {
        !self.takes.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.dest)?;
        if self.is_capture() {
            write!(f, " x{}", self.takes.len())?;
        }
        Ok(())
    }
}
