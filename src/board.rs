//! The board representation: a row-major grid of squares.

use std::fmt;

use crate::config::Settings;
use crate::constants::{Color, Kind, Square};
use crate::r#move::Position;

/// A `width x height` grid of squares, row-major from rank 0 upward.
///
/// There is exactly one board per game. Move application, undo and the
/// capture-chain search all mutate it in place and restore it; it is never
/// cloned during search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    squares: Vec<Square>,
}

impl Board {
    /// An empty board, mainly for setting up custom positions.
    pub fn empty(width: i32, height: i32) -> Board {
        Board {
            width,
            height,
            squares: vec![Square::Empty; (width * height) as usize],
        }
    }

    /// The starting position for the given settings: the first
    /// `rows_per_side` ranks hold White men on the dark squares
    /// (`x % 2 != y % 2`), the last `rows_per_side` ranks the Black men,
    /// everything else empty.
    pub fn starting_position(settings: &Settings) -> Board {
        let mut board = Board::empty(settings.width, settings.height);
        for y in 0..settings.rows_per_side {
            for x in 0..settings.width {
                if x % 2 != y % 2 {
                    board.set(Position::new(x, y), Square::Piece(Color::White, Kind::Man));
                }
            }
        }
        for y in settings.height - settings.rows_per_side..settings.height {
            for x in 0..settings.width {
                if x % 2 != y % 2 {
                    board.set(Position::new(x, y), Square::Piece(Color::Black, Kind::Man));
                }
            }
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.is_valid(self.width, self.height)
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(self.in_bounds(pos), "off-board access at {pos}");
        (pos.y * self.width + pos.x) as usize
    }

    pub fn get(&self, pos: Position) -> Square {
        self.squares[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, square: Square) {
        let idx = self.index(pos);
        self.squares[idx] = square;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    pub fn swap(&mut self, a: Position, b: Position) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.squares.swap(ia, ib);
    }

    /// Every square occupied by the given color, by full scan. No piece
    /// list is maintained on the side, so this is the single source of
    /// truth for piece discovery.
    pub fn pieces_of(&self, color: Color) -> Vec<Position> {
        let mut pieces = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Position::new(x, y);
                if self.get(pos).color() == Some(color) {
                    pieces.push(pos);
                }
            }
        }
        pieces
    }

    pub fn count_of(&self, color: Color) -> i32 {
        self.squares
            .iter()
            .filter(|sq| sq.color() == Some(color))
            .count() as i32
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            write!(f, "{:>2} | ", y + 1)?;
            for x in 0..self.width {
                write!(f, "{} ", self.get(Position::new(x, y)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "     ")?;
        for x in 0..self.width {
            write!(f, "{} ", (b'a' + x as u8) as char)?;
        }
        writeln!(f)
    }
}
