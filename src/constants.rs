//! Piece and player definitions shared across the engine.

/// The two sides of a draughts game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get the opponent of the current player.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Forward row direction for men of this color. White advances toward
    /// higher row indices, Black toward lower ones.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// The kind of a piece, independent of its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Man,
    King,
    /// Long-range sliding capturer. The move generator produces nothing for
    /// it yet; the variant exists so positions using it stay representable.
    FlyingKing,
}

/// The occupant of a board square. `Empty` is distinct from every
/// color/kind combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Empty,
    Piece(Color, Kind),
}

impl Square {
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// The color occupying this square, or `None` if it is empty.
    pub fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::Piece(color, _) => Some(color),
        }
    }

    /// The kind occupying this square, or `None` if it is empty.
    pub fn kind(self) -> Option<Kind> {
        match self {
            Square::Empty => None,
            Square::Piece(_, kind) => Some(kind),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Piece(Color::White, Kind::Man) => 'M',
            Square::Piece(Color::White, Kind::King) => 'K',
            Square::Piece(Color::White, Kind::FlyingKing) => 'F',
            Square::Piece(Color::Black, Kind::Man) => 'm',
            Square::Piece(Color::Black, Kind::King) => 'k',
            Square::Piece(Color::Black, Kind::FlyingKing) => 'f',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' => Some(Square::Empty),
            'M' => Some(Square::Piece(Color::White, Kind::Man)),
            'K' => Some(Square::Piece(Color::White, Kind::King)),
            'F' => Some(Square::Piece(Color::White, Kind::FlyingKing)),
            'm' => Some(Square::Piece(Color::Black, Kind::Man)),
            'k' => Some(Square::Piece(Color::Black, Kind::King)),
            'f' => Some(Square::Piece(Color::Black, Kind::FlyingKing)),
            _ => None,
        }
    }
}

// --- Search Constants ---

/// Larger than any reachable evaluation (the material balance is bounded by
/// the square count, and boards are capped well below this).
pub const SCORE_INF: i32 = 10_000;
