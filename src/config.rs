//! Game configuration: board dimensions and rule toggles.

use thiserror::Error;

use crate::constants::Color;

/// Boards wider or taller than this are rejected; it keeps coordinate
/// arithmetic and evaluation scores comfortably inside `i32`.
pub const MAX_BOARD_DIM: i32 = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("board {width}x{height} is outside the supported 4..={max} range")]
    BadDimensions { width: i32, height: i32, max: i32 },
    #[error("{rows} starting rows per side leave no free rank on a board of height {height}")]
    TooManyRows { rows: i32, height: i32 },
    #[error("board is {board_width}x{board_height} but the settings say {width}x{height}")]
    BoardMismatch {
        board_width: i32,
        board_height: i32,
        width: i32,
        height: i32,
    },
}

/// Rule configuration, immutable once the game is created.
///
/// The move generator currently enforces `must_take` and
/// `must_take_longest` unconditionally, whatever they are set to;
/// `passing_promotion` and `orthogonal_captures` are accepted and not
/// consulted at all. See DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub width: i32,
    pub height: i32,
    /// How many of the first/last rows are filled with men at the start.
    pub rows_per_side: i32,
    pub white_starts: bool,
    /// Cosmetic: whether the bottom-right square renders as a light square.
    pub bottom_right_light: bool,
    pub must_take: bool,
    pub must_take_longest: bool,
    pub passing_promotion: bool,
    pub backward_capture: bool,
    pub orthogonal_captures: bool,
}

impl Settings {
    /// International draughts: 10x10, four starting rows, men capture
    /// backward.
    pub fn international() -> Settings {
        Settings {
            width: 10,
            height: 10,
            rows_per_side: 4,
            white_starts: true,
            bottom_right_light: true,
            must_take: true,
            must_take_longest: true,
            passing_promotion: false,
            backward_capture: true,
            orthogonal_captures: false,
        }
    }

    /// English draughts: 8x8, three starting rows, forward captures only.
    pub fn english() -> Settings {
        Settings {
            width: 8,
            height: 8,
            rows_per_side: 3,
            backward_capture: false,
            ..Settings::international()
        }
    }

    /// Rejects configurations the board generator and move generator cannot
    /// handle sensibly.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width < 4
            || self.height < 4
            || self.width > MAX_BOARD_DIM
            || self.height > MAX_BOARD_DIM
        {
            return Err(SettingsError::BadDimensions {
                width: self.width,
                height: self.height,
                max: MAX_BOARD_DIM,
            });
        }
        if self.rows_per_side < 1 || self.rows_per_side * 2 >= self.height {
            return Err(SettingsError::TooManyRows {
                rows: self.rows_per_side,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn starting_color(&self) -> Color {
        if self.white_starts {
            Color::White
        } else {
            Color::Black
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::international()
    }
}
