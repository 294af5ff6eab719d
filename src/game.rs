//! Game state: the board, the side to move, and move application.

use log::debug;
use thiserror::Error;

use crate::board::Board;
use crate::config::{Settings, SettingsError};
use crate::constants::{Color, Square};
use crate::move_gen;
use crate::r#move::Move;

#[derive(Debug, Error, PartialEq)]
pub enum MoveError {
    #[error("move {0} is not legal in the current position")]
    NotLegal(Move),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move has no legal moves; the other side wins.
    Won(Color),
}

/// A running game. Owns the single mutable board; all generation, search
/// and move application go through this exclusive owner.
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    board: Board,
    current_player: Color,
}

impl Game {
    /// Starts a fresh game from validated settings.
    pub fn new(settings: Settings) -> Result<Game, SettingsError> {
        settings.validate()?;
        let board = Board::starting_position(&settings);
        let current_player = settings.starting_color();
        Ok(Game {
            settings,
            board,
            current_player,
        })
    }

    /// Starts from an arbitrary position instead of the generated one.
    pub fn with_position(
        settings: Settings,
        board: Board,
        to_move: Color,
    ) -> Result<Game, SettingsError> {
        settings.validate()?;
        if board.width() != settings.width || board.height() != settings.height {
            return Err(SettingsError::BoardMismatch {
                board_width: board.width(),
                board_height: board.height(),
                width: settings.width,
                height: settings.height,
            });
        }
        Ok(Game {
            settings,
            board,
            current_player: to_move,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// All legal moves for the side to move. The board is borrowed mutably
    /// for the chain search but is unchanged on return.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        move_gen::legal_moves(&mut self.board, &self.settings, self.current_player)
    }

    /// Commits a move: the moving piece trades places with its (empty)
    /// destination square, every captured square is cleared, and the turn
    /// passes.
    ///
    /// The caller must only pass moves obtained from [`Game::legal_moves`]
    /// on this same position, and must pair every `make_move` with a
    /// matching [`Game::cancel_move`] when unwinding. [`Game::play`] is the
    /// checked entry point.
    pub fn make_move(&mut self, mv: &Move) {
        self.board.swap(mv.origin, mv.dest);
        for take in &mv.takes {
            self.board.set(*take, Square::Empty);
        }
        self.current_player = self.current_player.opponent();
    }

    /// Exactly reverses a [`Game::make_move`] of the same move: swaps the
    /// piece back, restores every captured occupant, and returns the turn.
    pub fn cancel_move(&mut self, mv: &Move) {
        self.board.swap(mv.origin, mv.dest);
        for (take, piece) in mv.takes.iter().zip(&mv.taken_pieces) {
            self.board.set(*take, *piece);
        }
        self.current_player = self.current_player.opponent();
    }

    /// Validates `mv` against the current legal-move set, then commits it.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(mv) {
            return Err(MoveError::NotLegal(mv.clone()));
        }
        debug!("{:?} plays {mv}", self.current_player);
        self.make_move(mv);
        Ok(())
    }

    /// Explicit game-outcome signal: a side with no legal moves has lost,
    /// whether it is blocked or out of pieces.
    pub fn status(&mut self) -> GameStatus {
        if self.legal_moves().is_empty() {
            GameStatus::Won(self.current_player.opponent())
        } else {
            GameStatus::InProgress
        }
    }
}
