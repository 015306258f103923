use std::fmt;

use tracing::info;

use super::board::{Board, Mark, SIZE, check_winner, is_board_full};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// A move the turn engine refused; the same player moves again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds { row: usize, col: usize },
    Occupied { row: usize, col: usize },
    Finished,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { .. } => {
                write!(f, "Invalid input. Row and column must be between 0 and 2.")
            }
            MoveError::Occupied { .. } => write!(f, "This spot is already taken. Try again."),
            MoveError::Finished => write!(f, "The game is already over."),
        }
    }
}

impl std::error::Error for MoveError {}

/// Typed coordinate input that could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::NotANumber(_) => write!(f, "Invalid input. Please enter a number."),
            CoordinateError::OutOfRange(_) => {
                write!(f, "Invalid input. Row and column must be between 0 and 2.")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Parse one typed row or column (0-2)
pub fn parse_coordinate(input: &str) -> Result<usize, CoordinateError> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CoordinateError::NotANumber(trimmed.to_string()))?;

    usize::try_from(value)
        .ok()
        .filter(|v| *v < SIZE)
        .ok_or(CoordinateError::OutOfRange(value))
}

/// Two-player turn engine. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    board: Board,
    current: Mark,
    outcome: Option<Outcome>,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is
    pub fn current_player(&self) -> Mark {
        self.current
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Place the current player's mark
    ///
    /// On success the turn passes to the other player unless the move ended
    /// the game. On error nothing changes.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Option<Outcome>, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::Finished);
        }

        match self.board.get(row, col) {
            None => return Err(MoveError::OutOfBounds { row, col }),
            Some(Mark::Empty) => {}
            Some(_) => return Err(MoveError::Occupied { row, col }),
        }

        self.board.set(row, col, self.current);
        info!(player = %self.current, row, col, "mark placed");

        self.outcome = if let Some(winner) = check_winner(&self.board) {
            Some(Outcome::Win(winner))
        } else if is_board_full(&self.board) {
            Some(Outcome::Draw)
        } else {
            self.current = self.current.other();
            None
        };

        if let Some(outcome) = self.outcome {
            info!(?outcome, "game finished");
        }
        Ok(self.outcome)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
