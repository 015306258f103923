//! Two-player tic-tac-toe on a 3×3 board

pub mod board;
pub mod console;
pub mod game;

pub use board::{Board, Mark, check_winner, is_board_full};
pub use game::{CoordinateError, MoveError, Outcome, TicTacToe, parse_coordinate};
