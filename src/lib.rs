//! Terminal games: snake and tic-tac-toe
//!
//! - `game`: snake movement, collision, food and the session state machine
//! - `input`, `render`: the keyboard and screen collaborators of the snake loop
//! - `modes`: the real-time and turn-based snake loops
//! - `tictactoe`: the 3×3 rules and turn engine

pub mod game;
pub mod grid;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod tictactoe;
