//! Drawing the snake session
//!
//! `TuiRenderer` backs real-time mode; `PlainRenderer` prints whole frames for
//! turn-based mode.

pub mod plain;
pub mod tui;

use anyhow::Result;

use crate::game::{Cell, GameSession};

pub use plain::PlainRenderer;
pub use tui::TuiRenderer;

pub const HEAD_GLYPH: char = ';';
pub const BODY_GLYPH: char = '#';
pub const FOOD_GLYPH: char = '*';
pub const WALL_GLYPH: char = '#';

/// Short messages the turn-based loop shows between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidMove,
    StillPaused,
    Quitting,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::InvalidMove => "Invalid move, press ENTER to continue...",
            Notice::StillPaused => "Game is paused. Press P to resume.",
            Notice::Quitting => "Quitting game.",
        }
    }
}

pub trait Renderer {
    /// Draw the whole session: board, score and status
    fn draw(&mut self, session: &GameSession) -> Result<()>;

    fn notify(&mut self, _notice: Notice) -> Result<()> {
        Ok(())
    }
}

pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Wall => WALL_GLYPH,
        Cell::Body => BODY_GLYPH,
        Cell::Head => HEAD_GLYPH,
        Cell::Food => FOOD_GLYPH,
    }
}
