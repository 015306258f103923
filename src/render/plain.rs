use std::io::Write;

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use super::{Notice, Renderer, glyph};
use crate::game::{Cell, EndReason, GameSession, Status};

const PROMPT: &str = "Move (w/a/s/d), P to pause/resume, or q to quit: ";

/// Whole-frame text output for turn-based play
pub struct PlainRenderer<W: Write> {
    out: W,
    /// Clear the screen before each frame and colour the head
    ansi: bool,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, session: &GameSession) -> Result<()> {
        let grid = session.state().to_grid();
        for row in grid.rows() {
            let mut line = String::with_capacity(row.len());
            for cell in row {
                match cell {
                    Cell::Head if self.ansi => line.push_str(&glyph(*cell).red().to_string()),
                    _ => line.push(glyph(*cell)),
                }
            }
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn draw(&mut self, session: &GameSession) -> Result<()> {
        let state = session.state();

        if self.ansi {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear screen")?;
        }

        writeln!(
            self.out,
            "Score: {} | Board Size: {}x{}",
            state.score, state.width, state.height
        )?;

        if session.status() == Status::Paused {
            let banner = "--- PAUSED (Press P to continue) ---";
            if self.ansi {
                writeln!(self.out, "{}", banner.red())?;
            } else {
                writeln!(self.out, "{banner}")?;
            }
        }

        self.write_board(session)?;

        match session.status() {
            Status::Over(EndReason::Quit) => {}
            Status::Over(reason) => {
                let title = match reason {
                    EndReason::BoardFull => "YOU FILLED THE BOARD!",
                    _ => "GAME OVER!",
                };
                let message = format!("{title} Final Score: {}", state.score);
                if self.ansi {
                    writeln!(self.out, "\n{}", message.red())?;
                } else {
                    writeln!(self.out, "\n{message}")?;
                }
                writeln!(
                    self.out,
                    "Exiting in {} seconds...",
                    session.config().game_over_hold.as_secs()
                )?;
            }
            Status::Running | Status::Paused => write!(self.out, "{PROMPT}")?,
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> Result<()> {
        writeln!(self.out, "{}", notice.text())?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, GameConfig, GameEngine, Position};

    fn session() -> GameSession {
        let mut session = GameSession::with_engine(GameEngine::with_seed(GameConfig::small(), 9));
        session.state_mut().food = Some(Position::new(2, 7));
        session
    }

    fn output(renderer: PlainRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_frame_layout() {
        let mut renderer = PlainRenderer::new(Vec::new(), false);
        renderer.draw(&session()).unwrap();
        let text = output(renderer);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Score: 0 | Board Size: 10x10");
        assert_eq!(lines[1], "##########");
        assert_eq!(lines[3], "#      * #");
        assert_eq!(lines[6], "##;      #");
        assert_eq!(lines[10], "##########");
        assert_eq!(lines[11], PROMPT);
    }

    #[test]
    fn test_paused_banner() {
        let mut session = session();
        session.apply(Command::TogglePause);

        let mut renderer = PlainRenderer::new(Vec::new(), false);
        renderer.draw(&session).unwrap();

        assert!(output(renderer).contains("--- PAUSED (Press P to continue) ---"));
    }

    #[test]
    fn test_game_over_message() {
        let mut session = session();
        session.state_mut().score = 20;
        for _ in 0..10 {
            session.apply(Command::Tick(crate::game::Action::Continue));
        }
        assert!(session.is_over());

        let mut renderer = PlainRenderer::new(Vec::new(), false);
        renderer.draw(&session).unwrap();
        let text = output(renderer);

        assert!(text.contains("GAME OVER! Final Score: 20"));
        assert!(text.contains("Exiting in 4 seconds..."));
        assert!(!text.contains(PROMPT));
    }

    #[test]
    fn test_board_full_message() {
        let mut session = crate::game::session::tests::last_food_session();
        session.apply(Command::Tick(crate::game::Action::Continue));

        let mut renderer = PlainRenderer::new(Vec::new(), false);
        renderer.draw(&session).unwrap();
        let text = output(renderer);

        assert!(text.contains("YOU FILLED THE BOARD! Final Score: 10"));
        assert!(!text.contains("GAME OVER!"));
        assert!(!text.contains(PROMPT));
    }

    #[test]
    fn test_notice() {
        let mut renderer = PlainRenderer::new(Vec::new(), false);
        renderer.notify(Notice::InvalidMove).unwrap();

        assert_eq!(output(renderer), "Invalid move, press ENTER to continue...\n");
    }

    #[test]
    fn test_ansi_colours_head() {
        let mut renderer = PlainRenderer::new(Vec::new(), true);
        renderer.draw(&session()).unwrap();

        assert!(output(renderer).contains("\u{1b}["));
    }
}
