use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io::{Write, stderr};
use tokio::time::sleep;
use tracing::warn;

use crate::game::{Action, Command, GameConfig, GameSession, Transition};
use crate::input::{InputSource, KeyAction, TerminalInput};
use crate::render::{Renderer, TuiRenderer};

/// Snake with non-blocking keyboard input
///
/// Each tick polls for at most one key; no key keeps the current direction.
/// After a move the loop sleeps for the current speed.
pub struct RealTimeMode {
    session: GameSession,
}

impl RealTimeMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_session(GameSession::new(config))
    }

    pub fn with_session(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Take over the terminal, play until game over, then restore it
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let result = self.run_in_terminal().await;
        restore_terminal(&mut stderr(), result)
    }

    async fn run_in_terminal(&mut self) -> Result<()> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let mut renderer = TuiRenderer::new(CrosstermBackend::new(stderr))?;
        let mut input = TerminalInput::new(self.session.config().poll_timeout);

        self.run_loop(&mut input, &mut renderer).await
    }

    pub async fn run_loop<I: InputSource, R: Renderer>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
    ) -> Result<()> {
        renderer.draw(&self.session)?;

        loop {
            let command = match input.next_action().await {
                KeyAction::GameAction(action) => Command::Tick(action),
                KeyAction::TogglePause => Command::TogglePause,
                KeyAction::Quit => Command::Quit,
                KeyAction::None => Command::Tick(Action::Continue),
            };

            match self.session.apply(command) {
                Transition::Stepped { .. } => {
                    renderer.draw(&self.session)?;
                    sleep(self.session.state().speed).await;
                }
                Transition::Paused | Transition::Resumed => renderer.draw(&self.session)?,
                Transition::Idle => sleep(self.session.config().pause_idle).await,
                Transition::Ended(_) => {
                    renderer.draw(&self.session)?;
                    sleep(self.session.config().game_over_hold).await;
                    break;
                }
                Transition::Finished => break,
            }
        }

        Ok(())
    }
}

/// Undo raw mode and the alternate screen, attempting both steps
///
/// The game's own error takes precedence over a cleanup failure.
fn restore_terminal<W: Write>(out: &mut W, result: Result<()>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(out, LeaveAlternateScreen, Show).context("Failed to leave alternate screen");

    if let Err(err) = raw.as_ref().and(screen.as_ref()) {
        warn!(%err, "terminal not fully restored");
    }
    result.and(raw).and(screen)
}
