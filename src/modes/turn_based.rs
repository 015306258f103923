use anyhow::Result;
use std::io::stdout;
use tokio::time::sleep;

use crate::game::{Command, EndReason, GameConfig, GameSession, Status, Transition};
use crate::input::{InputSource, KeyAction, LineInput};
use crate::render::{Notice, PlainRenderer, Renderer};

/// Snake with one blocking line of input per move
///
/// Nothing happens until a line arrives, so speed has no effect on cadence.
pub struct TurnBasedMode {
    session: GameSession,
}

impl TurnBasedMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_session(GameSession::new(config))
    }

    pub fn with_session(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Play on stdin/stdout
    pub async fn run(&mut self) -> Result<()> {
        let mut input = LineInput::stdin();
        let mut renderer = PlainRenderer::new(stdout(), true);
        self.run_loop(&mut input, &mut renderer).await
    }

    pub async fn run_loop<I: InputSource, R: Renderer>(
        &mut self,
        input: &mut I,
        renderer: &mut R,
    ) -> Result<()> {
        let delay = self.session.config().turn_delay;
        renderer.draw(&self.session)?;

        loop {
            let transition = match input.next_action().await {
                KeyAction::Quit => {
                    renderer.notify(Notice::Quitting)?;
                    self.session.apply(Command::Quit)
                }
                KeyAction::TogglePause => {
                    let transition = self.session.apply(Command::TogglePause);
                    if transition == Transition::Resumed {
                        sleep(delay).await;
                    }
                    transition
                }
                _ if self.session.status() == Status::Paused => {
                    renderer.notify(Notice::StillPaused)?;
                    sleep(delay).await;
                    renderer.draw(&self.session)?;
                    continue;
                }
                KeyAction::None => {
                    renderer.notify(Notice::InvalidMove)?;
                    sleep(delay).await;
                    renderer.draw(&self.session)?;
                    continue;
                }
                KeyAction::GameAction(action) => self.session.apply(Command::Tick(action)),
            };

            match transition {
                Transition::Ended(EndReason::Quit) | Transition::Finished => break,
                Transition::Ended(_) => {
                    renderer.draw(&self.session)?;
                    sleep(self.session.config().game_over_hold).await;
                    break;
                }
                _ => renderer.draw(&self.session)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CollisionType, Direction, GameEngine, Position};
    use crate::modes::tests::Recorder;

    fn mode() -> TurnBasedMode {
        let config = GameConfig::small().without_delays();
        let mut session = GameSession::with_engine(GameEngine::with_seed(config, 33));
        session.state_mut().food = Some(Position::new(8, 8));
        TurnBasedMode::with_session(session)
    }

    #[tokio::test]
    async fn test_one_line_one_tick() {
        let mut mode = mode();
        let mut input = LineInput::new(&b"d\nx\nw\np\nw\np\nq\n"[..]);
        let mut renderer = Recorder::default();

        mode.run_loop(&mut input, &mut renderer).await.unwrap();

        let state = mode.session().state();
        assert_eq!(state.snake.head(), Position::new(4, 3));
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.steps, 2);
        assert_eq!(
            renderer.notices,
            vec![Notice::InvalidMove, Notice::StillPaused, Notice::Quitting]
        );
        assert_eq!(mode.session().status(), Status::Over(EndReason::Quit));
    }

    #[tokio::test]
    async fn test_crash_shows_final_screen() {
        let mut mode = mode();
        let script = "d\n".repeat(10);
        let mut input = LineInput::new(script.as_bytes());
        let mut renderer = Recorder::default();

        mode.run_loop(&mut input, &mut renderer).await.unwrap();

        assert_eq!(
            mode.session().status(),
            Status::Over(EndReason::Collision(CollisionType::Wall))
        );
        assert_eq!(
            renderer.statuses.last(),
            Some(&Status::Over(EndReason::Collision(CollisionType::Wall)))
        );
        assert!(renderer.notices.is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_line_does_not_tick() {
        let mut mode = mode();
        let mut input = LineInput::new(&b"\xff\xfe\nd\n"[..]);
        let mut renderer = Recorder::default();

        mode.run_loop(&mut input, &mut renderer).await.unwrap();

        let state = mode.session().state();
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), Position::new(5, 3));
        assert_eq!(renderer.notices, vec![Notice::InvalidMove, Notice::Quitting]);
        assert_eq!(mode.session().status(), Status::Over(EndReason::Quit));
    }

    #[tokio::test]
    async fn test_end_of_input_quits() {
        let mut mode = mode();
        let mut input = LineInput::new(&b""[..]);
        let mut renderer = Recorder::default();

        mode.run_loop(&mut input, &mut renderer).await.unwrap();

        assert_eq!(mode.session().status(), Status::Over(EndReason::Quit));
        assert_eq!(renderer.notices, vec![Notice::Quitting]);
    }
}
