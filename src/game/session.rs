//! Session state machine
//!
//! A session is Running, Paused or Over. Both loop variants drive it through
//! [`GameSession::apply`], so direction rules and collision/food ordering are
//! shared.
//!
//! ```text
//! Running --TogglePause--> Paused --TogglePause--> Running
//! Running|Paused --Quit--> Over(Quit)
//! Running --Tick, crash--> Over(Collision)
//! Running --Tick, no room for food--> Over(BoardFull)
//! ```

use tracing::info;

use super::{
    action::Command,
    config::GameConfig,
    engine::GameEngine,
    rules::CollisionType,
    state::GameState,
};
use crate::metrics::GameMetrics;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Collision(CollisionType),
    Quit,
    /// The snake filled the interior
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Over(EndReason),
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The snake moved and survived
    Stepped { ate_food: bool },
    Paused,
    Resumed,
    /// A tick arrived while paused
    Idle,
    /// The session just became Over
    Ended(EndReason),
    /// The session was already Over; nothing changed
    Finished,
}

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    status: Status,
    metrics: GameMetrics,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    /// Start a session on an existing engine (e.g. a seeded one)
    pub fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        info!(
            height = state.height,
            width = state.width,
            speed_ms = state.speed.as_millis() as u64,
            "snake session started"
        );

        Self {
            engine,
            state,
            status: Status::Running,
            metrics: GameMetrics::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the board, for setting up scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// Feed one command through the state machine
    pub fn apply(&mut self, command: Command) -> Transition {
        if self.is_over() {
            return Transition::Finished;
        }

        match command {
            Command::Quit => self.end(EndReason::Quit),
            Command::TogglePause => {
                if self.status == Status::Paused {
                    self.status = Status::Running;
                    info!("resumed");
                    Transition::Resumed
                } else {
                    self.status = Status::Paused;
                    info!("paused");
                    Transition::Paused
                }
            }
            Command::Tick(_) if self.status == Status::Paused => Transition::Idle,
            Command::Tick(action) => {
                let result = self.engine.step(&mut self.state, action);
                self.metrics.on_tick(result.info.ate_food);

                if !result.terminated {
                    return Transition::Stepped {
                        ate_food: result.info.ate_food,
                    };
                }

                let reason = match result.info.collision_type {
                    Some(collision) => EndReason::Collision(collision),
                    None => EndReason::BoardFull,
                };
                self.end(reason)
            }
        }
    }

    fn end(&mut self, reason: EndReason) -> Transition {
        self.status = Status::Over(reason);
        self.metrics.update();
        info!(
            ?reason,
            score = self.state.score,
            length = self.state.snake.len(),
            ticks = self.metrics.ticks,
            "game over"
        );
        Transition::Ended(reason)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::{Action, Direction, Position, Snake};

    fn new_session() -> GameSession {
        let mut session = GameSession::with_engine(GameEngine::with_seed(GameConfig::small(), 11));
        session.state_mut().food = Some(Position::new(1, 1));
        session
    }

    /// 4×4 board whose 2×2 interior has one free cell, holding the food, right
    /// in front of the head
    pub(crate) fn last_food_session() -> GameSession {
        let mut session = GameSession::with_engine(GameEngine::with_seed(GameConfig::new(4, 4), 3));
        *session.state_mut() = GameState::new(
            Snake {
                body: vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)],
                direction: Direction::Right,
            },
            Some(Position::new(1, 2)),
            4,
            4,
            Duration::ZERO,
        );
        session
    }

    #[test]
    fn test_starts_running() {
        let session = new_session();
        assert_eq!(session.status(), Status::Running);
        assert!(!session.is_over());
    }

    #[test]
    fn test_pause_toggle() {
        let mut session = new_session();

        assert_eq!(session.apply(Command::TogglePause), Transition::Paused);
        assert_eq!(session.status(), Status::Paused);
        assert_eq!(session.apply(Command::TogglePause), Transition::Resumed);
        assert_eq!(session.status(), Status::Running);
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut session = new_session();
        let before = session.state().clone();

        session.apply(Command::TogglePause);
        for _ in 0..5 {
            let t = session.apply(Command::Tick(Action::Move(Direction::Up)));
            assert_eq!(t, Transition::Idle);
        }

        assert_eq!(session.state(), &before);
        assert_eq!(session.metrics().ticks, 0);
    }

    #[test]
    fn test_quit_from_running_and_paused() {
        let mut session = new_session();
        assert_eq!(session.apply(Command::Quit), Transition::Ended(EndReason::Quit));
        assert_eq!(session.status(), Status::Over(EndReason::Quit));

        let mut session = new_session();
        session.apply(Command::TogglePause);
        assert_eq!(session.apply(Command::Quit), Transition::Ended(EndReason::Quit));
    }

    #[test]
    fn test_over_is_terminal() {
        let mut session = new_session();
        session.apply(Command::Quit);

        assert_eq!(session.apply(Command::TogglePause), Transition::Finished);
        assert_eq!(session.apply(Command::Tick(Action::Continue)), Transition::Finished);
        assert_eq!(session.status(), Status::Over(EndReason::Quit));
    }

    #[test]
    fn test_tick_moves_and_counts() {
        let mut session = new_session();
        let head = session.state().snake.head();

        let t = session.apply(Command::Tick(Action::Continue));

        assert_eq!(t, Transition::Stepped { ate_food: false });
        assert_eq!(session.state().snake.head(), head.moved_by(0, 1));
        assert_eq!(session.metrics().ticks, 1);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut session = new_session();
        let head = session.state().snake.head();

        session.apply(Command::Tick(Action::Move(Direction::Left)));

        assert_eq!(session.state().snake.direction, Direction::Right);
        assert_eq!(session.state().snake.head(), head.moved_by(0, 1));
    }

    #[test]
    fn test_wall_crash_ends_session() {
        let mut session = new_session();

        // Head starts at (5, 2); the fifth step up lands on row 0
        let mut last = Transition::Idle;
        for _ in 0..5 {
            last = session.apply(Command::Tick(Action::Move(Direction::Up)));
            if session.is_over() {
                break;
            }
        }

        assert_eq!(last, Transition::Ended(EndReason::Collision(CollisionType::Wall)));
        assert_eq!(session.state().snake.head(), Position::new(0, 2));
    }

    #[test]
    fn test_filling_board_ends_session() {
        let mut session = last_food_session();

        let t = session.apply(Command::Tick(Action::Continue));

        assert_eq!(t, Transition::Ended(EndReason::BoardFull));
        assert_eq!(session.status(), Status::Over(EndReason::BoardFull));
        assert_eq!(session.state().score, 10);
        assert_eq!(session.state().snake.len(), 4);
        assert_eq!(session.metrics().foods_eaten, 1);
        assert_eq!(session.apply(Command::Tick(Action::Continue)), Transition::Finished);
    }
}
