use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

use super::{
    action::{Action, Direction},
    config::GameConfig,
    rules::{CollisionType, collision_kind},
    state::{GameState, Position, Snake},
};

const INITIAL_SNAKE_LENGTH: usize = 2;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// Food could not be placed because no free interior cell is left
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn terminal(info: StepInfo) -> Self {
        Self {
            terminated: true,
            info,
        }
    }
}

/// The game engine that handles movement, collisions and food
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    ///
    /// The snake starts at (H/2, W/4) heading right, with one segment behind it.
    pub fn reset(&mut self) -> GameState {
        let head = Position::new(
            (self.config.height / 2) as i32,
            (self.config.width / 4) as i32,
        );
        let snake = Snake::new(head, Direction::Right, INITIAL_SNAKE_LENGTH);
        let food = self.place_food(&snake.body);

        GameState::new(
            snake,
            food,
            self.config.height,
            self.config.width,
            self.config.initial_speed,
        )
    }

    /// Execute one step of the game
    ///
    /// Collision is resolved before food, so a fatal move never scores.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult::terminal(StepInfo {
                ate_food: false,
                collision_type: None,
                board_full: false,
            });
        }

        if let Action::Move(direction) = action {
            state.snake.turn(direction);
        }

        let new_head = state.snake.push_head();
        state.steps += 1;

        if let Some(collision_type) =
            collision_kind(new_head, &state.snake.body, state.height, state.width)
        {
            state.is_alive = false;
            debug!(?collision_type, ?new_head, "snake crashed");
            return StepResult::terminal(StepInfo {
                ate_food: false,
                collision_type: Some(collision_type),
                board_full: false,
            });
        }

        let ate_food = state.food == Some(new_head);
        if !ate_food {
            state.snake.drop_tail();
            return StepResult {
                terminated: false,
                info: StepInfo {
                    ate_food,
                    collision_type: None,
                    board_full: false,
                },
            };
        }

        state.score += self.config.score_per_food;
        let speed = self.speed_for_score(state.score);
        if speed != state.speed {
            debug!(score = state.score, speed_ms = speed.as_millis() as u64, "speed up");
            state.speed = speed;
        }

        state.food = self.place_food(&state.snake.body);
        let board_full = state.food.is_none();
        if board_full {
            state.is_alive = false;
        }
        debug!(score = state.score, length = state.snake.len(), "food eaten");

        StepResult {
            terminated: board_full,
            info: StepInfo {
                ate_food,
                collision_type: None,
                board_full,
            },
        }
    }

    /// Tick delay for a score
    ///
    /// Shrinks by `speed_step` per full `speed_step_score` points, floored at
    /// `min_speed`.
    pub fn speed_for_score(&self, score: u32) -> Duration {
        let steps = score.checked_div(self.config.speed_step_score).unwrap_or(0);
        let cut = self
            .config
            .speed_step
            .checked_mul(steps)
            .unwrap_or(Duration::MAX);
        self.config
            .initial_speed
            .saturating_sub(cut)
            .max(self.config.min_speed)
    }

    /// Pick a random interior cell not covered by `snake`
    ///
    /// Draws uniformly up to `food_retry_limit` times, then picks uniformly
    /// among the remaining free cells. `None` means the interior is full.
    pub fn place_food(&mut self, snake: &[Position]) -> Option<Position> {
        let (height, width) = (self.config.height as i32, self.config.width as i32);
        if self.config.interior_cells() == 0 {
            return None;
        }

        for _ in 0..self.config.food_retry_limit {
            let pos = Position::new(
                self.rng.gen_range(1..=height - 2),
                self.rng.gen_range(1..=width - 2),
            );
            if !snake.contains(&pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = (1..height - 1)
            .flat_map(|row| (1..width - 1).map(move |col| Position::new(row, col)))
            .filter(|pos| !snake.contains(pos))
            .collect();
        free.choose(&mut self.rng).copied()
    }
}
