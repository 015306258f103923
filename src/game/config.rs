use std::time::Duration;

/// Configuration for a snake session
///
/// Passed by value into the engine and the session; nothing mutates it after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board height in rows, including the wall ring
    pub height: usize,
    /// Board width in columns, including the wall ring
    pub width: usize,

    /// Delay after each tick at score 0
    pub initial_speed: Duration,
    /// Floor for the delay
    pub min_speed: Duration,
    /// How much the delay shrinks per `speed_step_score` points
    pub speed_step: Duration,
    /// Score interval at which the delay shrinks
    pub speed_step_score: u32,
    /// Points per food eaten
    pub score_per_food: u32,

    /// Real-time input poll window per tick
    pub poll_timeout: Duration,
    /// Idle sleep while paused in real-time mode
    pub pause_idle: Duration,
    /// Flat delay used by turn-based mode on resume and on rejected input
    pub turn_delay: Duration,
    /// How long the game over screen stays up before exit
    pub game_over_hold: Duration,

    /// Random draws before food placement falls back to scanning free cells
    pub food_retry_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 40,
            initial_speed: Duration::from_millis(150),
            min_speed: Duration::from_millis(50),
            speed_step: Duration::from_millis(10),
            speed_step_score: 100,
            score_per_food: 10,
            poll_timeout: Duration::from_millis(100),
            pause_idle: Duration::from_millis(100),
            turn_delay: Duration::from_millis(500),
            game_over_hold: Duration::from_secs(4),
            food_retry_limit: 256,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Same board, with every loop delay set to zero
    pub fn without_delays(self) -> Self {
        Self {
            poll_timeout: Duration::ZERO,
            pause_idle: Duration::ZERO,
            turn_delay: Duration::ZERO,
            game_over_hold: Duration::ZERO,
            initial_speed: Duration::ZERO,
            min_speed: Duration::ZERO,
            ..self
        }
    }

    /// Number of cells strictly inside the wall
    pub fn interior_cells(&self) -> usize {
        self.height.saturating_sub(2) * self.width.saturating_sub(2)
    }
}
