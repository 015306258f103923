//! Game loops for the two input models
//!
//! Both drive the same [`GameSession`](crate::game::GameSession); they differ
//! only in how input arrives and how long each iteration waits.

pub mod real_time;
pub mod turn_based;

use std::io::{IsTerminal, stderr, stdin};

use anyhow::{Result, bail};
use tracing::info;

use crate::game::GameConfig;

pub use real_time::RealTimeMode;
pub use turn_based::TurnBasedMode;

/// Which input backend drives the snake loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    RealTime,
    TurnBased,
}

impl InputMode {
    /// Real-time when the host can do it, turn-based otherwise
    pub fn detect() -> Self {
        if real_time_available() {
            InputMode::RealTime
        } else {
            InputMode::TurnBased
        }
    }
}

/// Real-time play needs raw keys on stdin and a screen on stderr
pub fn real_time_available() -> bool {
    stdin().is_terminal() && stderr().is_terminal()
}

/// Run one snake session in the given mode
pub async fn play(mode: InputMode, config: GameConfig) -> Result<()> {
    info!(?mode, "starting snake");

    match mode {
        InputMode::RealTime => {
            if !real_time_available() {
                bail!("No real-time input backend available: stdin and stderr must be a terminal");
            }
            RealTimeMode::new(config).run().await
        }
        InputMode::TurnBased => TurnBasedMode::new(config).run().await,
    }
}
