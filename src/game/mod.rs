//! Core snake logic
//!
//! Movement, collision, food and the session state machine, with no terminal
//! dependencies. The loops in `modes` drive it; the tests drive it directly.

pub mod action;
pub mod config;
pub mod engine;
pub mod rules;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Command, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use rules::{CollisionType, check_collision, collision_kind};
pub use session::{EndReason, GameSession, Status, Transition};
pub use state::{Cell, GameState, Position, Snake};
