//! Core module - pure game logic with no external dependencies
//!
//! This module contains the simulation: snake kinematics, food placement,
//! scoring and the round state machine. It has zero dependencies on UI or
//! I/O, so everything here is deterministic and unit-testable.

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;

pub use food::Food;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snake::Snake;
