//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is always supplied by the caller
//! - Input arrives as an explicit snapshot, never read from globals
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod entity;
pub mod paddle;
pub mod score;
pub mod state;
pub mod tick;

pub use ai::{Prediction, predict, steer};
pub use ball::{Ball, Goal};
pub use entity::{Colour, Dimensions};
pub use paddle::Paddle;
pub use score::Score;
pub use state::{GameEvent, GamePhase, GameState, Side};
pub use tick::{TickInput, tick};
