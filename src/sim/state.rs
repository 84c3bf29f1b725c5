//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::entity::Colour;
use super::paddle::Paddle;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball parked at the centre, waiting for the serve input
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
}

/// Left or right half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Waiting -> Playing
    Served,
    /// Playing -> Waiting; `score` is the scorer's new number
    Goal { scorer: Side, score: u8 },
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Human-controlled paddle, on the left
    pub player: Paddle,
    /// Computer-controlled paddle, on the right
    pub computer: Paddle,
    pub ball: Ball,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Colour::WHITE)
    }
}

impl GameState {
    /// Create a new game with every entity drawn in `colour`
    pub fn new(colour: Colour) -> Self {
        Self {
            phase: GamePhase::Waiting,
            player: Paddle::player(Vec2::new(50.0, WINDOW_HEIGHT as f32 - 100.0), colour),
            computer: Paddle::player(Vec2::new(WINDOW_WIDTH as f32 - 50.0, 100.0), colour),
            ball: Ball::serve(colour),
            time_ticks: 0,
        }
    }

    /// Paddle on the given side
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.computer,
        }
    }
}
