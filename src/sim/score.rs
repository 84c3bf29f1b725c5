//! Single-digit scoreboard

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Colour;
use crate::consts::*;
use crate::{centre, lerp};

/// A player's score and where it is shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Always in `0..=9`
    pub number: u8,
    pub position: Vec2,
    pub colour: Colour,
    /// Pixel size of one glyph cell
    pub scale: i32,
}

impl Score {
    /// Scoreboard for a paddle at `paddle_position`, pulled toward the centre
    pub fn tally(number: u8, paddle_position: Vec2, colour: Colour) -> Self {
        Self {
            number: number % 10,
            position: Vec2::new(
                lerp(paddle_position.x, centre().x, SCORE_OFFSET_X),
                SCORE_OFFSET_Y,
            ),
            colour,
            scale: SCORE_SCALE,
        }
    }

    /// Count a point. Wraps 9 back to 0 since only single digits can be drawn.
    pub fn increment(&mut self) {
        self.number = if self.number >= 9 { 0 } else { self.number + 1 };
    }
}
