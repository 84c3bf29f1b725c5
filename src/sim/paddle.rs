//! Paddle movement and boundary handling

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Colour, Dimensions};
use super::score::Score;
use super::tick::TickInput;
use crate::consts::*;

/// A player's paddle, owning that player's score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub position: Vec2,
    pub dimensions: Dimensions,
    /// Speed per axis; only the magnitude of each component is used
    pub velocity: Vec2,
    pub colour: Colour,
    pub score: Score,
}

impl Paddle {
    /// A ready-to-play paddle with a zeroed scoreboard
    pub fn player(position: Vec2, colour: Colour) -> Self {
        Self {
            position,
            dimensions: Dimensions::rect(PADDLE_WIDTH, PADDLE_HEIGHT),
            velocity: Vec2::new(0.0, PADDLE_SPEED),
            colour,
            score: Score::tally(0, position, colour),
        }
    }

    /// Move according to the directional inputs, then keep the paddle on screen
    ///
    /// Each direction is handled independently, so diagonal movement is legal.
    /// Velocity is left untouched.
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        if input.up && !self.is_touching_top() {
            self.position.y -= self.velocity.y * dt;
        }
        if input.down && !self.is_touching_bottom() {
            self.position.y += self.velocity.y * dt;
        }
        if input.right && !self.is_touching_right() {
            self.position.x += self.velocity.x * dt;
        }
        if input.left && !self.is_touching_left() {
            self.position.x -= self.velocity.x * dt;
        }
        self.clamp_to_window();
    }

    /// Credit this paddle's player with a point
    pub fn goal(&mut self) {
        self.score.increment();
    }

    pub fn is_touching_top(&self) -> bool {
        self.position.y - self.dimensions.half_height() <= 0.0
    }

    pub fn is_touching_bottom(&self) -> bool {
        self.position.y + self.dimensions.half_height() >= WINDOW_HEIGHT as f32
    }

    pub fn is_touching_left(&self) -> bool {
        self.position.x - self.dimensions.half_width() <= 0.0
    }

    pub fn is_touching_right(&self) -> bool {
        self.position.x + self.dimensions.half_width() >= WINDOW_WIDTH as f32
    }

    /// Top edge, bottom edge
    pub fn vertical_extent(&self) -> (f32, f32) {
        let half = self.dimensions.half_height();
        (self.position.y - half, self.position.y + half)
    }

    fn clamp_to_window(&mut self) {
        let half_w = self.dimensions.half_width();
        let half_h = self.dimensions.half_height();
        // A paddle larger than the window is pinned to its top-left corner
        self.position.x = self
            .position
            .x
            .min(WINDOW_WIDTH as f32 - half_w)
            .max(half_w);
        self.position.y = self
            .position
            .y
            .min(WINDOW_HEIGHT as f32 - half_h)
            .max(half_h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
            ..Default::default()
        }
    }

    #[test]
    fn test_player_defaults() {
        let paddle = Paddle::player(Vec2::new(50.0, 500.0), Colour::WHITE);
        assert_eq!(paddle.dimensions, Dimensions::rect(10.0, 75.0));
        assert_eq!(paddle.velocity, Vec2::new(0.0, 400.0));
        assert_eq!(paddle.score.number, 0);
    }

    #[test]
    fn test_moves_up_and_down() {
        let mut paddle = Paddle::player(Vec2::new(50.0, 300.0), Colour::WHITE);
        paddle.update(&input(true, false, false, false), 0.1);
        assert!((paddle.position.y - 260.0).abs() < 0.001);

        paddle.update(&input(false, true, false, false), 0.05);
        assert!((paddle.position.y - 280.0).abs() < 0.001);
    }

    #[test]
    fn test_stops_at_top_without_touching_velocity() {
        let mut paddle = Paddle::player(Vec2::new(50.0, 40.0), Colour::WHITE);
        paddle.update(&input(true, false, false, false), 0.1);
        assert_eq!(paddle.position.y, 37.5);
        assert!(paddle.is_touching_top());

        // Still pressing up: stays put
        paddle.update(&input(true, false, false, false), 0.1);
        assert_eq!(paddle.position.y, 37.5);
        assert_eq!(paddle.velocity, Vec2::new(0.0, 400.0));

        // Moving away works again next frame
        paddle.update(&input(false, true, false, false), 0.1);
        assert!((paddle.position.y - 77.5).abs() < 0.001);
    }

    #[test]
    fn test_diagonal_movement_combines() {
        let mut paddle = Paddle::player(Vec2::new(400.0, 300.0), Colour::WHITE);
        paddle.velocity = Vec2::new(100.0, 100.0);
        paddle.update(&input(false, true, false, true), 0.5);
        assert_eq!(paddle.position, Vec2::new(450.0, 350.0));
    }

    #[test]
    fn test_goal_increments_score() {
        let mut paddle = Paddle::player(Vec2::new(750.0, 100.0), Colour::WHITE);
        paddle.goal();
        paddle.goal();
        assert_eq!(paddle.score.number, 2);
    }

    proptest! {
        #[test]
        fn stays_inside_window(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            dt in 0.0f32..2.0,
            frames in 1usize..40,
            up in any::<bool>(),
            down in any::<bool>(),
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut paddle = Paddle::player(Vec2::new(x, y), Colour::WHITE);
            paddle.velocity = Vec2::new(PADDLE_SPEED, PADDLE_SPEED);
            let snapshot = input(up, down, left, right);
            for _ in 0..frames {
                paddle.update(&snapshot, dt);
                let (top, bottom) = paddle.vertical_extent();
                prop_assert!(top >= 0.0);
                prop_assert!(bottom <= WINDOW_HEIGHT as f32);
                prop_assert!(paddle.position.x - paddle.dimensions.half_width() >= 0.0);
                prop_assert!(paddle.position.x + paddle.dimensions.half_width() <= WINDOW_WIDTH as f32);
            }
        }
    }
}
