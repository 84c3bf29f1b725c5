//! Ball physics
//!
//! Collisions are tested against the position *before* integration, so a
//! bounce is detected one frame before the ball would visibly sink into a
//! paddle. Off-centre paddle hits add "spin" by also reflecting the vertical
//! velocity, a cheap stand-in for angled reflection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Colour, Dimensions};
use super::paddle::Paddle;
use super::state::Side;
use crate::centre;
use crate::consts::*;

/// A goal scored during a ball update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    /// Side whose player scored
    pub scorer: Side,
}

/// The game ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub dimensions: Dimensions,
    pub velocity: Vec2,
    pub colour: Colour,
}

impl Ball {
    /// A ball at the centre of the window, heading down and to the right
    pub fn serve(colour: Colour) -> Self {
        Self {
            position: centre(),
            dimensions: Dimensions::circle(BALL_RADIUS),
            velocity: Vec2::splat(BALL_SPEED),
            colour,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.dimensions.radius
    }

    /// Advance one frame against both paddles
    ///
    /// Returns the goal if the ball left the screen this frame. In that case
    /// the scorer's paddle has already been credited and the ball is back at
    /// the centre with both velocity components reversed.
    pub fn update(&mut self, left: &mut Paddle, right: &mut Paddle, dt: f32) -> Option<Goal> {
        let r = self.radius();

        // Left paddle
        if self.position.x - r < left.position.x + left.dimensions.half_width()
            && self.within_paddle_span(left)
        {
            self.velocity.x = -self.velocity.x;
            self.position.x = left.position.x + left.dimensions.half_width() + r;
            self.apply_spin(left);
        }

        let exit_right = self.position.x + r >= WINDOW_WIDTH as f32;
        if exit_right {
            left.goal();
        }

        // Right paddle
        if self.position.x + r > right.position.x - right.dimensions.half_width()
            && self.within_paddle_span(right)
        {
            self.velocity.x = -self.velocity.x;
            self.position.x = right.position.x - right.dimensions.half_width() - r;
            self.apply_spin(right);
        }

        let exit_left = self.position.x - r <= 0.0;
        if exit_left {
            right.goal();
        }

        self.advance(dt);

        let goal = if exit_right {
            Some(Goal { scorer: Side::Left })
        } else if exit_left {
            Some(Goal { scorer: Side::Right })
        } else {
            None
        };

        if goal.is_some() {
            self.velocity = -self.velocity;
            self.position = centre();
        }

        goal
    }

    /// Paddle-less free flight: integrate, then bounce off the top and bottom walls
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;

        let r = self.radius();
        if self.position.y - r <= 0.0 || self.position.y + r >= WINDOW_HEIGHT as f32 {
            self.velocity.y = -self.velocity.y;
        }
    }

    fn within_paddle_span(&self, paddle: &Paddle) -> bool {
        let (top, bottom) = paddle.vertical_extent();
        self.position.y > top && self.position.y < bottom
    }

    fn apply_spin(&mut self, paddle: &Paddle) {
        let quarter = paddle.dimensions.height / 4.0;
        if self.position.y <= paddle.position.y - quarter
            || self.position.y >= paddle.position.y + quarter
        {
            self.velocity.y = -self.velocity.y;
        }
    }
}
