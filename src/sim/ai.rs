//! Computer player
//!
//! Rather than solving for the intercept, the computer releases a "ghost"
//! copy of the ball and flies it forward until it is within reach of the
//! paddle, then steers toward where the ghost ended up.

use glam::Vec2;

use super::ball::Ball;
use super::entity::Dimensions;
use super::paddle::Paddle;
use super::tick::TickInput;
use crate::consts::*;

/// Outcome of a ghost-ball forward simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// The ghost reached the paddle's column at this height
    Reached { y: f32, steps: u32 },
    /// The ghost never gets close (heading away, or not moving sideways)
    Diverged,
}

/// Fly a ghost of `ball` toward `paddle` and report where it arrives
///
/// The ghost starts at the ball's position with zero radius and the nominal
/// serve speed along the ball's heading. It only ever free-flies, so it never
/// collides with paddles or scores. Steps are `GHOST_STEP` long whatever the
/// frame time, so `MAX_GHOST_STEPS` always spans the whole court.
pub fn predict(paddle: &Paddle, ball: &Ball) -> Prediction {
    let mut ghost = Ball {
        position: ball.position,
        dimensions: Dimensions::circle(0.0),
        velocity: Vec2::new(nominal_speed(ball.velocity.x), nominal_speed(ball.velocity.y)),
        colour: ball.colour,
    };

    let start_side = (paddle.position.x - ghost.position.x).signum();
    let mut steps = 0;
    loop {
        let gap = paddle.position.x - ghost.position.x;
        if gap.abs() <= GHOST_REACH || gap.signum() != start_side {
            return Prediction::Reached {
                y: ghost.position.y,
                steps,
            };
        }
        if ghost.velocity.x == 0.0 || ghost.velocity.x.signum() != start_side {
            return Prediction::Diverged;
        }
        if steps >= MAX_GHOST_STEPS {
            return Prediction::Diverged;
        }
        ghost.advance(GHOST_STEP);
        steps += 1;
    }
}

/// Move the computer's paddle one step toward the predicted ball height
///
/// Does nothing while the ball is hugging the left edge. The move goes
/// through `Paddle::update`, so the same boundary rules apply as for a human.
pub fn steer(paddle: &mut Paddle, ball: &Ball, dt: f32) {
    if ball.position.x <= ball.radius() * 2.0 {
        return;
    }

    let target = match predict(paddle, ball) {
        Prediction::Reached { y, .. } => y,
        Prediction::Diverged => {
            log::trace!("Ghost ball diverged, holding position");
            return;
        }
    };

    let input = TickInput {
        up: ball.position.y < paddle.position.y && target < paddle.position.y,
        down: ball.position.y > paddle.position.y && target > paddle.position.y,
        ..Default::default()
    };
    paddle.update(&input, dt);
}

fn nominal_speed(component: f32) -> f32 {
    if component == 0.0 {
        0.0
    } else {
        BALL_SPEED.copysign(component)
    }
}
