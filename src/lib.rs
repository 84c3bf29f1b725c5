//! Pixel Pong - a two-paddle ball game drawn straight into a pixel buffer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, computer player, game state)
//! - `renderer`: Software rasterizer writing into a flat RGBA byte buffer
//! - `platform`: Host abstraction (input, presentation, frame pacing)
//! - `settings`: Host-side settings (never game rules)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions, in pixels
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Bytes per pixel in the frame buffer (R, G, B, unused)
    pub const BYTES_PER_PIXEL: usize = 4;
    /// Length of a full frame buffer
    pub const BUFFER_LEN: usize = WINDOW_WIDTH as usize * WINDOW_HEIGHT as usize * BYTES_PER_PIXEL;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed per axis when served
    pub const BALL_SPEED: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Scoreboards sit this fraction of the way from their paddle toward the centre
    pub const SCORE_OFFSET_X: f32 = 0.5;
    /// Scoreboard distance from the top of the window
    pub const SCORE_OFFSET_Y: f32 = 50.0;
    /// Pixel size of one glyph cell
    pub const SCORE_SCALE: i32 = 10;

    /// Draw list capacity: two paddles, two scores, one ball
    pub const MAX_DRAWABLES: usize = 5;

    /// Computer player gives up predicting after this many ghost steps
    pub const MAX_GHOST_STEPS: u32 = 512;
    /// Simulated seconds per ghost step, independent of the frame time
    pub const GHOST_STEP: f32 = 1.0 / 60.0;
    /// Horizontal gap at which the ghost counts as having reached the paddle
    pub const GHOST_REACH: f32 = 50.0;

    /// Minimum wall-clock duration of one frame, in milliseconds
    pub const MIN_FRAME_MS: u64 = 5;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Centre of the window in world space
#[inline]
pub fn centre() -> Vec2 {
    Vec2::new(
        (consts::WINDOW_WIDTH / 2) as f32,
        (consts::WINDOW_HEIGHT / 2) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(50.0, 400.0, 0.5), 225.0);
        assert_eq!(lerp(750.0, 400.0, 0.5), 575.0);
        assert_eq!(lerp(3.0, 9.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 9.0, 1.0), 9.0);
    }

    #[test]
    fn test_centre() {
        assert_eq!(centre(), Vec2::new(400.0, 300.0));
    }
}
