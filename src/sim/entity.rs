//! Plain data shared by every entity
//!
//! Positions and velocities are `glam::Vec2`; shapes and colours live here.

use serde::{Deserialize, Serialize};

/// Opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Colour {
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Geometry of an entity
///
/// Rectangles use `width`/`height`, the ball only `radius`. Unused fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl Dimensions {
    pub const fn rect(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            radius: 0.0,
        }
    }

    pub const fn circle(radius: f32) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            radius,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}
