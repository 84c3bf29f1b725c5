//! Software rendering module
//!
//! Everything is rasterized on the CPU into a flat RGBA byte buffer which
//! the host uploads and presents.

pub mod glyphs;
pub mod raster;
pub mod shapes;

use std::error::Error;
use std::fmt::Display;

pub use raster::{clear, new_buffer, put_pixel};

use crate::consts::MAX_DRAWABLES;
use crate::sim::{Ball, GameState, Paddle, Score};

/// Anything that can be painted into the frame buffer
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    Ball(&'a Ball),
    Paddle(&'a Paddle),
    Score(&'a Score),
}

impl Drawable<'_> {
    pub fn draw(&self, pixels: &mut [u8]) {
        match self {
            Drawable::Ball(ball) => shapes::draw_ball(pixels, ball),
            Drawable::Paddle(paddle) => shapes::draw_paddle(pixels, paddle),
            Drawable::Score(score) => shapes::draw_score(pixels, score),
        }
    }
}

/// Returned when pushing onto a full `DrawList`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawListFull;

impl Display for DrawListFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draw list already holds {MAX_DRAWABLES} entries")
    }
}

impl Error for DrawListFull {}

/// Ordered, fixed-capacity list of drawables; insertion order is paint order
#[derive(Debug, Default)]
pub struct DrawList<'a> {
    items: [Option<Drawable<'a>>; MAX_DRAWABLES],
    len: usize,
}

impl<'a> DrawList<'a> {
    pub fn new() -> Self {
        Self {
            items: [None; MAX_DRAWABLES],
            len: 0,
        }
    }

    pub fn push(&mut self, drawable: Drawable<'a>) -> Result<(), DrawListFull> {
        let slot = self.items.get_mut(self.len).ok_or(DrawListFull)?;
        *slot = Some(drawable);
        self.len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Drawable<'a>> {
        self.items[..self.len].iter().flatten()
    }

    /// The whole scene: player, player score, computer, computer score, ball
    pub fn scene(state: &'a GameState) -> Self {
        Self {
            items: [
                Some(Drawable::Paddle(&state.player)),
                Some(Drawable::Score(&state.player.score)),
                Some(Drawable::Paddle(&state.computer)),
                Some(Drawable::Score(&state.computer.score)),
                Some(Drawable::Ball(&state.ball)),
            ],
            len: MAX_DRAWABLES,
        }
    }
}

/// Clear the buffer, then paint every drawable in list order
pub fn draw_all(pixels: &mut [u8], list: &DrawList<'_>) {
    clear(pixels);
    for drawable in list.iter() {
        drawable.draw(pixels);
    }
}

/// Render a full frame of `state`
pub fn render(pixels: &mut [u8], state: &GameState) {
    draw_all(pixels, &DrawList::scene(state));
}
