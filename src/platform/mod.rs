//! Platform abstraction layer
//!
//! The host owns the window, the keyboard and the screen. The game only sees
//! them through these seams:
//! - `InputSource`: one input snapshot per frame, or a quit request
//! - `Presenter`: takes the finished frame buffer
//! - `time`: frame pacing

pub mod time;

use crate::Settings;
use crate::renderer;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub use time::{FrameGovernor, FrameTimer};

/// Supplies input snapshots
pub trait InputSource {
    /// Input for the coming frame; `None` means the user asked to quit
    fn poll(&mut self, state: &GameState) -> Option<TickInput>;
}

/// Hands a finished frame to the screen
pub trait Presenter {
    fn present(&mut self, pixels: &[u8]);
}

/// Game instance holding all mutable state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    /// Frame buffer, `[R, G, B, unused]` per pixel
    pub pixels: Vec<u8>,
    pub frames: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            pixels: renderer::new_buffer(),
            frames: 0,
        }
    }

    /// Update the simulation and redraw the frame buffer
    pub fn frame(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input, dt);
        renderer::render(&mut self.pixels, &self.state);
        self.frames += 1;
        events
    }
}

/// Run frames until the input source quits or the frame limit is hit
pub fn run<I, P>(game: &mut Game, input: &mut I, presenter: &mut P, settings: &Settings)
where
    I: InputSource,
    P: Presenter,
{
    let governor = FrameGovernor::new(settings.min_frame_duration());
    let mut dt = 0.0;

    loop {
        if settings.max_frames.is_some_and(|max| game.frames >= max) {
            log::info!("Frame limit of {} reached", game.frames);
            break;
        }

        let frame = governor.begin();
        let Some(snapshot) = input.poll(&game.state) else {
            log::info!("Quit requested");
            break;
        };

        for event in game.frame(&snapshot, dt) {
            if let GameEvent::Goal { scorer, score } = event {
                log::info!("{:?} scores ({})", scorer, score);
            }
        }
        presenter.present(&game.pixels);

        dt = frame.finish();
        log::trace!(
            "Frame {} (tick {}) took {:.4}s",
            game.frames,
            game.state.time_ticks,
            dt
        );
    }
}
