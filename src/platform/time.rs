//! Frame pacing
//!
//! A plain rate governor: measure the frame, sleep off whatever is left of
//! the minimum frame time, measure again.

use std::thread;
use std::time::{Duration, Instant};

/// Enforces a minimum duration per frame
#[derive(Debug, Clone, Copy)]
pub struct FrameGovernor {
    min_frame: Duration,
}

/// An in-progress frame
#[derive(Debug)]
pub struct FrameTimer {
    start: Instant,
    min_frame: Duration,
}

impl FrameGovernor {
    pub fn new(min_frame: Duration) -> Self {
        Self { min_frame }
    }

    /// Start timing a frame
    pub fn begin(&self) -> FrameTimer {
        FrameTimer {
            start: Instant::now(),
            min_frame: self.min_frame,
        }
    }
}

impl FrameTimer {
    /// Finish the frame, idling out any shortfall
    ///
    /// Returns the elapsed seconds to feed into the next tick.
    pub fn finish(self) -> f32 {
        let elapsed = self.start.elapsed();
        if let Some(rest) = shortfall(elapsed, self.min_frame) {
            thread::sleep(rest);
            return self.start.elapsed().as_secs_f32();
        }
        elapsed.as_secs_f32()
    }
}

/// Time left to wait, if the frame finished early
pub fn shortfall(elapsed: Duration, min_frame: Duration) -> Option<Duration> {
    min_frame.checked_sub(elapsed).filter(|rest| !rest.is_zero())
}
