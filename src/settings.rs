//! Host settings
//!
//! Only concerns the host loop (pacing, run length, serving); the game rules
//! are fixed in `consts`. Read from the environment on startup and never
//! written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_FRAME_MS;

/// Host loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum wall-clock time per frame, in milliseconds
    pub min_frame_ms: u64,
    /// Stop after this many frames (`None` runs until quit)
    pub max_frames: Option<u64>,
    /// Press serve automatically whenever the ball is waiting
    pub auto_serve: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_frame_ms: MIN_FRAME_MS,
            max_frames: Some(2000),
            auto_serve: true,
        }
    }
}

impl Settings {
    /// Environment variable holding a JSON settings object
    pub const ENV_KEY: &'static str = "PIXEL_PONG_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_KEY) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_KEY);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::ENV_KEY, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn min_frame_duration(&self) -> Duration {
        Duration::from_millis(self.min_frame_ms)
    }
}
