//! Pixel Pong entry point
//!
//! Window creation, texture upload and keyboard polling belong to the host
//! graphics layer. This binary drives the game headlessly: serve is pressed
//! automatically, the left paddle stands still and the computer plays the
//! right paddle, with every frame fully rasterized.

use pixel_pong::Settings;
use pixel_pong::platform::{self, Game, InputSource, Presenter};
use pixel_pong::sim::{GamePhase, GameState, TickInput};

/// Presses serve whenever the ball is waiting, if enabled
struct HeadlessInput {
    auto_serve: bool,
}

impl InputSource for HeadlessInput {
    fn poll(&mut self, state: &GameState) -> Option<TickInput> {
        Some(TickInput {
            serve: self.auto_serve && state.phase == GamePhase::Waiting,
            ..Default::default()
        })
    }
}

/// Stands in for the texture upload; only counts lit pixels
#[derive(Default)]
struct NullPresenter {
    presented: u64,
}

impl Presenter for NullPresenter {
    fn present(&mut self, pixels: &[u8]) {
        self.presented += 1;
        if log::log_enabled!(log::Level::Trace) {
            let lit = pixels
                .chunks_exact(4)
                .filter(|p| p[..3].iter().any(|&c| c != 0))
                .count();
            log::trace!("Presented frame {} ({} lit pixels)", self.presented, lit);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Welcome to Pong!");

    let settings = Settings::load();
    log::info!("Settings: {:?}", settings);

    let mut game = Game::default();
    let mut input = HeadlessInput {
        auto_serve: settings.auto_serve,
    };
    let mut presenter = NullPresenter::default();

    platform::run(&mut game, &mut input, &mut presenter, &settings);

    log::info!(
        "Final score {} - {} after {} frames",
        game.state.player.score.number,
        game.state.computer.score.number,
        presenter.presented
    );
    match serde_json::to_string(&game.state) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    log::info!("See ya' later.");
}
