//! Per-frame simulation tick
//!
//! Advances the game by one frame of caller-measured elapsed time.

use super::ai;
use super::state::{GameEvent, GamePhase, GameState, Side};

/// Input snapshot for a single tick
///
/// The simulation only ever reads this. The computer player builds its own
/// snapshot and feeds it through the same paddle update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Start play from `Waiting`
    pub serve: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame
///
/// While `Waiting` only the serve input is looked at. While `Playing` the
/// player's paddle, the ball and the computer player update, in that order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Waiting => {
            if input.serve {
                state.phase = GamePhase::Playing;
                log::info!("Ball served");
                events.push(GameEvent::Served);
            }
        }
        GamePhase::Playing => {
            state.time_ticks += 1;

            state.player.update(input, dt);

            if let Some(goal) = state
                .ball
                .update(&mut state.player, &mut state.computer, dt)
            {
                state.phase = GamePhase::Waiting;
                let score = state.paddle(goal.scorer).score.number;
                log::debug!(
                    "Goal for {:?}, score now {} - {}",
                    goal.scorer,
                    state.paddle(Side::Left).score.number,
                    state.paddle(Side::Right).score.number
                );
                events.push(GameEvent::Goal {
                    scorer: goal.scorer,
                    score,
                });
            }

            ai::steer(&mut state.computer, &state.ball, dt);
        }
    }

    events
}
