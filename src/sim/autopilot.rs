//! Attract-mode autopilot
//!
//! Starts runs on its own and jumps when an obstacle is about to enter the
//! collision window.

use super::state::{GameState, Mode};
use super::tick::TickInput;

/// Seconds of look-ahead used to time jumps
pub const JUMP_LEAD: f64 = 0.35;

/// Fill in the controls a player would press this tick
pub fn drive(state: &GameState, input: &mut TickInput) {
    match state.mode {
        Mode::Title => input.start = true,
        Mode::Crashed => input.restart = true,
        Mode::Running => {
            if state.player.on_ground && obstacle_incoming(state) {
                input.jump = true;
            }
        }
    }
}

/// Whether an obstacle will reach the front of the collision window within
/// `JUMP_LEAD` seconds
pub fn obstacle_incoming(state: &GameState) -> bool {
    let front = state.player.screen_x + state.tuning.collision.window_ahead;
    let reach = state.scroll_speed() * JUMP_LEAD;
    state.world.obstacles.iter().any(|o| {
        let d = o.x - state.clock.scroll_x - front;
        (0.0..=reach).contains(&d)
    })
}
