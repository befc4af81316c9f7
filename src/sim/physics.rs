//! Player vertical motion and ground contact

use super::state::Player;
use crate::tuning::Tuning;

/// What happened to the player this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Still on the ground
    Grounded,
    /// Left the ground this step
    Jumped,
    /// Still in the air
    Airborne,
    /// Touched down this step
    Landed,
}

/// Advance the player by `dt` at world x `world_x` and time `t`
///
/// `jump_queued` is the jump latch: consumed only when the player is on the
/// ground, otherwise left set for a later step.
pub fn step_player(
    player: &mut Player,
    jump_queued: &mut bool,
    tuning: &Tuning,
    world_x: f64,
    t: f64,
    dt: f64,
) -> Contact {
    let ground = tuning.terrain.height_at(world_x, t);

    if player.on_ground {
        player.y = ground;
        player.vy = 0.0;
        if !*jump_queued {
            return Contact::Grounded;
        }
        let normal = tuning.terrain.normal_at(world_x, t);
        let launch = tuning.player.launch_base + tuning.player.launch_normal_bias * normal.y;
        player.vy = -player.jump_power * launch;
        player.on_ground = false;
        *jump_queued = false;
        return Contact::Jumped;
    }

    // Semi-implicit Euler
    player.vy += tuning.player.gravity * dt;
    player.y += player.vy * dt;
    if player.y >= ground {
        player.y = ground;
        player.vy = 0.0;
        player.on_ground = true;
        return Contact::Landed;
    }
    Contact::Airborne
}
