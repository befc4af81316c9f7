//! Per-frame simulation step
//!
//! Advances the world by an explicit `dt`. Order within a running step:
//! speed, scroll and score, player physics, spawn horizon, culling, pickups,
//! obstacles (a crash ends the step), particles, best score.

use glam::DVec2;

use super::autopilot;
use super::collision::{obstacle_hit, pickup_in_reach};
use super::physics::{Contact, step_player};
use super::spawner::{RandomSource, emit_powder, maintain_horizon};
use super::state::{GameEvent, GameState, Mode};
use crate::clamp_dt;

/// Input signals for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump pressed since the last tick (latched until grounded)
    pub jump: bool,
    pub accelerate: bool,
    pub decelerate: bool,
    /// Start a run from the title screen
    pub start: bool,
    /// Start a new run after a crash
    pub restart: bool,
    /// Attract mode - the autopilot plays
    pub autopilot: bool,
}

/// Advance the game by `dt` seconds
///
/// `dt` is clamped to `[0, MAX_FRAME_DT]`. Start/restart signals are honoured
/// even when `dt` is zero; everything else is skipped.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f64,
    rng: &mut R,
) {
    let mut input = input.clone();
    if input.autopilot {
        autopilot::drive(state, &mut input);
    }
    let input = &input;

    match state.mode {
        Mode::Title if input.start => {
            state.start_run(rng);
            // A pointer press both starts the run and asks for a jump
            state.jump_queued = input.jump;
            return;
        }
        Mode::Crashed if input.restart => {
            state.start_run(rng);
            return;
        }
        _ => {}
    }

    let dt = clamp_dt(dt);
    if dt <= 0.0 {
        return;
    }

    state.clock.t += dt;
    let decay = state.tuning.player.crash_flash_decay * dt;
    state.player.crash_flash = (state.player.crash_flash - decay).max(0.0);

    match state.mode {
        Mode::Title => {
            state.clock.scroll_x += dt * state.stats.speed * state.tuning.speed.title_factor;
        }
        Mode::Crashed => {}
        Mode::Running => run_step(state, input, dt, rng),
    }
}

fn run_step<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f64,
    rng: &mut R,
) {
    let speed = &state.tuning.speed;
    let stats = &mut state.stats;
    if input.accelerate {
        stats.speed_mult = (stats.speed_mult + dt * speed.accel_rate)
            .clamp(speed.accel_floor, speed.mult_ceiling);
    }
    if input.decelerate {
        stats.speed_mult = (stats.speed_mult - dt * speed.decel_rate)
            .clamp(speed.decel_floor, speed.mult_ceiling);
    }
    stats.speed = speed.speed_at(state.clock.t);

    let scroll_speed = state.scroll_speed();
    state.clock.scroll_x += dt * scroll_speed;
    let scoring = &state.tuning.scoring;
    state.stats.score += dt * (scoring.per_second + state.stats.speed * scoring.per_speed);

    if input.jump {
        state.jump_queued = true;
    }

    let world_x = state.player_world_x();
    let contact = step_player(
        &mut state.player,
        &mut state.jump_queued,
        &state.tuning,
        world_x,
        state.clock.t,
        dt,
    );
    match contact {
        Contact::Jumped => {
            let at = DVec2::new(world_x, state.player.y - 4.0);
            let burst = state.tuning.particles.jump_burst;
            emit_powder(&mut state.world, &state.tuning, at, burst, rng);
            state.push_event(GameEvent::Jump);
        }
        Contact::Landed => {
            let at = DVec2::new(world_x, state.player.y - 2.0);
            let burst = state.tuning.particles.land_burst;
            emit_powder(&mut state.world, &state.tuning, at, burst, rng);
            state.push_event(GameEvent::Land);
        }
        Contact::Grounded | Contact::Airborne => {}
    }

    let scroll_x = state.clock.scroll_x;
    maintain_horizon(&mut state.world, &state.tuning, scroll_x, state.clock.t, rng);

    let left = scroll_x - state.tuning.collision.cull_margin;
    state.world.obstacles.retain(|o| o.x > left);
    state.world.pickups.retain(|p| p.x > left && !p.taken);

    let mut collected = Vec::new();
    for pickup in state.world.pickups.iter_mut() {
        if pickup_in_reach(&state.player, pickup, scroll_x, &state.tuning) {
            pickup.taken = true;
            collected.push(DVec2::new(pickup.x, pickup.y));
        }
    }
    for at in collected {
        state.stats.score += state.tuning.scoring.pickup_bonus;
        let burst = state.tuning.particles.collect_burst;
        emit_powder(&mut state.world, &state.tuning, at, burst, rng);
        state.push_event(GameEvent::Collect);
    }

    let crashed = state
        .world
        .obstacles
        .iter()
        .any(|o| obstacle_hit(&state.player, o, scroll_x, &state.tuning));
    if crashed {
        state.crash();
        return;
    }

    update_particles(state, dt);

    let score = state.stats.display_score();
    if score > state.stats.best {
        state.stats.best = score;
        state.push_event(GameEvent::NewBest(score));
    }
}

fn update_particles(state: &mut GameState, dt: f64) {
    let p = &state.tuning.particles;
    let drag = p.drag.powf(dt / p.drag_reference_dt);
    for s in state.world.particles.iter_mut() {
        s.life -= dt;
        s.pos += s.vel * dt;
        s.vel.x *= drag;
        s.vel.y += p.gravity * dt;
    }
    let left = state.clock.scroll_x - state.tuning.collision.cull_margin;
    state.world.particles.retain(|s| s.life > 0.0 && s.pos.x > left);
}
