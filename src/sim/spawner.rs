//! Procedural population of the world ahead of the camera

use glam::DVec2;

use super::state::{Obstacle, ObstacleKind, Particle, Pickup, PickupKind, World};
use crate::consts::VIEW_WIDTH;
use crate::tuning::Tuning;

/// Smallest gap the horizon cursor advances by
pub const MIN_SPAWN_GAP: f64 = 1.0;

/// Source of uniform randomness for spawning and particles
///
/// Any `rand` generator works; tests can plug in a seeded one.
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f64;

    /// Uniform sample in [lo, hi)
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit() * (hi - lo)
    }

    fn pick(&mut self, bounds: (f64, f64)) -> f64 {
        self.range(bounds.0, bounds.1)
    }
}

impl<R: rand::RngCore> RandomSource for R {
    fn unit(&mut self) -> f64 {
        rand::Rng::random::<f64>(self)
    }
}

/// What `spawn_at` produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawned {
    Pickup,
    Obstacle(ObstacleKind),
}

/// Spawn one entity at world x, resting on the terrain as it is at time t
pub fn spawn_at<R: RandomSource + ?Sized>(
    world: &mut World,
    tuning: &Tuning,
    x: f64,
    t: f64,
    rng: &mut R,
) -> Spawned {
    let policy = &tuning.spawn;
    let ground = tuning.terrain.height_at(x, t);
    let roll = rng.unit();

    if roll < policy.pickup_threshold {
        world.pickups.push(Pickup {
            kind: PickupKind::Flag,
            x,
            y: ground - rng.pick(policy.pickup_lift),
            taken: false,
            bob: rng.range(0.0, std::f64::consts::TAU),
        });
        return Spawned::Pickup;
    }

    let (kind, width, height) = if roll < policy.tree_threshold {
        (ObstacleKind::Tree, policy.tree_width, policy.tree_height)
    } else {
        (ObstacleKind::Rock, policy.rock_width, policy.rock_height)
    };
    world.obstacles.push(Obstacle {
        kind,
        x,
        y: ground,
        width: rng.pick(width),
        height: rng.pick(height),
    });
    Spawned::Obstacle(kind)
}

/// Keep the horizon populated up to `lookahead` past the viewport's right edge
///
/// Returns the number of entities spawned. Gaps below `MIN_SPAWN_GAP`
/// (including NaN) are raised to it, so the cursor always moves forward.
pub fn maintain_horizon<R: RandomSource + ?Sized>(
    world: &mut World,
    tuning: &Tuning,
    scroll_x: f64,
    t: f64,
    rng: &mut R,
) -> usize {
    let policy = &tuning.spawn;
    if world.next_spawn_x <= 0.0 {
        world.next_spawn_x = scroll_x + VIEW_WIDTH + policy.initial_offset;
    }

    let horizon = scroll_x + VIEW_WIDTH + policy.lookahead;
    let mut spawned = 0;
    while world.next_spawn_x < horizon {
        let x = world.next_spawn_x;
        spawn_at(world, tuning, x, t, rng);
        world.next_spawn_x = x + rng.pick(policy.gap).max(MIN_SPAWN_GAP);
        spawned += 1;
    }
    if spawned > 0 {
        log::debug!("Spawned {} entities, horizon now {:.0}", spawned, world.next_spawn_x);
    }
    spawned
}

/// Burst of snow powder at a world position
pub fn emit_powder<R: RandomSource + ?Sized>(
    world: &mut World,
    tuning: &Tuning,
    at: DVec2,
    count: u32,
    rng: &mut R,
) {
    let p = &tuning.particles;
    if p.max_particles == 0 {
        return;
    }
    for _ in 0..count {
        if world.particles.len() >= p.max_particles {
            // Drop the oldest to make room
            world.particles.remove(0);
        }
        world.particles.push(Particle {
            pos: at
                + DVec2::new(
                    rng.range(-p.jitter.0, p.jitter.0),
                    rng.range(-p.jitter.1, p.jitter.1),
                ),
            vel: DVec2::new(rng.pick(p.vel_x), rng.pick(p.vel_y)),
            life: rng.pick(p.life),
        });
    }
}
