//! Simulation core
//!
//! All gameplay logic lives here:
//! - Explicit `dt` per step, no hidden clock
//! - Randomness only through an injected `RandomSource`
//! - Terrain is a pure function of `(x, t)`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{hit_line, obstacle_hit, obstacle_in_window, pickup_in_reach};
pub use physics::{Contact, step_player};
pub use spawner::{RandomSource, Spawned, emit_powder, maintain_horizon, spawn_at};
pub use state::{
    GameEvent, GameState, Mode, Obstacle, ObstacleKind, Particle, Pickup, PickupKind, Player,
    RunStats, World, WorldClock,
};
pub use terrain::{TerrainField, TerrainLayer};
pub use tick::{TickInput, tick};
