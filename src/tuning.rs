//! Data-driven game balance
//!
//! Every number the simulation uses lives here. `Tuning::default()` is the
//! shipped balance; a JSON document can override any subset of it.

use serde::{Deserialize, Serialize};

use crate::sim::terrain::TerrainField;

/// Complete balance sheet
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub terrain: TerrainField,
    pub spawn: SpawnTuning,
    pub player: PlayerTuning,
    pub speed: SpeedTuning,
    pub scoring: ScoringTuning,
    pub collision: CollisionTuning,
    pub particles: ParticleTuning,
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Spawn policy: what appears ahead of the camera and how densely
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Rolls below this become a flag pickup
    pub pickup_threshold: f64,
    /// Rolls below this (and above `pickup_threshold`) become a tree
    pub tree_threshold: f64,
    /// Flag height above the ground (min, max)
    pub pickup_lift: (f64, f64),
    pub tree_width: (f64, f64),
    pub tree_height: (f64, f64),
    pub rock_width: (f64, f64),
    pub rock_height: (f64, f64),
    /// Horizontal gap between consecutive spawns (min, max)
    pub gap: (f64, f64),
    /// How far past the viewport's right edge the horizon is kept populated
    pub lookahead: f64,
    /// First spawn position past the viewport's right edge on run start
    pub initial_offset: f64,
    pub initial_count: u32,
    pub initial_spacing: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            pickup_threshold: 0.45,
            tree_threshold: 0.75,
            pickup_lift: (22.0, 34.0),
            tree_width: (18.0, 26.0),
            tree_height: (34.0, 46.0),
            rock_width: (16.0, 26.0),
            rock_height: (10.0, 18.0),
            gap: (140.0, 260.0),
            lookahead: 850.0,
            initial_offset: 260.0,
            initial_count: 5,
            initial_spacing: 180.0,
        }
    }
}

/// Player body and jump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Fixed horizontal screen position
    pub screen_x: f64,
    pub jump_power: f64,
    /// Downward acceleration while airborne (units/s²)
    pub gravity: f64,
    /// Launch factor on flat ground is `launch_base + launch_normal_bias`
    pub launch_base: f64,
    pub launch_normal_bias: f64,
    /// Distance from the feet up to the collision hit point
    pub head_offset: f64,
    /// Extra vertical tolerance while airborne
    pub airborne_clearance: f64,
    /// Crash flash fade rate (intensity per second)
    pub crash_flash_decay: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            screen_x: 90.0,
            jump_power: 340.0,
            gravity: 920.0,
            launch_base: 0.92,
            launch_normal_bias: 0.08,
            head_offset: 16.0,
            airborne_clearance: 12.0,
            crash_flash_decay: 0.9,
        }
    }
}

/// Scroll speed ramp and the player's speed multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTuning {
    pub base: f64,
    /// Speed gained per second of run time
    pub ramp_per_sec: f64,
    /// Maximum speed gained from the ramp
    pub ramp_cap: f64,
    pub accel_rate: f64,
    /// Lower bound applied while accelerating
    pub accel_floor: f64,
    pub decel_rate: f64,
    /// Lower bound applied while decelerating
    pub decel_floor: f64,
    pub mult_ceiling: f64,
    /// Fraction of base speed used for the title screen's ambient scroll
    pub title_factor: f64,
}

impl Default for SpeedTuning {
    fn default() -> Self {
        Self {
            base: 120.0,
            ramp_per_sec: 3.4,
            ramp_cap: 220.0,
            accel_rate: 0.6,
            accel_floor: 0.8,
            decel_rate: 0.7,
            decel_floor: 0.7,
            mult_ceiling: 1.65,
            title_factor: 0.25,
        }
    }
}

impl SpeedTuning {
    /// Base scroll speed after `run_time` seconds
    pub fn speed_at(&self, run_time: f64) -> f64 {
        self.base + (run_time * self.ramp_per_sec).min(self.ramp_cap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTuning {
    pub per_second: f64,
    /// Extra points per second per unit of base speed
    pub per_speed: f64,
    pub pickup_bonus: f64,
}

impl Default for ScoringTuning {
    fn default() -> Self {
        Self {
            per_second: 10.0,
            per_speed: 0.03,
            pickup_bonus: 35.0,
        }
    }
}

/// Collision windows and culling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    /// Obstacles are tested when their screen x lies in
    /// `[player_x - window_behind, player_x + window_ahead]`
    pub window_behind: f64,
    pub window_ahead: f64,
    pub pickup_dx: f64,
    pub pickup_dy: f64,
    /// Pickups are matched against this point above the player's feet
    pub pickup_head_offset: f64,
    /// Entities further than this behind the camera are discarded
    pub cull_margin: f64,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            window_behind: 10.0,
            window_ahead: 24.0,
            pickup_dx: 16.0,
            pickup_dy: 18.0,
            pickup_head_offset: 18.0,
            cull_margin: 80.0,
        }
    }
}

/// Powder particles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Horizontal velocity retained per `drag_reference_dt`
    pub drag: f64,
    pub drag_reference_dt: f64,
    pub gravity: f64,
    pub max_particles: usize,
    pub jump_burst: u32,
    pub land_burst: u32,
    pub collect_burst: u32,
    pub life: (f64, f64),
    pub vel_x: (f64, f64),
    pub vel_y: (f64, f64),
    /// Spawn position jitter (x, y)
    pub jitter: (f64, f64),
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            drag: 0.98,
            drag_reference_dt: 1.0 / 60.0,
            gravity: 400.0,
            max_particles: 256,
            jump_burst: 12,
            land_burst: 9,
            collect_burst: 16,
            life: (0.25, 0.6),
            vel_x: (-120.0, -25.0),
            vel_y: (-30.0, 40.0),
            jitter: (4.0, 3.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ramp_is_capped() {
        let speed = SpeedTuning::default();
        assert_eq!(speed.speed_at(0.0), 120.0);
        assert!((speed.speed_at(10.0) - 154.0).abs() < 1e-9);
        assert_eq!(speed.speed_at(1000.0), 340.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "player": { "jump_power": 400.0 },
            "scoring": { "pickup_bonus": 50 }
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.player.jump_power, 400.0);
        assert_eq!(tuning.player.gravity, 920.0);
        assert_eq!(tuning.scoring.pickup_bonus, 50.0);
        assert_eq!(tuning.spawn, SpawnTuning::default());
        assert_eq!(tuning.terrain, TerrainField::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
