//! Super Morio - a tiny snowy jump-and-run on skis
//!
//! Core modules:
//! - `sim`: Simulation core (terrain, spawning, physics, collisions, run state)
//! - `platform`: Frame clock, input controls and the per-frame driver
//! - `persistence`: Best-score storage
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `audio`: Event to sound mapping
//! - `web`: Browser binding (wasm32 only)

pub mod audio;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical viewport width (world units)
    pub const VIEW_WIDTH: f64 = 420.0;
    /// Logical viewport height (world units)
    pub const VIEW_HEIGHT: f64 = 220.0;

    /// Largest frame delta the simulation accepts (seconds)
    pub const MAX_FRAME_DT: f64 = 0.05;

    /// LocalStorage key for the best score
    pub const BEST_SCORE_KEY: &str = "super-morio.bestScore.v1";
    /// LocalStorage key for settings
    pub const SETTINGS_KEY: &str = "super-morio.settings.v1";
}

/// Clamp a raw frame delta into the range the simulation accepts.
///
/// NaN and negative deltas become zero.
#[inline]
pub fn clamp_dt(dt: f64) -> f64 {
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, consts::MAX_FRAME_DT)
}
