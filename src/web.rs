//! Browser binding
//!
//! JS owns the canvas: it calls `frame` from `requestAnimationFrame`, forwards
//! key and pointer events, and draws from `snapshot_json`.

use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;

use crate::audio::AudioManager;
use crate::persistence::LocalStorageStore;
use crate::platform::GameLoop;
use crate::settings::{QualityPreset, Settings};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Super Morio starting...");
}

/// One game instance bound to the page
#[wasm_bindgen]
pub struct WebGame {
    game: GameLoop<LocalStorageStore, ThreadRng>,
    settings: Settings,
    audio: AudioManager,
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let settings = Settings::load();
        let mut tuning = Tuning::default();
        settings.apply_to(&mut tuning);

        let game = GameLoop::with_tuning(tuning, LocalStorageStore::new(), rand::rng());
        let audio = AudioManager::new(&settings);
        log::info!("Game initialized (best {})", game.state().stats.best);

        Self {
            game,
            settings,
            audio,
        }
    }

    /// Advance one animation frame (`performance.now()` milliseconds)
    pub fn frame(&mut self, now_ms: f64) {
        self.game.frame(now_ms, &mut (), &mut self.audio);
    }

    /// Returns true when the code is bound, so JS can `preventDefault`
    pub fn key_down(&mut self, code: &str) -> bool {
        self.game.controls.code_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.game.controls.code_up(code)
    }

    pub fn pointer_down(&mut self) {
        // A tap is a user gesture, so audio may start now
        self.audio.resume();
        self.game.controls.pointer_down();
    }

    /// Focus lost or tab hidden
    pub fn blur(&mut self) {
        self.game.controls.release_all();
        self.game.reset_clock();
    }

    /// Flip sound on/off; returns the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.save();
        self.audio.apply_settings(&self.settings);
        if self.settings.sound_enabled {
            self.audio.resume();
        }
        log::info!("Sound {}", if self.settings.sound_enabled { "on" } else { "off" });
        self.settings.sound_enabled
    }

    /// Switch the particle quality preset ("low", "medium", "high")
    ///
    /// Returns false for an unknown preset name.
    pub fn set_quality(&mut self, name: &str) -> bool {
        let Some(quality) = QualityPreset::parse(name) else {
            log::warn!("Unknown quality preset {:?}", name);
            return false;
        };
        self.settings.quality = quality;
        self.settings.save();
        self.game.apply_settings(&self.settings);
        log::info!("Quality set to {}", quality.as_str());
        true
    }

    pub fn quality(&self) -> String {
        self.settings.quality.as_str().to_string()
    }

    pub fn sound_enabled(&self) -> bool {
        self.settings.sound_enabled
    }

    /// Floored score for the HUD
    pub fn score(&self) -> f64 {
        self.game.state().stats.display_score() as f64
    }

    pub fn best(&self) -> f64 {
        self.game.state().stats.best as f64
    }

    pub fn speed_mult(&self) -> f64 {
        self.game.state().stats.speed_mult
    }

    /// "title", "running" or "crashed"
    pub fn mode(&self) -> String {
        self.game.state().mode.as_str().to_string()
    }

    /// Crash flash intensity after the reduced-motion preference
    pub fn crash_flash(&self) -> f64 {
        self.settings
            .effective_crash_flash(self.game.state().player.crash_flash)
    }

    /// Full state for the JS renderer
    pub fn snapshot_json(&self) -> String {
        match serde_json::to_string(self.game.state()) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Snapshot failed: {}", e);
                String::from("{}")
            }
        }
    }
}
