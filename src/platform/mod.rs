//! Platform layer
//!
//! Glue between the deterministic simulation and whatever hosts it:
//! - Frame timing (`FrameClock`)
//! - Input (`Controls`)
//! - Drawing and sound hooks (`Renderer`, `EventSink`)
//! - The per-frame driver (`GameLoop`)

pub mod input;
pub mod time;

pub use input::{Controls, Key};
pub use time::FrameClock;

use crate::persistence::{ScoreStore, load_best_or_default, save_best_or_warn};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RandomSource, TickInput, tick};
use crate::tuning::Tuning;

/// Draws a frame from read-only state
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

/// Receives every simulation event (audio, HUD flashes, ...)
pub trait EventSink {
    fn handle(&mut self, event: &GameEvent);
}

/// Headless: draw nothing
impl Renderer for () {
    fn render(&mut self, _state: &GameState) {}
}

/// Headless: ignore events
impl EventSink for () {
    fn handle(&mut self, _event: &GameEvent) {}
}

/// Owns the game state and its collaborators and runs one frame at a time
pub struct GameLoop<S: ScoreStore, R: RandomSource> {
    state: GameState,
    clock: FrameClock,
    pub controls: Controls,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: RandomSource> GameLoop<S, R> {
    pub fn new(store: S, rng: R) -> Self {
        Self::with_tuning(Tuning::default(), store, rng)
    }

    /// Build a loop; the best score is read from `store` once, here
    pub fn with_tuning(tuning: Tuning, mut store: S, rng: R) -> Self {
        let best = load_best_or_default(&mut store);
        Self {
            state: GameState::with_tuning(tuning, best),
            clock: FrameClock::new(),
            controls: Controls::new(),
            store,
            rng,
        }
    }

    /// Run one animation frame stamped `now_ms`
    pub fn frame(&mut self, now_ms: f64, renderer: &mut impl Renderer, sink: &mut impl EventSink) {
        let dt = self.clock.advance(now_ms);
        let input = self.controls.take_input();
        self.step(&input, dt, renderer, sink);
    }

    /// Run one frame with an explicit input and `dt`
    pub fn step(
        &mut self,
        input: &TickInput,
        dt: f64,
        renderer: &mut impl Renderer,
        sink: &mut impl EventSink,
    ) {
        tick(&mut self.state, input, dt, &mut self.rng);

        for event in self.state.drain_events() {
            if let GameEvent::NewBest(best) = event {
                save_best_or_warn(&mut self.store, best);
            }
            sink.handle(&event);
        }

        renderer.render(&self.state);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Push preference changes (e.g. particle quality) into the running game
    pub fn apply_settings(&mut self, settings: &Settings) {
        settings.apply_to(&mut self.state.tuning);
        let cap = self.state.tuning.particles.max_particles;
        let particles = &mut self.state.world.particles;
        if particles.len() > cap {
            let excess = particles.len() - cap;
            particles.drain(..excess);
        }
    }

    /// Restart frame timing, e.g. when the page becomes visible again
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }
}
