//! Game state and core simulation types
//!
//! One `GameState` is the whole simulation context. The renderer only ever
//! reads it; `tick` is the only writer.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::spawner::{self, RandomSource};
use crate::consts::VIEW_WIDTH;
use crate::tuning::Tuning;

/// Run/mode state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Idle, slow ambient scroll, waiting for a start signal
    Title,
    /// Full simulation active
    Running,
    /// Frozen after a crash, waiting for a restart signal
    Crashed,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Title => "title",
            Mode::Running => "running",
            Mode::Crashed => "crashed",
        }
    }
}

/// Discrete things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Jump,
    Land,
    Collect,
    Crash,
    /// The floored score passed the stored best
    NewBest(u64),
}

/// Elapsed run time and camera position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldClock {
    /// Seconds since the run started (keeps counting on the title screen)
    pub t: f64,
    /// World x of the viewport's left edge
    pub scroll_x: f64,
}

/// The skier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal screen position
    pub screen_x: f64,
    /// Feet position (y-down)
    pub y: f64,
    pub vy: f64,
    pub on_ground: bool,
    pub jump_power: f64,
    /// Cosmetic crash flash intensity (0-1)
    pub crash_flash: f64,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            screen_x: tuning.player.screen_x,
            y: tuning.terrain.height_at(tuning.player.screen_x, 0.0),
            vy: 0.0,
            on_ground: true,
            jump_power: tuning.player.jump_power,
            crash_flash: 0.0,
        }
    }

    /// World x of the player for a given camera position
    #[inline]
    pub fn world_x(&self, scroll_x: f64) -> f64 {
        scroll_x + self.screen_x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Tree,
    Rock,
}

/// Something to jump over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// World x of the obstacle's centre
    pub x: f64,
    /// Ground height at spawn time
    pub y: f64,
    /// Full width, centred on `x`
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    /// y of the obstacle's top edge
    #[inline]
    pub fn top(&self) -> f64 {
        self.y - self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Flag,
}

/// A flag to grab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub x: f64,
    pub y: f64,
    pub taken: bool,
    /// Presentation only
    pub bob: f64,
}

/// Snow powder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World position
    pub pos: DVec2,
    pub vel: DVec2,
    /// Seconds left
    pub life: f64,
}

/// Score and speed for the current run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub score: f64,
    /// Base scroll speed (before the multiplier)
    pub speed: f64,
    pub speed_mult: f64,
    pub best: u64,
}

impl RunStats {
    /// Score as shown to the player
    #[inline]
    pub fn display_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }
}

/// Entity collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    pub particles: Vec<Particle>,
    /// World x where the next entity will be spawned
    pub next_spawn_x: f64,
}

impl World {
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.pickups.clear();
        self.particles.clear();
        self.next_spawn_x = 0.0;
    }
}

/// Complete simulation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: Mode,
    pub clock: WorldClock,
    pub player: Player,
    pub world: World,
    pub stats: RunStats,
    /// Jump request latch; survives until the player is grounded
    pub jump_queued: bool,
    #[serde(skip)]
    pub tuning: Tuning,
    /// Events raised since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a title-screen state with the default balance
    pub fn new(best: u64) -> Self {
        Self::with_tuning(Tuning::default(), best)
    }

    pub fn with_tuning(tuning: Tuning, best: u64) -> Self {
        Self {
            mode: Mode::Title,
            clock: WorldClock::default(),
            player: Player::new(&tuning),
            world: World::default(),
            stats: RunStats {
                score: 0.0,
                speed: tuning.speed.base,
                speed_mult: 1.0,
                best,
            },
            jump_queued: false,
            tuning,
            events: Vec::new(),
        }
    }

    /// Reset everything that belongs to a run and switch to `Running`
    ///
    /// Used for both title→running and crashed→running.
    pub fn start_run<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.clock = WorldClock::default();
        self.stats.score = 0.0;
        self.stats.speed = self.tuning.speed.base;
        self.stats.speed_mult = 1.0;
        self.player = Player::new(&self.tuning);
        self.world.clear();
        self.jump_queued = false;

        let spawn = &self.tuning.spawn;
        self.world.next_spawn_x = self.clock.scroll_x + VIEW_WIDTH + spawn.initial_offset;
        for _ in 0..spawn.initial_count {
            let x = self.world.next_spawn_x;
            spawner::spawn_at(&mut self.world, &self.tuning, x, self.clock.t, rng);
            self.world.next_spawn_x = x + self.tuning.spawn.initial_spacing;
        }

        self.mode = Mode::Running;
        self.push_event(GameEvent::RunStarted);
        log::info!("Run started (best {})", self.stats.best);
    }

    /// Switch to `Crashed`
    pub fn crash(&mut self) {
        self.mode = Mode::Crashed;
        self.player.crash_flash = 1.0;
        self.push_event(GameEvent::Crash);
        log::info!(
            "Crashed at {:.0} with score {}",
            self.clock.scroll_x,
            self.stats.display_score()
        );
    }

    /// Player world x for the current camera position
    #[inline]
    pub fn player_world_x(&self) -> f64 {
        self.player.world_x(self.clock.scroll_x)
    }

    /// Effective scroll speed
    #[inline]
    pub fn scroll_speed(&self) -> f64 {
        self.stats.speed * self.stats.speed_mult
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain (oldest first)
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_is_title() {
        let state = GameState::new(42);
        assert_eq!(state.mode, Mode::Title);
        assert_eq!(state.stats.best, 42);
        assert!(state.player.on_ground);
        assert!(state.world.obstacles.is_empty());
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_start_run_populates_opening_view() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(0);
        state.start_run(&mut rng);

        assert_eq!(state.mode, Mode::Running);
        let spawned = state.world.obstacles.len() + state.world.pickups.len();
        assert_eq!(spawned, 5);
        let expected_next = VIEW_WIDTH + 260.0 + 5.0 * 180.0;
        assert!((state.world.next_spawn_x - expected_next).abs() < 1e-9);
        assert_eq!(state.drain_events(), vec![GameEvent::RunStarted]);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_start_run_clears_previous_run() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = GameState::new(0);
        state.start_run(&mut rng);
        state.clock.t = 30.0;
        state.clock.scroll_x = 5000.0;
        state.stats.score = 99.0;
        state.stats.speed_mult = 1.5;
        state.jump_queued = true;
        state.crash();

        state.start_run(&mut rng);
        assert_eq!(state.clock, WorldClock::default());
        assert_eq!(state.stats.score, 0.0);
        assert_eq!(state.stats.speed_mult, 1.0);
        assert!(!state.jump_queued);
        assert_eq!(state.player.crash_flash, 0.0);
        assert!(state.world.particles.is_empty());
        assert!(state.world.obstacles.iter().all(|o| o.x >= VIEW_WIDTH + 260.0));
    }

    #[test]
    fn test_display_score_floors() {
        let stats = RunStats {
            score: 10.99,
            speed: 120.0,
            speed_mult: 1.0,
            best: 0,
        };
        assert_eq!(stats.display_score(), 10);
    }
}
