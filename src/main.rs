//! Super Morio entry point
//!
//! The web build is driven from JS through `super_morio::web::WebGame`.
//! Natively this runs a headless attract-mode session and prints a summary.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super_morio::Tuning;
    use super_morio::persistence::JsonFileStore;
    use super_morio::platform::{EventSink, GameLoop, Renderer};
    use super_morio::sim::{GameEvent, GameState, Mode};

    /// Headless autopilot demo
    #[derive(Parser, Debug)]
    #[command(name = "super-morio", version, about)]
    struct Args {
        /// Simulated seconds to run
        #[arg(long, default_value_t = 60.0)]
        seconds: f64,

        /// Simulated frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Spawn seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Best-score file
        #[arg(long, default_value = "super-morio-best.json")]
        best_file: PathBuf,

        /// Balance overrides as JSON
        #[arg(long)]
        tuning: Option<PathBuf>,
    }

    #[derive(Debug, Default)]
    struct Tally {
        runs: u32,
        jumps: u32,
        flags: u32,
        crashes: u32,
        best: Option<u64>,
    }

    impl EventSink for Tally {
        fn handle(&mut self, event: &GameEvent) {
            match event {
                GameEvent::RunStarted => self.runs += 1,
                GameEvent::Jump => self.jumps += 1,
                GameEvent::Collect => self.flags += 1,
                GameEvent::Crash => self.crashes += 1,
                GameEvent::NewBest(best) => self.best = Some(*best),
                GameEvent::Land => {}
            }
        }
    }

    /// Logs a status line once per simulated second
    struct StatusLine {
        every: u64,
        frame: u64,
    }

    impl Renderer for StatusLine {
        fn render(&mut self, state: &GameState) {
            self.frame += 1;
            if self.frame % self.every == 0 && state.mode == Mode::Running {
                log::debug!(
                    "t={:.1}s x={:.0} score={} speed={:.0}",
                    state.clock.t,
                    state.clock.scroll_x,
                    state.stats.display_score(),
                    state.scroll_speed()
                );
            }
        }
    }

    fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning, String> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json =
            std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
        Tuning::from_json(&json).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let args = Args::parse();

        if !(args.fps > 0.0 && args.seconds >= 0.0) {
            log::error!("--fps must be positive and --seconds non-negative");
            return ExitCode::FAILURE;
        }

        let tuning = match load_tuning(args.tuning.as_ref()) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Could not load tuning: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let seed = args.seed.unwrap_or_else(rand::random::<u64>);
        log::info!("Super Morio (native) demo, seed {}", seed);

        let store = JsonFileStore::new(&args.best_file);
        let mut game = GameLoop::with_tuning(tuning, store, Pcg32::seed_from_u64(seed));
        game.controls.autopilot = true;

        let frame_ms = 1000.0 / args.fps;
        let frames = (args.seconds * args.fps).round() as u64;
        let mut tally = Tally::default();
        let mut status = StatusLine {
            every: (args.fps.round() as u64).max(1),
            frame: 0,
        };

        for i in 0..frames {
            game.frame(i as f64 * frame_ms, &mut status, &mut tally);
        }

        let state = game.state();
        println!("Simulated {:.1}s with seed {}", args.seconds, seed);
        println!(
            "Runs: {}  Jumps: {}  Flags: {}  Crashes: {}",
            tally.runs, tally.jumps, tally.flags, tally.crashes
        );
        println!(
            "Last score: {}  Best: {}{}",
            state.stats.display_score(),
            state.stats.best,
            if tally.best.is_some() { " (new)" } else { "" }
        );
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is super_morio::web, this is just to satisfy the compiler
}
