//! Alien Invasion entry point
//!
//! Windowing, sprites and keyboard mapping live outside this crate, so the
//! native binary runs a headless demo: a seeded autopilot plays at the fixed
//! frame rate for a while, then quits and saves the high score.

use std::process::ExitCode;

use alien_invasion::consts::{HIGH_SCORE_FILE, SETTINGS_FILE, TICKS_PER_SECOND};
use alien_invasion::persistence::JsonFileStore;
use alien_invasion::platform::{DemoInput, FixedRateClock, RecordingSurface};
use alien_invasion::{Game, Settings};

/// Length of the demo session
const DEMO_SECONDS: u64 = 30;
const DEMO_SEED: u64 = 0x5eed;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Alien Invasion (headless demo) starting...");

    let settings = match Settings::load_or_default(SETTINGS_FILE) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut game = match Game::new(settings, JsonFileStore::new(HIGH_SCORE_FILE)) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut input = DemoInput::new(DEMO_SEED, DEMO_SECONDS * u64::from(TICKS_PER_SECOND));
    let mut surface = RecordingSurface::new();
    let mut clock = FixedRateClock::new(TICKS_PER_SECOND);

    if let Err(e) = game.run(&mut input, &mut surface, &mut clock) {
        log::warn!("Could not save high score: {}", e);
    }

    if let Some(board) = surface.scoreboard() {
        log::info!(
            "Final score {} at level {}, high score {}",
            board.score,
            board.level,
            board.high_score
        );
    }
    log::info!("{} frames presented", surface.frames_presented());

    ExitCode::SUCCESS
}
