//! Alien Invasion - tick-driven core of a fleet-invasion arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fleet, bullets, collisions, progression)
//! - `settings`: Static configuration and per-level escalation
//! - `persistence` / `highscores`: Cross-session high score
//! - `platform`: Input, render and frame-pacing seams
//! - `game`: The loop tying them together

pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ConfigError, StoreError};
pub use game::Game;
pub use settings::{DynamicSettings, Settings};

/// Game configuration constants
pub mod consts {
    /// Target simulation and render rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Length of the freeze after losing a ship (one second)
    pub const LIFE_LOSS_STALL_TICKS: u32 = TICKS_PER_SECOND;

    /// Default high score file, relative to the working directory
    pub const HIGH_SCORE_FILE: &str = "high_score.json";

    /// Optional settings file, relative to the working directory
    pub const SETTINGS_FILE: &str = "settings.json";
}
