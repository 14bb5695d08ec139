//! Game settings
//!
//! Static configuration is fixed for the lifetime of a process and may be
//! loaded from a JSON file. The values that escalate with each level live in
//! [`DynamicSettings`], which is reset at the start of every game.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::fleet::{MAX_FLEET_SIZE, fleet_size_bound};
use crate::sim::{Field, Orientation};

/// Static game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which way the fleet scrolls and advances
    pub orientation: Orientation,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Entity sizes (screen space) ===
    pub ship_size: Vec2,
    pub alien_size: Vec2,
    /// Bullet extent along the firing axis
    pub bullet_length: f32,
    /// Bullet extent across the firing axis
    pub bullet_width: f32,

    // === Level-1 speeds (pixels per tick) ===
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// Distance the fleet steps toward the player on each reversal
    pub fleet_drop_speed: f32,

    // === Rules ===
    /// Maximum bullets on screen at once
    pub bullets_allowed: usize,
    /// Ships per game
    pub ship_limit: u32,
    /// Points per alien at level 1
    pub alien_points: u32,

    // === Escalation ===
    /// Multiplier applied to speeds and drop distance on each level
    pub speedup_scale: f32,
    /// Multiplier applied to alien points on each level
    pub score_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Sideways,

            screen_width: 1200.0,
            screen_height: 800.0,

            ship_size: Vec2::new(60.0, 48.0),
            alien_size: Vec2::new(60.0, 58.0),
            bullet_length: 15.0,
            bullet_width: 3.0,

            ship_speed: 1.5,
            bullet_speed: 2.5,
            alien_speed: 1.0,
            fleet_drop_speed: 10.0,

            bullets_allowed: 3,
            ship_limit: 3,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,
        }
    }
}

impl Settings {
    /// Screen extent as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Bullet box in screen space for the configured orientation
    pub fn bullet_size(&self) -> Vec2 {
        self.orientation.compose(self.bullet_length, self.bullet_width)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0)
            || !self.screen_width.is_finite()
            || !self.screen_height.is_finite()
        {
            return Err(ConfigError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let bullet = self.bullet_size();
        for (entity, size) in [
            ("ship", self.ship_size),
            ("alien", self.alien_size),
            ("bullet", bullet),
        ] {
            if !(size.x > 0.0 && size.y > 0.0) || !size.is_finite() {
                return Err(ConfigError::EntitySize {
                    entity,
                    width: size.x,
                    height: size.y,
                });
            }
        }

        for (name, value) in [
            ("ship_speed", self.ship_speed),
            ("bullet_speed", self.bullet_speed),
            ("alien_speed", self.alien_speed),
            ("fleet_drop_speed", self.fleet_drop_speed),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::Speed { name, value });
            }
        }

        // Speeds must strictly grow each level; points only need to stay positive
        for (name, value, min) in [
            ("speedup_scale", self.speedup_scale, 1.0),
            ("score_scale", self.score_scale, 0.0),
        ] {
            if !(value > min) || !value.is_finite() {
                return Err(ConfigError::Scale { name, value, min });
            }
        }

        let field = Field::new(self.screen_size(), self.orientation);
        let bound = fleet_size_bound(&field, self.alien_size);
        if bound > MAX_FLEET_SIZE as f64 {
            return Err(ConfigError::FleetTooLarge {
                width: self.alien_size.x,
                height: self.alien_size.y,
                bound,
                max: MAX_FLEET_SIZE,
            });
        }

        if self.ship_limit == 0 {
            return Err(ConfigError::ShipLimit);
        }

        Ok(())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults if absent
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json_str(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Per-game values that reset at game start and escalate each level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicSettings {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    /// +1.0 scrolls toward increasing secondary coordinates, -1.0 the other way
    pub fleet_direction: f32,
    pub alien_points: u32,
}

impl DynamicSettings {
    /// Level-1 baseline
    pub fn new(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.ship_speed,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            fleet_drop_speed: settings.fleet_drop_speed,
            fleet_direction: 1.0,
            alien_points: settings.alien_points,
        }
    }

    /// Reset to the level-1 baseline
    pub fn initialize(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    /// Escalate for the next level. Compounds across calls.
    pub fn increase_speed(&mut self, settings: &Settings) {
        self.ship_speed *= settings.speedup_scale;
        self.bullet_speed *= settings.speedup_scale;
        self.alien_speed *= settings.speedup_scale;
        self.fleet_drop_speed *= settings.speedup_scale;
        self.alien_points = (self.alien_points as f32 * settings.score_scale) as u32;
    }
}
