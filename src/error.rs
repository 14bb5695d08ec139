//! Error types
//!
//! Configuration errors are fatal at construction. Store errors never are:
//! the high-score policy downgrades them to a warning and a cold start.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen size must be positive, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },

    #[error("{entity} size must be positive, got {width}x{height}")]
    EntitySize {
        entity: &'static str,
        width: f32,
        height: f32,
    },

    #[error("{name} must be a finite non-negative number, got {value}")]
    Speed { name: &'static str, value: f32 },

    #[error("{name} must be a finite number greater than {min}, got {value}")]
    Scale {
        name: &'static str,
        value: f32,
        min: f32,
    },

    #[error("alien size {width}x{height} would lay out up to {bound} aliens, limit is {max}")]
    FleetTooLarge {
        width: f32,
        height: f32,
        bound: f64,
        max: usize,
    },

    #[error("ship_limit must be at least 1")]
    ShipLimit,

    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reading or writing the high-score store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("high score store is malformed: {0}")]
    Malformed(String),
}
