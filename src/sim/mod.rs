//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One call to `tick` per frame, no wall-clock time
//! - Stable iteration order (insertion order of the entity vectors)
//! - No rendering, input or storage dependencies

pub mod collision;
pub mod fleet;
pub mod geometry;
pub mod state;
pub mod stats;
pub mod tick;

pub use collision::{alien_reached_near_edge, resolve_bullet_alien, ship_hit};
pub use fleet::{create_fleet, fleet_layout, update_fleet};
pub use geometry::{Axis, Field, Orientation, Rect};
pub use state::{Alien, Bullet, GameEvent, GamePhase, GameState, Ship};
pub use stats::GameStats;
pub use tick::{fire_bullet, start_game, tick};
