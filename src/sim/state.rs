//! Game state and core simulation types
//!
//! Everything the tick function reads or writes lives in [`GameState`];
//! there is no ambient global state.

use std::collections::VecDeque;

use glam::Vec2;

use super::geometry::{Field, Rect};
use super::stats::GameStats;
use crate::consts::LIFE_LOSS_STALL_TICKS;
use crate::error::ConfigError;
use crate::settings::{DynamicSettings, Settings};

/// Externally visible phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Idle screen, waiting for a start trigger
    Inactive,
    /// Normal ticking
    Active,
}

/// Events kept between drains; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Things that happened during a tick, drained by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    AliensDestroyed { count: u32, points: u32 },
    NewHighScore(u32),
    LevelCleared { level: u32 },
    ShipLost { ships_left: u32 },
    GameOver { score: u32 },
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub rect: Rect,
    /// Moving toward increasing secondary coordinates
    pub moving_positive: bool,
    /// Moving toward decreasing secondary coordinates
    pub moving_negative: bool,
}

impl Ship {
    /// A ship at its starting position
    pub fn new(size: Vec2, field: &Field) -> Self {
        let mut ship = Self {
            rect: Rect::new(Vec2::ZERO, size),
            moving_positive: false,
            moving_negative: false,
        };
        ship.center(field);
        ship
    }

    /// Against the player-side edge, centred along the secondary axis
    pub fn center(&mut self, field: &Field) {
        let extent = self.rect.extent(field.orientation.secondary());
        field.set_depth(&mut self.rect, 0.0);
        field.set_lateral(&mut self.rect, (field.lateral_extent() - extent) / 2.0);
    }

    /// Apply movement intent, keeping the ship on screen
    pub fn update(&mut self, field: &Field, speed: f32) {
        let axis = field.orientation.secondary();
        let limit = field.lateral_extent();
        if self.moving_positive && self.rect.max(axis) < limit {
            let step = speed.min(limit - self.rect.max(axis));
            field.scroll(&mut self.rect, step);
        }
        if self.moving_negative && self.rect.min(axis) > 0.0 {
            let step = speed.min(self.rect.min(axis));
            field.scroll(&mut self.rect, -step);
        }
    }
}

/// A bullet fired by the ship
#[derive(Debug, Clone)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    /// Front edge flush with the ship's front, centred on the ship
    pub fn fired_from(ship: &Ship, size: Vec2, field: &Field) -> Self {
        let primary = field.orientation.primary();
        let secondary = field.orientation.secondary();

        let depth = field.depth(&ship.rect) + ship.rect.extent(primary) - primary.of(size);
        let lateral = field.lateral(&ship.rect)
            + (ship.rect.extent(secondary) - secondary.of(size)) / 2.0;

        Self {
            rect: field.place(size, depth, lateral),
        }
    }

    /// Move away from the player
    pub fn update(&mut self, field: &Field, speed: f32) {
        field.advance(&mut self.rect, -speed);
    }
}

/// One member of the fleet. Velocity is shared fleet-wide.
#[derive(Debug, Clone)]
pub struct Alien {
    pub rect: Rect,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Static configuration
    pub settings: Settings,
    /// Screen geometry for the configured orientation
    pub field: Field,
    /// Per-game escalating values
    pub dynamic: DynamicSettings,
    pub stats: GameStats,
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Remaining ticks of the post-hit stall (0 = not stalled)
    pub stall_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    events: VecDeque<GameEvent>,
    /// Reused per tick by bullet/alien resolution
    pub(crate) bullet_hits: Vec<bool>,
}

impl GameState {
    /// Build an idle game. Fails on invalid settings.
    pub fn new(settings: Settings, high_score: u32) -> Result<Self, ConfigError> {
        settings.validate()?;

        let field = Field::new(settings.screen_size(), settings.orientation);
        let ship = Ship::new(settings.ship_size, &field);

        Ok(Self {
            dynamic: DynamicSettings::new(&settings),
            stats: GameStats::new(settings.ship_limit, high_score),
            phase: GamePhase::Inactive,
            ship,
            bullets: Vec::with_capacity(settings.bullets_allowed),
            aliens: Vec::new(),
            stall_ticks: 0,
            time_ticks: 0,
            events: VecDeque::new(),
            bullet_hits: Vec::with_capacity(settings.bullets_allowed),
            field,
            settings,
        })
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// In the pause that follows losing a ship
    pub fn is_stalled(&self) -> bool {
        self.stall_ticks > 0
    }

    /// Begin the post-hit stall
    pub(crate) fn start_stall(&mut self) {
        self.stall_ticks = LIFE_LOSS_STALL_TICKS;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> std::collections::vec_deque::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}
