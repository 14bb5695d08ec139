//! HUD and idle-screen elements
//!
//! Pure layout/text; drawing is the render surface's job.

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// Size of the idle "Play" button
pub const PLAY_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 50.0);

/// The idle-screen start affordance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayButton {
    pub rect: Rect,
    pub label: &'static str,
}

impl PlayButton {
    /// Centred on a screen of the given size
    pub fn centered(screen: Vec2) -> Self {
        Self {
            rect: Rect::new((screen - PLAY_BUTTON_SIZE) / 2.0, PLAY_BUTTON_SIZE),
            label: "Play",
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains_point(point)
    }
}

/// Text shown in the HUD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships_left: u32,
}

impl Scoreboard {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format_score(state.stats.score),
            high_score: format_score(state.stats.high_score),
            level: state.stats.level.to_string(),
            ships_left: state.stats.ships_left,
        }
    }
}

/// Round to the nearest ten and group thousands: 12345 -> "12,350"
pub fn format_score(score: u32) -> String {
    let rounded = (u64::from(score) + 5) / 10 * 10;
    let digits = rounded.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
