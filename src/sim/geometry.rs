//! Axis-aligned geometry and the orientation-neutral playfield
//!
//! Layout, motion and collision are written in terms of two logical axes:
//! the primary axis, along which the fleet advances toward the player, and
//! the secondary axis, along which it scrolls. [`Field`] maps those onto
//! screen coordinates so the rest of the simulation never branches on
//! orientation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    #[inline]
    pub fn component_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// Which way the game is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Player on the left edge, fleet scrolls vertically and advances leftward
    #[default]
    Sideways,
    /// Player on the bottom edge, fleet scrolls horizontally and advances downward
    Vertical,
}

impl Orientation {
    pub fn primary(self) -> Axis {
        match self {
            Orientation::Sideways => Axis::X,
            Orientation::Vertical => Axis::Y,
        }
    }

    pub fn secondary(self) -> Axis {
        match self {
            Orientation::Sideways => Axis::Y,
            Orientation::Vertical => Axis::X,
        }
    }

    /// Sign of screen-coordinate change when moving toward the player
    pub fn toward_player(self) -> f32 {
        match self {
            Orientation::Sideways => -1.0,
            Orientation::Vertical => 1.0,
        }
    }

    /// Build a screen-space vector from (primary, secondary) components
    pub fn compose(self, primary: f32, secondary: f32) -> Vec2 {
        match self {
            Orientation::Sideways => Vec2::new(primary, secondary),
            Orientation::Vertical => Vec2::new(secondary, primary),
        }
    }
}

/// Axis-aligned box, `pos` is the minimum corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self, axis: Axis) -> f32 {
        axis.of(self.pos)
    }

    #[inline]
    pub fn max(&self, axis: Axis) -> f32 {
        axis.of(self.pos) + axis.of(self.size)
    }

    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.of(self.size)
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }

    /// Point containment, inclusive of the minimum edges
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.pos.x
            && p.x < self.pos.x + self.size.x
            && p.y >= self.pos.y
            && p.y < self.pos.y + self.size.y
    }
}

/// The screen seen through an orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub size: Vec2,
    pub orientation: Orientation,
}

impl Field {
    pub fn new(size: Vec2, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    /// Screen extent along the primary axis
    pub fn depth_extent(&self) -> f32 {
        self.orientation.primary().of(self.size)
    }

    /// Screen extent along the secondary axis
    pub fn lateral_extent(&self) -> f32 {
        self.orientation.secondary().of(self.size)
    }

    /// Distance from the player-side edge to the near side of the box.
    /// Negative once the box has crossed that edge.
    pub fn depth(&self, rect: &Rect) -> f32 {
        let axis = self.orientation.primary();
        match self.orientation {
            Orientation::Sideways => rect.min(axis),
            Orientation::Vertical => axis.of(self.size) - rect.max(axis),
        }
    }

    /// Place the box so its near side sits `depth` from the player-side edge
    pub fn set_depth(&self, rect: &mut Rect, depth: f32) {
        let axis = self.orientation.primary();
        let screen = axis.of(self.size);
        let extent = rect.extent(axis);
        *axis.component_mut(&mut rect.pos) = match self.orientation {
            Orientation::Sideways => depth,
            Orientation::Vertical => screen - extent - depth,
        };
    }

    /// Secondary coordinate of the box's minimum corner
    pub fn lateral(&self, rect: &Rect) -> f32 {
        rect.min(self.orientation.secondary())
    }

    pub fn set_lateral(&self, rect: &mut Rect, lateral: f32) {
        *self.orientation.secondary().component_mut(&mut rect.pos) = lateral;
    }

    /// Move the box toward the player (negative `distance` moves away)
    pub fn advance(&self, rect: &mut Rect, distance: f32) {
        *self.orientation.primary().component_mut(&mut rect.pos) +=
            self.orientation.toward_player() * distance;
    }

    /// Move the box along the secondary axis
    pub fn scroll(&self, rect: &mut Rect, distance: f32) {
        *self.orientation.secondary().component_mut(&mut rect.pos) += distance;
    }

    /// Whether the box touches or passes either secondary-axis boundary
    pub fn at_lateral_edge(&self, rect: &Rect) -> bool {
        let axis = self.orientation.secondary();
        rect.min(axis) <= 0.0 || rect.max(axis) >= axis.of(self.size)
    }

    /// Whether the box has crossed the player-side edge
    pub fn crossed_near_edge(&self, rect: &Rect) -> bool {
        self.depth(rect) < 0.0
    }

    /// Whether the box lies entirely beyond the far (spawn-side) edge
    pub fn beyond_far_edge(&self, rect: &Rect) -> bool {
        self.depth(rect) >= self.depth_extent()
    }

    /// A box of `size` with its near side at `depth` and minimum corner at `lateral`
    pub fn place(&self, size: Vec2, depth: f32, lateral: f32) -> Rect {
        let mut rect = Rect::new(Vec2::ZERO, size);
        self.set_depth(&mut rect, depth);
        self.set_lateral(&mut rect, lateral);
        rect
    }
}
