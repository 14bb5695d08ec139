//! Input events

use glam::Vec2;

/// Logical keys; mapping from physical keycodes happens in the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move toward increasing secondary coordinates (down / right)
    MovePositive,
    /// Move toward decreasing secondary coordinates (up / left)
    MoveNegative,
    Fire,
    Start,
    Quit,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or equivalent
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer button pressed at screen coordinates
    PointerDown(Vec2),
}

/// Source of input events, polled once per frame
pub trait InputSource {
    /// Append every event that arrived since the last poll
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);
}
