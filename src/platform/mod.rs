//! Platform abstraction layer
//!
//! The game core talks to the outside world only through these seams:
//! - Input events (already mapped from raw keycodes)
//! - A render surface accepting draw commands
//! - A frame clock for pacing
//!
//! Headless implementations back the tests and the native demo.

pub mod demo;
pub mod headless;
pub mod input;
pub mod render;
pub mod time;

pub use demo::DemoInput;
pub use headless::{DrawCommand, RecordingSurface, ScriptedInput};
pub use input::{InputEvent, InputSource, Key};
pub use render::RenderSurface;
pub use time::{FixedRateClock, FrameClock, UnpacedClock};
