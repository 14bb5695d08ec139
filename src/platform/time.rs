//! Frame pacing

use std::time::{Duration, Instant};

/// Paces the loop between frames
pub trait FrameClock {
    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}

/// Sleeps out whatever is left of a fixed frame budget
#[derive(Debug)]
pub struct FixedRateClock {
    frame: Duration,
    last: Instant,
}

impl FixedRateClock {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / frames_per_second.max(1),
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl FrameClock for FixedRateClock {
    fn wait_for_next_frame(&mut self) {
        let elapsed = self.last.elapsed();
        if let Some(remaining) = self.frame.checked_sub(elapsed) {
            std::thread::sleep(remaining);
        }
        self.last = Instant::now();
    }
}

/// Never waits
#[derive(Debug, Default, Clone, Copy)]
pub struct UnpacedClock;

impl FrameClock for UnpacedClock {
    fn wait_for_next_frame(&mut self) {}
}
