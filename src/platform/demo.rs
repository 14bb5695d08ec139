//! Seeded autopilot input for headless demo runs

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::{InputEvent, InputSource, Key};

/// Frames between start presses, so a finished game is restarted
const RESTART_INTERVAL: u64 = 120;

/// Plays by sweeping back and forth and firing at random, then quits
#[derive(Debug, Clone)]
pub struct DemoInput {
    rng: Pcg32,
    frame: u64,
    frames: u64,
    held: Option<Key>,
}

impl DemoInput {
    /// Run for `frames` frames, then send quit
    pub fn new(seed: u64, frames: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            frames,
            held: None,
        }
    }
}

impl InputSource for DemoInput {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        let frame = self.frame;
        self.frame += 1;

        if frame >= self.frames {
            events.push(InputEvent::KeyDown(Key::Quit));
            return;
        }

        if frame % RESTART_INTERVAL == 0 {
            events.push(InputEvent::KeyDown(Key::Start));
            events.push(InputEvent::KeyUp(Key::Start));
        }

        // Change direction now and then
        if self.rng.random_bool(0.02) {
            if let Some(key) = self.held.take() {
                events.push(InputEvent::KeyUp(key));
            }
            let key = if self.rng.random_bool(0.5) {
                Key::MovePositive
            } else {
                Key::MoveNegative
            };
            events.push(InputEvent::KeyDown(key));
            self.held = Some(key);
        }

        if self.rng.random_bool(0.1) {
            events.push(InputEvent::KeyDown(Key::Fire));
            events.push(InputEvent::KeyUp(Key::Fire));
        }
    }
}
