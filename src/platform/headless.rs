//! Headless input and render implementations

use std::collections::VecDeque;

use super::input::{InputEvent, InputSource};
use super::render::RenderSurface;
use crate::sim::{Alien, Bullet, Rect, Ship};
use crate::ui::{PlayButton, Scoreboard};

/// Input replayed from a queue, one batch of events per frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue the events for one more frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        if let Some(frame) = self.frames.pop_front() {
            events.extend(frame);
        }
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Bullet(Rect),
    Ship(Rect),
    Alien(Rect),
    Scoreboard(Scoreboard),
    PlayButton(Rect),
    Present,
}

/// Records the draw calls of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames_presented: u64,
    cursor_visible: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            cursor_visible: true,
            ..Default::default()
        }
    }

    /// Draw calls since the last background fill
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Scoreboard drawn in the most recent frame
    pub fn scoreboard(&self) -> Option<&Scoreboard> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Scoreboard(board) => Some(board),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn fill_background(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Background);
    }

    fn draw_bullet(&mut self, bullet: &Bullet) {
        self.commands.push(DrawCommand::Bullet(bullet.rect));
    }

    fn draw_ship(&mut self, ship: &Ship) {
        self.commands.push(DrawCommand::Ship(ship.rect));
    }

    fn draw_alien(&mut self, alien: &Alien) {
        self.commands.push(DrawCommand::Alien(alien.rect));
    }

    fn draw_scoreboard(&mut self, scoreboard: &Scoreboard) {
        self.commands.push(DrawCommand::Scoreboard(scoreboard.clone()));
    }

    fn draw_play_button(&mut self, button: &PlayButton) {
        self.commands.push(DrawCommand::PlayButton(button.rect));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}
