//! Game loop
//!
//! Owns the simulation state and the high score store. Each frame polls
//! input, maps events onto the simulation, ticks it while Active, and draws.
//! The loop only ends on an exit trigger, and always syncs the high score
//! before returning.

use crate::error::{ConfigError, StoreError};
use crate::highscores::{load_high_score, sync_high_score};
use crate::persistence::HighScoreStore;
use crate::platform::{FrameClock, InputEvent, InputSource, Key, RenderSurface};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, fire_bullet, start_game, tick};
use crate::ui::{PlayButton, Scoreboard};

/// A game session bound to a high score store
pub struct Game<S: HighScoreStore> {
    state: GameState,
    store: S,
    play_button: PlayButton,
    /// Reused input buffer
    events: Vec<InputEvent>,
    exit_requested: bool,
}

impl<S: HighScoreStore> Game<S> {
    /// Load the high score and build an idle game
    pub fn new(settings: Settings, store: S) -> Result<Self, ConfigError> {
        let high_score = load_high_score(&store);
        let state = GameState::new(settings, high_score)?;
        let play_button = PlayButton::centered(state.settings.screen_size());

        Ok(Self {
            state,
            store,
            play_button,
            events: Vec::new(),
            exit_requested: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn play_button(&self) -> &PlayButton {
        &self.play_button
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Run frames until an exit trigger, then persist the high score.
    /// Returns whether the store was written.
    pub fn run<I, R, C>(
        &mut self,
        input: &mut I,
        surface: &mut R,
        clock: &mut C,
    ) -> Result<bool, StoreError>
    where
        I: InputSource + ?Sized,
        R: RenderSurface + ?Sized,
        C: FrameClock + ?Sized,
    {
        log::info!("Entering game loop");
        while !self.exit_requested {
            self.frame(input, surface);
            clock.wait_for_next_frame();
        }
        self.shutdown()
    }

    /// One frame: input, update, render
    pub fn frame<I, R>(&mut self, input: &mut I, surface: &mut R)
    where
        I: InputSource + ?Sized,
        R: RenderSurface + ?Sized,
    {
        let mut events = std::mem::take(&mut self.events);
        events.clear();
        input.poll_events(&mut events);
        for event in events.drain(..) {
            self.handle_event(event);
            if self.exit_requested {
                break;
            }
        }
        self.events = events;

        if self.exit_requested {
            return;
        }

        tick(&mut self.state);
        self.dispatch_game_events(surface);
        self.render(surface);
    }

    /// Map one input event onto the simulation
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
            InputEvent::KeyDown(Key::MovePositive) => self.state.ship.moving_positive = true,
            InputEvent::KeyUp(Key::MovePositive) => self.state.ship.moving_positive = false,
            InputEvent::KeyDown(Key::MoveNegative) => self.state.ship.moving_negative = true,
            InputEvent::KeyUp(Key::MoveNegative) => self.state.ship.moving_negative = false,
            InputEvent::KeyDown(Key::Fire) => {
                fire_bullet(&mut self.state);
            }
            InputEvent::KeyDown(Key::Start) => {
                if !self.state.is_active() {
                    start_game(&mut self.state);
                }
            }
            InputEvent::PointerDown(pos) => {
                if !self.state.is_active() && self.play_button.contains(pos) {
                    start_game(&mut self.state);
                }
            }
            InputEvent::KeyUp(_) => {}
        }
    }

    /// Write the high score back if it beats the stored one
    pub fn shutdown(&mut self) -> Result<bool, StoreError> {
        sync_high_score(&mut self.store, self.state.stats.high_score)
    }

    fn dispatch_game_events<R: RenderSurface + ?Sized>(&mut self, surface: &mut R) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::GameStarted => surface.set_cursor_visible(false),
                GameEvent::GameOver { .. } => surface.set_cursor_visible(true),
                GameEvent::NewHighScore(score) => log::debug!("New high score {}", score),
                GameEvent::AliensDestroyed { count, points } => {
                    log::debug!("{} aliens destroyed for {} points", count, points)
                }
                GameEvent::LevelCleared { .. } | GameEvent::ShipLost { .. } => {}
            }
        }
    }

    fn render<R: RenderSurface + ?Sized>(&self, surface: &mut R) {
        surface.fill_background();
        for bullet in &self.state.bullets {
            surface.draw_bullet(bullet);
        }
        surface.draw_ship(&self.state.ship);
        for alien in &self.state.aliens {
            surface.draw_alien(alien);
        }
        surface.draw_scoreboard(&Scoreboard::from_state(&self.state));
        if !self.state.is_active() {
            surface.draw_play_button(&self.play_button);
        }
        surface.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::platform::{DrawCommand, RecordingSurface, ScriptedInput, UnpacedClock};
    use crate::sim::{Alien, GamePhase, Rect};
    use glam::Vec2;

    fn game(store: MemoryStore) -> Game<MemoryStore> {
        Game::new(Settings::default(), store).unwrap()
    }

    #[test]
    fn test_new_loads_high_score() {
        let g = game(MemoryStore::with_contents("640"));
        assert_eq!(g.state().stats.high_score, 640);
        assert_eq!(g.state().phase, GamePhase::Inactive);

        let g = game(MemoryStore::with_contents("garbage"));
        assert_eq!(g.state().stats.high_score, 0);
    }

    #[test]
    fn test_invalid_settings_are_fatal() {
        let settings = Settings {
            ship_limit: 0,
            ..Default::default()
        };
        assert!(Game::new(settings, MemoryStore::new()).is_err());
    }

    #[test]
    fn test_idle_frame_draws_play_button() {
        let mut g = game(MemoryStore::new());
        let mut input = ScriptedInput::default();
        let mut surface = RecordingSurface::new();

        g.frame(&mut input, &mut surface);

        let commands = surface.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Background));
        assert!(matches!(commands[1], DrawCommand::Ship(_)));
        assert!(matches!(commands[2], DrawCommand::Scoreboard(_)));
        assert!(matches!(commands[3], DrawCommand::PlayButton(_)));
        assert_eq!(commands.last(), Some(&DrawCommand::Present));
    }

    #[test]
    fn test_active_frame_draw_order() {
        let mut g = game(MemoryStore::new());
        let mut input = ScriptedInput::new([vec![
            InputEvent::KeyDown(Key::Start),
            InputEvent::KeyDown(Key::Fire),
        ]]);
        let mut surface = RecordingSurface::new();

        g.frame(&mut input, &mut surface);

        let kinds: Vec<_> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Background => "bg",
                DrawCommand::Bullet(_) => "bullet",
                DrawCommand::Ship(_) => "ship",
                DrawCommand::Alien(_) => "alien",
                DrawCommand::Scoreboard(_) => "hud",
                DrawCommand::PlayButton(_) => "button",
                DrawCommand::Present => "present",
            })
            .collect();
        let mut expected = vec!["bg", "bullet", "ship"];
        expected.extend(std::iter::repeat_n("alien", 36));
        expected.extend(["hud", "present"]);
        assert_eq!(kinds, expected);
        assert!(!surface.cursor_visible());
    }

    #[test]
    fn test_pointer_starts_only_on_button() {
        let mut g = game(MemoryStore::new());
        let inside = g.play_button().rect.pos + Vec2::new(5.0, 5.0);

        g.handle_event(InputEvent::PointerDown(Vec2::new(5.0, 5.0)));
        assert_eq!(g.state().phase, GamePhase::Inactive);

        g.handle_event(InputEvent::PointerDown(inside));
        assert_eq!(g.state().phase, GamePhase::Active);
    }

    #[test]
    fn test_start_ignored_while_active() {
        let mut g = game(MemoryStore::new());
        g.handle_event(InputEvent::KeyDown(Key::Start));
        g.state.stats.score = 300;

        g.handle_event(InputEvent::KeyDown(Key::Start));
        let inside = g.play_button().rect.pos + Vec2::new(5.0, 5.0);
        g.handle_event(InputEvent::PointerDown(inside));
        assert_eq!(g.state().stats.score, 300);
    }

    #[test]
    fn test_movement_flags_follow_keys() {
        let mut g = game(MemoryStore::new());
        g.handle_event(InputEvent::KeyDown(Key::MovePositive));
        g.handle_event(InputEvent::KeyDown(Key::MoveNegative));
        assert!(g.state().ship.moving_positive);
        assert!(g.state().ship.moving_negative);

        g.handle_event(InputEvent::KeyUp(Key::MovePositive));
        assert!(!g.state().ship.moving_positive);
        assert!(g.state().ship.moving_negative);
    }

    #[test]
    fn test_game_over_reveals_cursor() {
        let mut g = game(MemoryStore::new());
        let mut surface = RecordingSurface::new();
        let mut input = ScriptedInput::new([vec![InputEvent::KeyDown(Key::Start)]]);
        g.frame(&mut input, &mut surface);
        assert!(!surface.cursor_visible());

        g.state.stats.ships_left = 1;
        let ship = g.state.ship.rect.pos;
        g.state.aliens = vec![Alien {
            rect: Rect::new(ship, g.state.settings.alien_size),
        }];
        g.frame(&mut input, &mut surface);

        assert_eq!(g.state().phase, GamePhase::Inactive);
        assert!(surface.cursor_visible());
        assert!(surface
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::PlayButton(_))));
    }

    #[test]
    fn test_quit_persists_high_score() {
        let mut g = game(MemoryStore::with_contents("100"));
        g.handle_event(InputEvent::KeyDown(Key::Start));
        g.state.stats.add_score(450);

        let mut input = ScriptedInput::new([
            vec![],
            vec![InputEvent::Quit, InputEvent::KeyDown(Key::Fire)],
        ]);
        let mut surface = RecordingSurface::new();
        let written = g.run(&mut input, &mut surface, &mut UnpacedClock).unwrap();

        assert!(written);
        assert!(g.exit_requested());
        assert_eq!(g.store().load().unwrap(), Some(450));
        // The quit frame is neither ticked nor drawn, and later events are dropped
        assert_eq!(surface.frames_presented(), 1);
        assert!(g.state().bullets.is_empty());
    }

    #[test]
    fn test_quit_keeps_better_stored_score() {
        let mut g = game(MemoryStore::with_contents("100"));
        let mut input = ScriptedInput::new([vec![InputEvent::KeyDown(Key::Quit)]]);
        let written = g
            .run(&mut input, &mut RecordingSurface::new(), &mut UnpacedClock)
            .unwrap();

        assert!(!written);
        assert_eq!(g.store().load().unwrap(), Some(100));
    }
}
