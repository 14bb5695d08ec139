//! Render surface seam

use crate::sim::{Alien, Bullet, Ship};
use crate::ui::{PlayButton, Scoreboard};

/// Draw target. The game calls these once per frame in a fixed order:
/// background, bullets, ship, aliens, scoreboard, play button (idle only),
/// then `present`.
pub trait RenderSurface {
    fn fill_background(&mut self);
    fn draw_bullet(&mut self, bullet: &Bullet);
    fn draw_ship(&mut self, ship: &Ship);
    fn draw_alien(&mut self, alien: &Alien);
    fn draw_scoreboard(&mut self, scoreboard: &Scoreboard);
    fn draw_play_button(&mut self, button: &PlayButton);
    /// Make the frame visible
    fn present(&mut self);
    fn set_cursor_visible(&mut self, visible: bool);
}
