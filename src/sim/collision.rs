//! Collision detection between bullets, aliens, the ship and the screen
//!
//! All checks are brute-force box overlap tests; fleets and bullet counts
//! are small enough that O(n·m) per tick is fine.

use super::geometry::{Field, Rect};
use super::state::{Alien, Bullet};

/// Remove every bullet and alien that overlap each other.
///
/// An alien hit by several bullets is removed once; a bullet overlapping
/// several aliens removes all of them. `hits` is scratch space reused
/// between ticks. Returns the number of aliens removed.
pub fn resolve_bullet_alien(
    bullets: &mut Vec<Bullet>,
    aliens: &mut Vec<Alien>,
    hits: &mut Vec<bool>,
) -> u32 {
    if bullets.is_empty() || aliens.is_empty() {
        return 0;
    }

    hits.clear();
    hits.resize(bullets.len(), false);

    let mut removed = 0;
    aliens.retain(|alien| {
        let mut hit = false;
        for (bullet, bullet_hit) in bullets.iter().zip(hits.iter_mut()) {
            if bullet.rect.intersects(&alien.rect) {
                *bullet_hit = true;
                hit = true;
            }
        }
        if hit {
            removed += 1;
        }
        !hit
    });

    if removed > 0 {
        let mut flags = hits.iter();
        bullets.retain(|_| !flags.next().copied().unwrap_or(false));
    }

    removed
}

/// Whether any alien overlaps the ship
pub fn ship_hit(ship: &Rect, aliens: &[Alien]) -> bool {
    aliens.iter().any(|alien| alien.rect.intersects(ship))
}

/// Whether any alien has crossed the player-side edge
pub fn alien_reached_near_edge(aliens: &[Alien], field: &Field) -> bool {
    aliens
        .iter()
        .any(|alien| field.crossed_near_edge(&alien.rect))
}

/// Drop bullets that have left the screen on the far side
pub fn remove_offscreen_bullets(bullets: &mut Vec<Bullet>, field: &Field) {
    bullets.retain(|bullet| !field.beyond_far_edge(&bullet.rect));
}
