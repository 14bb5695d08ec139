//! Fleet layout and rigid-body fleet motion

use glam::Vec2;

use super::geometry::{Field, Rect};
use super::state::Alien;

/// Rows of aliens must stay this many alien extents away from the player
pub const SPAWN_MARGIN_EXTENTS: f32 = 8.0;

/// Largest fleet a configuration may lay out
pub const MAX_FLEET_SIZE: usize = 10_000;

/// Upper bound on the number of aliens [`fleet_layout`] places, computed
/// without building the layout
pub fn fleet_size_bound(field: &Field, alien_size: Vec2) -> f64 {
    let depth_step = f64::from(field.orientation.primary().of(alien_size));
    let lateral_step = f64::from(field.orientation.secondary().of(alien_size));
    let rows = (f64::from(field.depth_extent()) / (2.0 * depth_step)).floor() + 1.0;
    let columns = (f64::from(field.lateral_extent()) / (2.0 * lateral_step)).floor() + 1.0;
    rows * columns
}

/// Compute the grid of alien boxes for a screen.
///
/// Rows start flush with the far edge and step toward the player two alien
/// extents at a time while their near side is still beyond the spawn margin.
/// Within a row, aliens start one extent in from the secondary origin and
/// step two extents at a time while the box still fits on screen. The result
/// may be empty if the alien is large relative to the screen.
pub fn fleet_layout(field: &Field, alien_size: Vec2) -> Vec<Rect> {
    let depth_step = field.orientation.primary().of(alien_size);
    let lateral_step = field.orientation.secondary().of(alien_size);
    let margin = SPAWN_MARGIN_EXTENTS * depth_step;
    let lateral_limit = field.lateral_extent() - lateral_step;

    let mut placements = Vec::new();
    let mut depth = field.depth_extent() - depth_step;
    while depth > margin {
        let mut lateral = lateral_step;
        while lateral <= lateral_limit {
            placements.push(field.place(alien_size, depth, lateral));
            lateral += 2.0 * lateral_step;
        }
        depth -= 2.0 * depth_step;
    }
    placements
}

/// Replace the fleet with a freshly laid out one
pub fn create_fleet(aliens: &mut Vec<Alien>, field: &Field, alien_size: Vec2) {
    aliens.clear();
    aliens.extend(
        fleet_layout(field, alien_size)
            .into_iter()
            .map(|rect| Alien { rect }),
    );
    log::debug!("Created fleet of {} aliens", aliens.len());
}

/// Whether any alien touches a secondary-axis boundary
pub fn fleet_at_edge(aliens: &[Alien], field: &Field) -> bool {
    aliens.iter().any(|alien| field.at_lateral_edge(&alien.rect))
}

/// Step every alien toward the player and flip the scroll direction
pub fn change_fleet_direction(
    aliens: &mut [Alien],
    field: &Field,
    direction: &mut f32,
    drop_distance: f32,
) {
    for alien in aliens.iter_mut() {
        field.advance(&mut alien.rect, drop_distance);
    }
    *direction = -*direction;
}

/// Advance the fleet one tick: reverse at an edge, then scroll
pub fn update_fleet(
    aliens: &mut [Alien],
    field: &Field,
    direction: &mut f32,
    speed: f32,
    drop_distance: f32,
) {
    if fleet_at_edge(aliens, field) {
        change_fleet_direction(aliens, field, direction, drop_distance);
    }
    let step = speed * *direction;
    for alien in aliens.iter_mut() {
        field.scroll(&mut alien.rect, step);
    }
}
