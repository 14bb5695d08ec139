//! Fixed-rate simulation tick
//!
//! Advances one Active tick: ship, bullets, bullet/alien resolution, fleet,
//! then ship/alien and near-edge checks. Level advance and life loss are
//! handled inline as the checks fire.

use super::collision::{
    alien_reached_near_edge, remove_offscreen_bullets, resolve_bullet_alien, ship_hit,
};
use super::fleet::{create_fleet, update_fleet};
use super::state::{Bullet, GameEvent, GamePhase, GameState};

/// Start a new game from level 1 with a fresh fleet
pub fn start_game(state: &mut GameState) {
    state.dynamic.initialize(&state.settings);
    state.stats.reset_stats();
    state.phase = GamePhase::Active;
    state.stall_ticks = 0;

    state.bullets.clear();
    create_fleet(&mut state.aliens, &state.field, state.settings.alien_size);
    state.ship.moving_positive = false;
    state.ship.moving_negative = false;
    state.ship.center(&state.field);

    state.push_event(GameEvent::GameStarted);
    log::info!(
        "Game started ({} aliens, high score {})",
        state.aliens.len(),
        state.stats.high_score
    );
}

/// Fire a bullet if the game is running and the bullet cap allows.
/// Returns true if a bullet was spawned.
pub fn fire_bullet(state: &mut GameState) -> bool {
    if !state.is_active() || state.is_stalled() {
        return false;
    }
    if state.bullets.len() >= state.settings.bullets_allowed {
        return false;
    }
    let bullet = Bullet::fired_from(&state.ship, state.settings.bullet_size(), &state.field);
    state.bullets.push(bullet);
    true
}

/// Advance the game state by one tick.
///
/// Events are queued on the state; callers driving the simulation directly
/// should drain them with [`GameState::drain_events`] after each tick.
pub fn tick(state: &mut GameState) {
    if !state.is_active() {
        return;
    }

    // Frozen after losing a ship
    if state.stall_ticks > 0 {
        state.stall_ticks -= 1;
        return;
    }

    state.time_ticks += 1;

    state.ship.update(&state.field, state.dynamic.ship_speed);
    update_bullets(state);
    update_aliens(state);
}

fn update_bullets(state: &mut GameState) {
    let speed = state.dynamic.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.update(&state.field, speed);
    }
    remove_offscreen_bullets(&mut state.bullets, &state.field);

    check_bullet_alien_collisions(state);
}

fn check_bullet_alien_collisions(state: &mut GameState) {
    let removed = resolve_bullet_alien(
        &mut state.bullets,
        &mut state.aliens,
        &mut state.bullet_hits,
    );

    if removed > 0 {
        let points = removed.saturating_mul(state.dynamic.alien_points);
        state.push_event(GameEvent::AliensDestroyed {
            count: removed,
            points,
        });
        if state.stats.add_score(points) {
            state.push_event(GameEvent::NewHighScore(state.stats.high_score));
        }
    }

    if state.aliens.is_empty() {
        start_new_level(state);
    }
}

fn start_new_level(state: &mut GameState) {
    let cleared = state.stats.level;

    state.bullets.clear();
    create_fleet(&mut state.aliens, &state.field, state.settings.alien_size);
    state.dynamic.increase_speed(&state.settings);
    state.stats.level += 1;

    state.push_event(GameEvent::LevelCleared { level: cleared });
    log::info!(
        "Level {} cleared, starting level {} (alien speed {:.2})",
        cleared,
        state.stats.level,
        state.dynamic.alien_speed
    );
}

fn update_aliens(state: &mut GameState) {
    update_fleet(
        &mut state.aliens,
        &state.field,
        &mut state.dynamic.fleet_direction,
        state.dynamic.alien_speed,
        state.dynamic.fleet_drop_speed,
    );

    if ship_hit(&state.ship.rect, &state.aliens) {
        handle_ship_hit(state);
        return;
    }

    if alien_reached_near_edge(&state.aliens, &state.field) {
        handle_ship_hit(state);
    }
}

/// Lose a ship: regroup and stall, or end the game on the last one
fn handle_ship_hit(state: &mut GameState) {
    if state.stats.ships_left > 1 {
        state.stats.ships_left -= 1;

        create_fleet(&mut state.aliens, &state.field, state.settings.alien_size);
        state.ship.center(&state.field);
        state.start_stall();

        state.push_event(GameEvent::ShipLost {
            ships_left: state.stats.ships_left,
        });
        log::info!("Ship lost, {} left", state.stats.ships_left);
    } else {
        state.phase = GamePhase::Inactive;
        state.push_event(GameEvent::GameOver {
            score: state.stats.score,
        });
        log::info!(
            "Game over at level {} with score {}",
            state.stats.level,
            state.stats.score
        );
    }
}
