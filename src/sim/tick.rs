//! Per-frame simulation step
//!
//! Step order is fixed: stars, (stop if over), player, projectiles, spawning,
//! asteroids, shot hits, ship hits, missed rule, phase transition. Collisions
//! always see this tick's positions.

use glam::Vec2;

use super::collision::circles_overlap;
use super::state::{GameEvent, GamePhase, GameState};
use crate::color::Color3;
use crate::consts::*;
use crate::spawn_interval;

/// Held controls for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Fire held (auto-fires at the cooldown rate)
    pub shoot: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Stars keep scrolling behind the game-over overlay
    state.update_parallax(dt);

    if state.phase == GamePhase::GameOver {
        return;
    }

    apply_player_input(state, input, dt);
    update_projectiles(state, dt);
    update_spawning(state, dt);
    update_asteroids(state, dt);
    resolve_shots(state);

    let ship_hit = player_hit(state);
    let too_many_missed =
        state.missed_rule_enabled && state.missed >= MISSED_ASTEROID_LIMIT;

    if (ship_hit || too_many_missed) && state.phase == GamePhase::Playing {
        state.phase = GamePhase::GameOver;
        state.player.color = Color3::from_array(PLAYER_GAME_OVER_COLOR);
        log::info!(
            "Game over: score {} ({})",
            state.score,
            if ship_hit { "ship destroyed" } else { "too many missed" }
        );
        let score = state.score;
        state.push_event(GameEvent::GameOver { score });
    }
}

/// Move the ship and fire if the gun is ready
fn apply_player_input(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.player.vel.x * dt;
    if input.move_left {
        state.player.pos.x -= step;
    }
    if input.move_right {
        state.player.pos.x += step;
    }
    state.player.pos.x = state.player.pos.x.clamp(-FIELD_HALF_WIDTH, FIELD_HALF_WIDTH);

    state.shoot_cooldown -= dt;
    if input.shoot && state.shoot_cooldown <= 0.0 {
        let origin = state.player.pos;
        if !state.spawn_projectile(origin) {
            log::trace!("Projectile pool exhausted, shot dropped");
        }
        state.shoot_cooldown = SHOOT_COOLDOWN;
    }
}

fn update_projectiles(state: &mut GameState, dt: f32) {
    for shot in state.projectiles.iter_active_mut() {
        shot.pos.y += shot.vel.y * dt;
        if shot.pos.y > PROJECTILE_DESPAWN_Y {
            shot.active = false;
        }
    }
}

/// Accumulate the spawn timer and drop an asteroid when it runs out
fn update_spawning(state: &mut GameState, dt: f32) {
    let interval = spawn_interval(state.score);
    state.spawn_timer += dt;
    if state.spawn_timer > interval {
        let score = state.score;
        if !state.spawn_asteroid(score) {
            log::trace!("Asteroid pool exhausted, spawn skipped");
        }
        state.spawn_timer = 0.0;
    }
}

/// Fall, spin, shimmer; count the ones that slip past the bottom
fn update_asteroids(state: &mut GameState, dt: f32) {
    let mut missed_slots = Vec::new();
    for (slot, asteroid) in state.asteroids.slots_mut().iter_mut().enumerate() {
        if !asteroid.body.active {
            continue;
        }
        asteroid.body.pos.y += asteroid.body.vel.y * dt;
        asteroid.body.rotation += ASTEROID_SPIN * dt;
        asteroid.cycle_hue(dt);

        if asteroid.body.pos.y < ASTEROID_DESPAWN_Y {
            asteroid.body.active = false;
            missed_slots.push(slot);
        }
    }

    for slot in missed_slots {
        state.missed += 1;
        state.push_event(GameEvent::AsteroidMissed { slot });
    }
}

/// Each live projectile destroys at most the first asteroid it overlaps
fn resolve_shots(state: &mut GameState) {
    let mut destroyed = Vec::new();
    for shot in state.projectiles.slots_mut().iter_mut() {
        if !shot.active {
            continue;
        }
        let r1 = shot.projectile_radius();
        for (slot, asteroid) in state.asteroids.slots_mut().iter_mut().enumerate() {
            if !asteroid.body.active {
                continue;
            }
            if circles_overlap(shot.pos, r1, asteroid.body.pos, asteroid.radius()) {
                shot.active = false;
                asteroid.body.active = false;
                destroyed.push(slot);
                break;
            }
        }
    }

    for slot in destroyed {
        state.score += POINTS_PER_ASTEROID;
        state.push_event(GameEvent::AsteroidDestroyed { slot });
    }
}

/// True when any live asteroid touches the ship
fn player_hit(state: &GameState) -> bool {
    let ship: Vec2 = state.player.pos;
    let r1 = state.player.player_radius();
    state
        .asteroids
        .iter_active()
        .any(|a| circles_overlap(ship, r1, a.body.pos, a.radius()))
}
