//! Space Fugitive - A falling-asteroid arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entity pools, physics, collisions, game state)
//! - `color`: HSV hue cycling for asteroid tints
//! - `highscores`: Persistent top-100 leaderboard
//! - `session`: PLAYING / GAME_OVER state machine around the simulation
//! - `platform`: Input sampling contract
//! - `render`: Draw-instance contract for an external graphics backend
//! - `settings`: JSON-backed runtime settings

pub mod color;
pub mod highscores;
pub mod platform;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

pub use color::{Color3, hsv_to_rgb};
pub use highscores::Leaderboard;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
///
/// The play field is the normalized device square: x and y both span [-1, 1].
pub mod consts {
    /// Largest frame step the session will simulate in one go
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Pool capacities
    pub const MAX_ASTEROIDS: usize = 50;
    pub const MAX_PROJECTILES: usize = 100;
    pub const MAX_STARS: usize = 300;
    pub const STAR_LAYERS: u8 = 3;

    /// Visible bounds (entities spawn/despawn just outside them)
    pub const FIELD_HALF_WIDTH: f32 = 1.0;
    pub const PROJECTILE_DESPAWN_Y: f32 = 1.1;
    pub const ASTEROID_SPAWN_Y: f32 = 1.1;
    pub const ASTEROID_DESPAWN_Y: f32 = -1.2;
    pub const STAR_WRAP_BOTTOM: f32 = -1.1;
    pub const STAR_WRAP_TOP: f32 = 1.1;

    /// Player defaults
    pub const PLAYER_START_Y: f32 = -0.8;
    pub const PLAYER_SIZE: f32 = 0.12;
    pub const PLAYER_SPEED: f32 = 1.5;
    pub const PLAYER_COLOR: [f32; 3] = [0.2, 0.8, 1.0];
    pub const PLAYER_GAME_OVER_COLOR: [f32; 3] = [1.0, 0.2, 0.2];
    /// Player hitbox radius is `size.x / PLAYER_HITBOX_DIVISOR` (a bit under half)
    pub const PLAYER_HITBOX_DIVISOR: f32 = 2.5;

    /// Projectile defaults
    pub const PROJECTILE_SIZE: [f32; 2] = [0.02, 0.05];
    pub const PROJECTILE_SPEED: f32 = 4.0;
    pub const PROJECTILE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
    pub const SHOOT_COOLDOWN: f32 = 0.25;

    /// Asteroid spawn ranges
    pub const ASTEROID_MIN_SIZE: f32 = 0.08;
    pub const ASTEROID_MAX_SIZE: f32 = 0.12;
    pub const ASTEROID_MIN_SPEED: f32 = 0.2;
    pub const ASTEROID_MAX_SPEED: f32 = 0.3;
    /// Extra fall speed per point of score
    pub const ASTEROID_SPEED_PER_SCORE: f32 = 0.001;
    pub const ASTEROID_SPIN: f32 = 1.0;
    pub const ASTEROID_MIN_HUE_SPEED: f32 = 0.2;
    pub const ASTEROID_MAX_HUE_SPEED: f32 = 0.5;
    pub const ASTEROID_SATURATION: f32 = 0.9;
    pub const ASTEROID_VALUE: f32 = 0.95;

    /// Spawn pacing: interval = max(floor, base - score * rate)
    pub const SPAWN_INTERVAL_BASE: f32 = 1.0;
    pub const SPAWN_INTERVAL_RATE: f32 = 0.002;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.2;

    /// Scoring and losing
    pub const POINTS_PER_ASTEROID: u32 = 10;
    pub const MISSED_ASTEROID_LIMIT: u32 = 10;

    /// Parallax
    pub const STAR_BASE_SPEED: f32 = 0.15;
    pub const STAR_LAYER_SPEED: [f32; 3] = [0.6, 1.0, 1.5];

    /// Game-over overlay animation runs at this multiple of wall time
    pub const GAME_OVER_ANIM_RATE: f32 = 1.5;

    /// Leaderboard
    pub const LEADERBOARD_CAPACITY: usize = 100;
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Spawn interval for the current score, clamped at the floor
#[inline]
pub fn spawn_interval(score: u32) -> f32 {
    use consts::*;
    (SPAWN_INTERVAL_BASE - score as f32 * SPAWN_INTERVAL_RATE).max(SPAWN_INTERVAL_FLOOR)
}
