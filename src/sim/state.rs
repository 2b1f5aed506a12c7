//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]. The parallax field and
//! RNG stream outlive a restart; everything else is reset.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::parallax::ParallaxField;
use super::pool::{Pool, Slot};
use crate::color::{Color3, hsv_to_rgb, wrap_hue};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; waiting for restart
    GameOver,
}

/// Things that happened during a tick, drained by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile destroyed the asteroid in this slot
    AsteroidDestroyed { slot: usize },
    /// The asteroid in this slot fell past the bottom edge
    AsteroidMissed { slot: usize },
    /// The run just ended with this score (emitted once per run)
    GameOver { score: u32 },
}

/// A positioned, sized, colored thing on the play field
///
/// Player, asteroids and projectiles share this shape. An inactive entity is
/// a free pool slot and its other fields are stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub color: Color3,
    pub rotation: f32,
    pub active: bool,
}

impl Entity {
    /// A free slot
    pub fn inactive(size: Vec2, color: Color3) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            vel: Vec2::ZERO,
            color,
            rotation: 0.0,
            active: false,
        }
    }

    /// The player's ship at its starting spot
    pub fn player() -> Self {
        Self {
            pos: Vec2::new(0.0, PLAYER_START_Y),
            size: Vec2::splat(PLAYER_SIZE),
            vel: Vec2::new(PLAYER_SPEED, 0.0),
            color: Color3::from_array(PLAYER_COLOR),
            rotation: 0.0,
            active: true,
        }
    }

    /// A projectile slot (inactive)
    pub fn projectile() -> Self {
        Self::inactive(
            Vec2::from_array(PROJECTILE_SIZE),
            Color3::from_array(PROJECTILE_COLOR),
        )
    }

    /// Hit radius when treated as a projectile (half its length)
    #[inline]
    pub fn projectile_radius(&self) -> f32 {
        self.size.y / 2.0
    }

    /// Hit radius when treated as the player's ship
    #[inline]
    pub fn player_radius(&self) -> f32 {
        self.size.x / PLAYER_HITBOX_DIVISOR
    }
}

impl Slot for Entity {
    fn is_active(&self) -> bool {
        self.active
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A falling asteroid with its own drifting hue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub body: Entity,
    /// Current hue in [0, 1)
    pub hue: f32,
    /// Hue cycles per second
    pub hue_speed: f32,
}

impl Asteroid {
    /// An asteroid slot (inactive)
    pub fn empty() -> Self {
        Self {
            body: Entity::inactive(Vec2::splat(ASTEROID_MIN_SIZE), Color3::WHITE),
            hue: 0.0,
            hue_speed: ASTEROID_MIN_HUE_SPEED,
        }
    }

    /// Hit radius (half the width)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.size.x / 2.0
    }

    /// Advance the hue (wrapping) and refresh the tint from it
    pub fn cycle_hue(&mut self, dt: f32) {
        self.hue = wrap_hue(self.hue + self.hue_speed * dt);
        self.body.color = hsv_to_rgb(self.hue, ASTEROID_SATURATION, ASTEROID_VALUE);
    }
}

impl Slot for Asteroid {
    fn is_active(&self) -> bool {
        self.body.active
    }

    fn deactivate(&mut self) {
        self.body.active = false;
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Score
    pub score: u32,
    /// Asteroids that fell through this run
    pub missed: u32,
    /// Seconds since the last spawn attempt
    pub spawn_timer: f32,
    /// Seconds until the next shot is allowed (may go negative)
    pub shoot_cooldown: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Scaled seconds spent in the game-over overlay animation
    pub game_over_anim_elapsed: f32,
    /// Whether missing too many asteroids ends the run
    pub missed_rule_enabled: bool,
    /// Player ship
    pub player: Entity,
    pub asteroids: Pool<Asteroid>,
    pub projectiles: Pool<Entity>,
    /// Background stars (never reset)
    pub parallax: ParallaxField,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let parallax = ParallaxField::new(MAX_STARS, &mut rng);
        Self {
            seed,
            rng,
            score: 0,
            missed: 0,
            spawn_timer: 0.0,
            shoot_cooldown: 0.0,
            phase: GamePhase::Playing,
            game_over_anim_elapsed: 0.0,
            missed_rule_enabled: true,
            player: Entity::player(),
            asteroids: Pool::new(MAX_ASTEROIDS, Asteroid::empty),
            projectiles: Pool::new(MAX_PROJECTILES, Entity::projectile),
            parallax,
            events: Vec::new(),
        }
    }

    /// Start a fresh run in place
    ///
    /// Score, counters, timers, the player and both pools go back to their
    /// initial values. Stars, the RNG stream and the missed-rule toggle carry
    /// over.
    pub fn restart(&mut self) {
        self.score = 0;
        self.missed = 0;
        self.spawn_timer = 0.0;
        self.shoot_cooldown = 0.0;
        self.phase = GamePhase::Playing;
        self.game_over_anim_elapsed = 0.0;
        self.player = Entity::player();
        self.asteroids.clear();
        self.projectiles.clear();
        self.events.clear();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Fire a projectile from `origin`; false when every slot is in flight
    pub fn spawn_projectile(&mut self, origin: Vec2) -> bool {
        let Some(slot) = self.projectiles.first_free() else {
            return false;
        };
        *slot = Entity {
            pos: origin,
            size: Vec2::from_array(PROJECTILE_SIZE),
            vel: Vec2::new(0.0, PROJECTILE_SPEED),
            color: Color3::from_array(PROJECTILE_COLOR),
            rotation: 0.0,
            active: true,
        };
        true
    }

    /// Drop a new asteroid from the top edge; false when the pool is full
    ///
    /// Fall speed grows with `score`, which is the continuous difficulty ramp.
    pub fn spawn_asteroid(&mut self, score: u32) -> bool {
        let Some(slot) = self.asteroids.first_free_index() else {
            return false;
        };

        let rng = &mut self.rng;
        let size = rng.random_range(ASTEROID_MIN_SIZE..=ASTEROID_MAX_SIZE);
        let x = rng.random_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH);
        let fall = rng.random_range(ASTEROID_MIN_SPEED..ASTEROID_MAX_SPEED)
            + score as f32 * ASTEROID_SPEED_PER_SCORE;
        let hue = rng.random_range(0.0..1.0);
        let hue_speed = rng.random_range(ASTEROID_MIN_HUE_SPEED..ASTEROID_MAX_HUE_SPEED);

        let asteroid = Asteroid {
            body: Entity {
                pos: Vec2::new(x, ASTEROID_SPAWN_Y),
                size: Vec2::splat(size),
                vel: Vec2::new(0.0, -fall),
                color: hsv_to_rgb(hue, ASTEROID_SATURATION, ASTEROID_VALUE),
                rotation: 0.0,
                active: true,
            },
            hue,
            hue_speed,
        };
        log::debug!("Asteroid spawned in slot {slot}: size={size:.3} x={x:.2} fall={fall:.3}");

        if let Some(s) = self.asteroids.get_mut(slot) {
            *s = asteroid;
        }
        true
    }

    /// Advance the game-over overlay animation clock
    pub fn advance_game_over_anim(&mut self, dt: f32) {
        if self.is_game_over() {
            self.game_over_anim_elapsed += dt * GAME_OVER_ANIM_RATE;
        }
    }

    /// Overlay animation progress in [0, 1]
    pub fn game_over_progress(&self) -> f32 {
        self.game_over_anim_elapsed.clamp(0.0, 1.0)
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Scroll the background stars (runs in every phase)
    pub fn update_parallax(&mut self, dt: f32) {
        self.parallax.update(dt, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_run() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.missed, 0);
        assert!(state.missed_rule_enabled);
        assert_eq!(state.asteroids.active_count(), 0);
        assert_eq!(state.projectiles.active_count(), 0);
        assert_eq!(state.asteroids.capacity(), MAX_ASTEROIDS);
        assert_eq!(state.projectiles.capacity(), MAX_PROJECTILES);
        assert_eq!(state.parallax.stars.len(), MAX_STARS);
        assert_eq!(state.player.pos, Vec2::new(0.0, PLAYER_START_Y));
    }

    #[test]
    fn test_spawn_projectile() {
        let mut state = GameState::new(1);
        let origin = Vec2::new(0.3, -0.8);
        assert!(state.spawn_projectile(origin));

        let shot = state.projectiles.get(0).unwrap();
        assert!(shot.active);
        assert_eq!(shot.pos, origin);
        assert_eq!(shot.vel, Vec2::new(0.0, PROJECTILE_SPEED));
        assert_eq!(shot.rotation, 0.0);
        assert!((shot.projectile_radius() - 0.025).abs() < 1e-6);
    }

    #[test]
    fn test_projectile_pool_exhaustion_drops_shot() {
        let mut state = GameState::new(1);
        for _ in 0..MAX_PROJECTILES {
            assert!(state.spawn_projectile(Vec2::ZERO));
        }
        assert!(!state.spawn_projectile(Vec2::ZERO));
        assert_eq!(state.projectiles.active_count(), MAX_PROJECTILES);
    }

    #[test]
    fn test_spawn_asteroid_ranges() {
        let mut state = GameState::new(99);
        for _ in 0..MAX_ASTEROIDS {
            assert!(state.spawn_asteroid(0));
        }
        assert!(!state.spawn_asteroid(0));

        for a in state.asteroids.iter_active() {
            assert!(a.body.size.x >= ASTEROID_MIN_SIZE && a.body.size.x <= ASTEROID_MAX_SIZE);
            assert_eq!(a.body.size.x, a.body.size.y);
            assert!(a.body.pos.x >= -1.0 && a.body.pos.x < 1.0);
            assert_eq!(a.body.pos.y, ASTEROID_SPAWN_Y);
            let fall = -a.body.vel.y;
            assert!(fall >= ASTEROID_MIN_SPEED && fall < ASTEROID_MAX_SPEED);
            assert!((0.0..1.0).contains(&a.hue));
            assert!(a.hue_speed >= ASTEROID_MIN_HUE_SPEED && a.hue_speed < ASTEROID_MAX_HUE_SPEED);
        }
    }

    #[test]
    fn test_asteroid_speed_scales_with_score() {
        let mut state = GameState::new(5);
        assert!(state.spawn_asteroid(1000));
        let a = state.asteroids.get(0).unwrap();
        // Base range plus 1000 * 0.001
        let fall = -a.body.vel.y;
        assert!(fall >= ASTEROID_MIN_SPEED + 1.0 - 1e-4);
        assert!(fall < ASTEROID_MAX_SPEED + 1.0 + 1e-4);
    }

    #[test]
    fn test_hue_cycle_wraps() {
        let mut a = Asteroid::empty();
        a.hue = 0.95;
        a.hue_speed = 0.5;
        a.cycle_hue(0.2);
        assert!((a.hue - 0.05).abs() < 1e-5);
        assert_eq!(a.body.color, hsv_to_rgb(a.hue, ASTEROID_SATURATION, ASTEROID_VALUE));
    }

    #[test]
    fn test_game_over_anim_only_runs_when_over() {
        let mut state = GameState::new(3);
        state.advance_game_over_anim(1.0);
        assert_eq!(state.game_over_anim_elapsed, 0.0);

        state.phase = GamePhase::GameOver;
        state.advance_game_over_anim(0.5);
        assert!((state.game_over_anim_elapsed - 0.75).abs() < 1e-6);
        state.advance_game_over_anim(0.5);
        assert_eq!(state.game_over_progress(), 1.0);
    }

    #[test]
    fn test_restart_keeps_stars_and_rule() {
        let mut state = GameState::new(8);
        state.score = 120;
        state.missed = 4;
        state.missed_rule_enabled = false;
        state.phase = GamePhase::GameOver;
        state.spawn_asteroid(0);
        state.spawn_projectile(Vec2::ZERO);
        let stars = state.parallax.stars.clone();

        state.restart();
        assert_eq!(state.score, 0);
        assert_eq!(state.missed, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.asteroids.active_count(), 0);
        assert_eq!(state.projectiles.active_count(), 0);
        assert!(!state.missed_rule_enabled);
        assert_eq!(state.parallax.stars, stars);
    }
}
