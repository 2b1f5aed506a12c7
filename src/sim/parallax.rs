//! Scrolling star field behind the play area
//!
//! Purely cosmetic: stars never collide and survive game over and restart.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// A background marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    /// Depth layer (0 = far, slowest and dimmest)
    pub layer: u8,
}

impl Star {
    /// Fall speed for a depth layer
    pub fn layer_speed(layer: u8) -> f32 {
        let tier = STAR_LAYER_SPEED
            .get(layer as usize)
            .copied()
            .unwrap_or(STAR_LAYER_SPEED[STAR_LAYER_SPEED.len() - 1]);
        STAR_BASE_SPEED * tier
    }

    /// Render size for a depth layer
    pub fn layer_size(layer: u8) -> f32 {
        match layer {
            0 => 0.005,
            1 => 0.008,
            _ => 0.012,
        }
    }

    /// Render brightness for a depth layer
    pub fn layer_brightness(layer: u8) -> f32 {
        match layer {
            0 => 0.3,
            1 => 0.6,
            _ => 1.0,
        }
    }
}

/// The full set of background stars
#[derive(Debug, Clone)]
pub struct ParallaxField {
    pub stars: Vec<Star>,
}

impl ParallaxField {
    /// Scatter `count` stars uniformly over the screen in random layers
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                let layer = rng.random_range(0..STAR_LAYERS);
                Star {
                    pos: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
                    speed: Star::layer_speed(layer),
                    layer,
                }
            })
            .collect();
        Self { stars }
    }

    /// Scroll every star down, wrapping to the top with a fresh column
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        for star in &mut self.stars {
            star.pos.y -= star.speed * dt;
            if star.pos.y < STAR_WRAP_BOTTOM {
                star.pos.y = STAR_WRAP_TOP;
                star.pos.x = rng.random_range(-FIELD_HALF_WIDTH..FIELD_HALF_WIDTH);
            }
        }
    }
}
