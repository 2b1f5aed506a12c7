//! Circle-circle overlap tests
//!
//! Every entity collides as a circle with a characteristic radius derived from
//! its size; see [`Asteroid::radius`](super::state::Asteroid::radius) and friends.

use glam::Vec2;

/// True when two circles overlap (touching exactly at `ra + rb` does not count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}
