//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Caller-supplied frame step
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)

pub mod collision;
pub mod parallax;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use parallax::{ParallaxField, Star};
pub use pool::{Pool, Slot};
pub use state::{Asteroid, Entity, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
