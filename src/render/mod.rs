//! Render contract
//!
//! Turns simulation state into flat per-instance draw data. The GPU side
//! (shaders, buffers, window) lives outside this crate; a backend uploads
//! [`Scene::instance_bytes`] and draws one unit quad or unit triangle per
//! instance.

pub mod glyphs;
pub mod instance;
pub mod scene;

pub use glyphs::{digit_cells, draw_digit, draw_score};
pub use instance::{DrawCommand, InstanceData, Scene, Topology};
pub use scene::build_scene;
