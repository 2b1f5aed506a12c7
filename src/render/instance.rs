//! Instance types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::color::Color3;

/// Per-instance transform and tint for a unit shape
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    pub translate: [f32; 2],
    pub scale: [f32; 2],
    /// Radians, counter-clockwise
    pub rotation: f32,
    pub color: [f32; 3],
}

impl InstanceData {
    pub fn new(translate: Vec2, scale: Vec2, rotation: f32, color: Color3) -> Self {
        Self {
            translate: translate.to_array(),
            scale: scale.to_array(),
            rotation,
            color: color.to_array(),
        }
    }

    /// Axis-aligned rectangle centred on `center`
    pub fn rect(center: Vec2, size: Vec2, color: Color3) -> Self {
        Self::new(center, size, 0.0, color)
    }
}

/// Which unit mesh an instance is stamped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Unit square centred on the origin (two triangles)
    Quad,
    /// Upward-pointing unit triangle (the ship)
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub topology: Topology,
    pub instance: InstanceData,
}

/// Everything to draw this frame, back to front
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, topology: Topology, instance: InstanceData) {
        self.commands.push(DrawCommand { topology, instance });
    }

    pub fn quad(&mut self, instance: InstanceData) {
        self.push(Topology::Quad, instance);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Instances using one mesh, in draw order
    pub fn instances(&self, topology: Topology) -> Vec<InstanceData> {
        self.commands
            .iter()
            .filter(|c| c.topology == topology)
            .map(|c| c.instance)
            .collect()
    }

    /// Instances for one mesh as raw bytes, ready for a vertex buffer
    pub fn instance_bytes(&self, topology: Topology) -> Vec<u8> {
        bytemuck::cast_slice(&self.instances(topology)).to_vec()
    }
}

/// Colors for overlay elements
pub mod colors {
    use crate::color::Color3;

    pub const GAME_OVER_TEXT: Color3 = Color3::new(1.0, 0.1, 0.1);
    pub const FINAL_SCORE: Color3 = Color3::new(1.0, 1.0, 0.5);
    pub const GOLD: Color3 = Color3::new(1.0, 0.84, 0.0);
    pub const SILVER: Color3 = Color3::new(0.75, 0.75, 0.75);
    pub const BRONZE: Color3 = Color3::new(0.8, 0.5, 0.2);
    pub const RUNNER_UP: Color3 = Color3::new(0.5, 0.5, 0.5);

    /// Leaderboard row tint by 0-based rank
    pub fn rank_color(rank: usize) -> Color3 {
        match rank {
            0 => GOLD,
            1 => SILVER,
            2 => BRONZE,
            _ => RUNNER_UP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 8 * 4);
    }

    #[test]
    fn test_instance_bytes_per_topology() {
        let mut scene = Scene::new();
        scene.quad(InstanceData::rect(Vec2::ZERO, Vec2::ONE, Color3::WHITE));
        scene.push(
            Topology::Triangle,
            InstanceData::new(Vec2::new(0.5, -0.5), Vec2::splat(0.1), 0.0, Color3::gray(0.5)),
        );
        scene.quad(InstanceData::rect(Vec2::X, Vec2::ONE, Color3::WHITE));

        assert_eq!(scene.instances(Topology::Quad).len(), 2);
        assert_eq!(scene.instance_bytes(Topology::Quad).len(), 2 * 32);

        let bytes = scene.instance_bytes(Topology::Triangle);
        let back: &[InstanceData] = bytemuck::cast_slice(&bytes);
        assert_eq!(back[0].translate, [0.5, -0.5]);
    }

    #[test]
    fn test_rank_colors() {
        assert_eq!(colors::rank_color(0), colors::GOLD);
        assert_eq!(colors::rank_color(2), colors::BRONZE);
        assert_eq!(colors::rank_color(3), colors::RUNNER_UP);
        assert_eq!(colors::rank_color(50), colors::RUNNER_UP);
    }
}
