//! Instance records for drawing one primitive per entity

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::sim::ShipPose;

/// Which primitive an instance draws
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Ship = 0,
    Laser = 1,
    Enemy = 2,
    Terrain = 3,
    Reticle = 4,
    Starfield = 5,
}

impl PrimitiveKind {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ship),
            1 => Some(Self::Laser),
            2 => Some(Self::Enemy),
            3 => Some(Self::Terrain),
            4 => Some(Self::Reticle),
            5 => Some(Self::Starfield),
            _ => None,
        }
    }

    /// Uniform scale of the unit primitive
    pub fn default_scale(&self) -> f32 {
        match self {
            PrimitiveKind::Ship => 1.0,
            PrimitiveKind::Laser => 1.0,  // unit box
            PrimitiveKind::Enemy => 2.0,  // sphere radius
            PrimitiveKind::Terrain => 5000.0,
            PrimitiveKind::Reticle => 1.0,
            PrimitiveKind::Starfield => 1.0,
        }
    }
}

/// Per-instance data, laid out for direct upload to an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub scale: f32,
    /// Euler rotation, radians
    pub rotation: [f32; 3],
    pub kind: u32,
}

impl Instance {
    pub fn new(kind: PrimitiveKind, position: Vec3, rotation: Vec3) -> Self {
        Self {
            position: position.to_array(),
            scale: kind.default_scale(),
            rotation: rotation.to_array(),
            kind: kind as u32,
        }
    }

    pub fn kind(&self) -> Option<PrimitiveKind> {
        PrimitiveKind::from_raw(self.kind)
    }
}

/// Ship mesh transform. The model is authored facing a different axis, so
/// the pose's rotation components land on swapped mesh axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl ShipTransform {
    pub fn from_pose(pose: &ShipPose) -> Self {
        Self {
            position: Vec3::new(pose.position.x, pose.position.y, 0.0),
            rotation: Vec3::new(pose.rotation.y, pose.rotation.x, pose.rotation.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Pointer, map_pointer};

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Instance>(), 32);
        let inst = Instance::new(PrimitiveKind::Laser, Vec3::ONE, Vec3::ZERO);
        let bytes = bytemuck::bytes_of(&inst);
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn test_kind_round_trips_through_raw() {
        let inst = Instance::new(PrimitiveKind::Enemy, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(inst.kind(), Some(PrimitiveKind::Enemy));
        assert_eq!(inst.scale, 2.0);
        assert_eq!(PrimitiveKind::from_raw(99), None);
    }

    #[test]
    fn test_ship_axes_are_swapped() {
        let pose = map_pointer(Pointer::new(0.5, 1.0));
        let t = ShipTransform::from_pose(&pose);
        assert_eq!(t.position, Vec3::new(3.0, 2.0, 0.0));
        // mesh x <- pose y, mesh y <- pose x, mesh z <- pose z
        assert_eq!(t.rotation, Vec3::new(-0.2, -0.25, -0.25));
    }
}
