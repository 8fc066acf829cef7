//! Star Skirmish - A pointer-steered 3D arcade shooter
//!
//! Core modules:
//! - `sim`: Per-frame simulation (ship pose, lasers, enemies, score)
//! - `scenery`: Cosmetic per-frame state (terrain scroll, starfield, reticles)
//! - `frame`: Ordered per-frame driver tying the stages together
//! - `renderer`: Render adapter that enumerates entities as instances
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Aim-and-fire bot used by the demo binary

pub mod autopilot;
pub mod frame;
pub mod renderer;
pub mod scenery;
pub mod sim;
pub mod tuning;

pub use frame::{FrameInput, FrameReport, World};
pub use tuning::{Tuning, TuningError};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Lasers are retired once they travel this far down -z
    pub const LASER_RANGE: f32 = 100.0;
    /// Distance a laser travels along -z per tick
    pub const LASER_Z_VELOCITY: f32 = 1.0;
    /// Distance an enemy drifts toward the camera (+z) per tick
    pub const ENEMY_SPEED: f32 = 0.1;
    /// Lasers at or below this height hit the ground
    pub const GROUND_HEIGHT: f32 = -50.0;
    /// A laser closer than this to an enemy counts as a hit
    pub const HIT_RADIUS: f32 = 3.0;

    /// Laser velocity gains applied to the ship rotation at fire time
    pub const LASER_VX_GAIN: f32 = 6.0;
    pub const LASER_VY_GAIN: f32 = 5.0;

    /// Ship pose gains applied to pointer NDC
    pub const SHIP_X_GAIN: f32 = 6.0;
    pub const SHIP_Y_GAIN: f32 = 2.0;
    pub const SHIP_ROLL_GAIN: f32 = 0.5;
    pub const SHIP_PITCH_GAIN: f32 = 0.2;

    /// Terrain scroll per frame and the offset at which it wraps
    pub const TERRAIN_SPEED: f32 = 0.9;
    pub const TERRAIN_WRAP: f32 = 210.0;

    /// Starfield spin per frame, all three axes
    pub const STARFIELD_SPIN: f32 = 0.0005;

    /// Reticle offsets per unit of pointer NDC, mirrored against the pointer
    pub const RETICLE_REAR_X_GAIN: f32 = 30.0;
    pub const RETICLE_REAR_Y_GAIN: f32 = 10.0;
    pub const RETICLE_FRONT_X_GAIN: f32 = 60.0;
    pub const RETICLE_FRONT_Y_GAIN: f32 = 20.0;
    /// Reticle sprite depths
    pub const RETICLE_REAR_DEPTH: f32 = -8.0;
    pub const RETICLE_FRONT_DEPTH: f32 = -16.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_axis_aligned() {
        assert_eq!(distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(distance(Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO), 2.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Vec3::new(-10.0, 10.0, -80.0);
        let b = Vec3::new(1.5, -2.0, -7.25);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_nan_propagates() {
        assert!(distance(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO).is_nan());
    }
}
