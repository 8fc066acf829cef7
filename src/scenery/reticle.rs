//! Aiming reticles
//!
//! Two sprites at different depths follow the pointer in the opposite
//! direction, so lining them up shows where lasers will travel.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Pointer;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reticle {
    pub rear: Vec3,
    pub front: Vec3,
}

impl Default for Reticle {
    fn default() -> Self {
        Self {
            rear: Vec3::new(0.0, 0.0, RETICLE_REAR_DEPTH),
            front: Vec3::new(0.0, 0.0, RETICLE_FRONT_DEPTH),
        }
    }
}

impl Reticle {
    pub fn follow(&mut self, pointer: Pointer) {
        self.rear = Vec3::new(
            -pointer.x * RETICLE_REAR_X_GAIN,
            -pointer.y * RETICLE_REAR_Y_GAIN,
            RETICLE_REAR_DEPTH,
        );
        self.front = Vec3::new(
            -pointer.x * RETICLE_FRONT_X_GAIN,
            -pointer.y * RETICLE_FRONT_Y_GAIN,
            RETICLE_FRONT_DEPTH,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_mirrors_pointer() {
        let mut reticle = Reticle::default();
        reticle.follow(Pointer::new(0.5, -1.0));
        assert_eq!(reticle.rear, Vec3::new(-15.0, 10.0, -8.0));
        assert_eq!(reticle.front, Vec3::new(-30.0, 20.0, -16.0));
    }

    #[test]
    fn test_full_deflection_reaches_gains() {
        let mut reticle = Reticle::default();
        reticle.follow(Pointer::new(-1.0, -1.0));
        assert_eq!(reticle.rear.x, RETICLE_REAR_X_GAIN);
        assert_eq!(reticle.rear.y, RETICLE_REAR_Y_GAIN);
        assert_eq!(reticle.front.x, RETICLE_FRONT_X_GAIN);
        assert_eq!(reticle.front.y, RETICLE_FRONT_Y_GAIN);
    }

    #[test]
    fn test_depths_are_fixed() {
        let mut reticle = Reticle::default();
        reticle.follow(Pointer::new(1.0, 1.0));
        reticle.follow(Pointer::new(-1.0, 0.0));
        assert_eq!(reticle.rear.z, -8.0);
        assert_eq!(reticle.front.z, -16.0);
    }
}
