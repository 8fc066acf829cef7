//! Pointer to ship pose mapping

use glam::Vec2;

use super::state::{GameState, ShipPose, ShipRotation};
use crate::consts::*;

/// Pointer position in normalized device coordinates, [-1, 1] per axis, y up
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert window pixel coordinates (origin top-left) to NDC
    pub fn from_screen(px: f32, py: f32, width: f32, height: f32) -> Self {
        Self {
            x: (px / width) * 2.0 - 1.0,
            y: -((py / height) * 2.0 - 1.0),
        }
    }
}

/// Ship pose for a pointer position
pub fn map_pointer(pointer: Pointer) -> ShipPose {
    let (mx, my) = (pointer.x, pointer.y);
    ShipPose {
        position: Vec2::new(mx * SHIP_X_GAIN, my * SHIP_Y_GAIN),
        rotation: ShipRotation {
            z: -mx * SHIP_ROLL_GAIN,
            x: -mx * SHIP_ROLL_GAIN,
            y: -my * SHIP_PITCH_GAIN,
        },
    }
}

/// Overwrite the ship pose from the pointer
pub fn apply_pointer(state: &mut GameState, pointer: Pointer) {
    state.ship = map_pointer(pointer);
}
