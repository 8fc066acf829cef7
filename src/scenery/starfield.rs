//! Slowly tumbling star backdrop

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::STARFIELD_SPIN;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    /// Euler rotation, radians
    pub rotation: Vec3,
}

impl Starfield {
    pub fn spin(&mut self) {
        self.rotation += Vec3::splat(STARFIELD_SPIN);
    }
}
