//! Scrolling ground plane
//!
//! The ship never moves forward; the ground slides toward the camera instead
//! and snaps back once it has travelled a full wrap distance.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Scroll offset along +z
    pub z: f32,
}

impl Terrain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. The wrap check runs before the add, so the offset
    /// may sit at or past the wrap distance for a single frame.
    pub fn scroll(&mut self, tuning: &Tuning) {
        if self.z >= tuning.terrain_wrap {
            self.z = 0.0;
        }
        self.z += tuning.terrain_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_from_rest() {
        let tuning = Tuning::default();
        let mut terrain = Terrain::new();
        terrain.scroll(&tuning);
        assert!((terrain.z - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_happens_on_following_frame() {
        let tuning = Tuning::default();
        let mut terrain = Terrain { z: 209.5 };

        terrain.scroll(&tuning);
        assert!((terrain.z - 210.4).abs() < 1e-3);

        terrain.scroll(&tuning);
        assert!((terrain.z - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_exact_wrap_value_resets() {
        let tuning = Tuning::default();
        let mut terrain = Terrain { z: 210.0 };
        terrain.scroll(&tuning);
        assert!((terrain.z - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_offset_stays_bounded() {
        let tuning = Tuning::default();
        let mut terrain = Terrain::new();
        for _ in 0..10_000 {
            terrain.scroll(&tuning);
            assert!(terrain.z > 0.0);
            assert!(terrain.z < tuning.terrain_wrap + tuning.terrain_speed);
        }
    }
}
