//! Data-driven game balance
//!
//! Defaults mirror `crate::consts`. A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Lasers ===
    /// Lasers are kept while z > -laser_range
    pub laser_range: f32,
    /// Per-tick travel along -z
    pub laser_z_velocity: f32,
    /// vx = ship rotation.x * laser_vx_gain
    pub laser_vx_gain: f32,
    /// vy = ship rotation.y * laser_vy_gain
    pub laser_vy_gain: f32,
    /// Lasers are kept while y > ground_height
    pub ground_height: f32,

    // === Enemies ===
    /// Per-tick drift along +z
    pub enemy_speed: f32,
    /// Laser-to-enemy distance below which the enemy is destroyed
    pub hit_radius: f32,
    /// Enemies present at the start of a run
    pub initial_enemies: Vec<Vec3>,

    // === Scenery ===
    pub terrain_speed: f32,
    pub terrain_wrap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            laser_range: LASER_RANGE,
            laser_z_velocity: LASER_Z_VELOCITY,
            laser_vx_gain: LASER_VX_GAIN,
            laser_vy_gain: LASER_VY_GAIN,
            ground_height: GROUND_HEIGHT,

            enemy_speed: ENEMY_SPEED,
            hit_radius: HIT_RADIUS,
            initial_enemies: vec![Vec3::new(-10.0, 10.0, -80.0), Vec3::new(20.0, 0.0, -100.0)],

            terrain_speed: TERRAIN_SPEED,
            terrain_wrap: TERRAIN_WRAP,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        let checks = [
            ("laser_range", self.laser_range),
            ("hit_radius", self.hit_radius),
            ("terrain_wrap", self.terrain_wrap),
        ];
        for (field, value) in checks {
            // Written so NaN fails too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
