//! Game state and core simulation types
//!
//! Everything the frame loop reads or writes lives in `GameState`. Each slot
//! has a single writer: the ship pose is written by the input mapper, lasers
//! by the spawner and the tick, enemies and score by the tick only.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Ship rotation, radians per axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Ship pose derived from the pointer each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipPose {
    /// Screen-plane position (the ship never moves along z)
    pub position: Vec2,
    pub rotation: ShipRotation,
}

/// A laser bolt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Laser {
    pub id: u32,
    pub pos: Vec3,
    /// Per-tick (vx, vy); z travel comes from tuning
    pub velocity: Vec2,
}

impl Laser {
    /// Advance one tick along (vx, vy, -z_velocity)
    pub fn advance(&mut self, z_velocity: f32) {
        self.pos.x += self.velocity.x;
        self.pos.y += self.velocity.y;
        self.pos.z -= z_velocity;
    }

    /// Still in flight: short of max range and above the ground
    pub fn in_flight(&self, tuning: &Tuning) -> bool {
        self.pos.z > -tuning.laser_range && self.pos.y > tuning.ground_height
    }
}

/// An enemy drifting toward the camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec3,
}

impl Enemy {
    pub fn advance(&mut self, speed: f32) {
        self.pos.z += speed;
    }

    /// Enemies only exist in front of the camera plane
    pub fn ahead_of_camera(&self) -> bool {
        self.pos.z < 0.0
    }
}

/// Notifications produced while mutating the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LaserFired { id: u32, velocity: Vec2 },
    EnemyDestroyed { id: u32, pos: Vec3 },
    /// Enemy crossed z >= 0 without being hit
    EnemyEscaped { id: u32 },
    /// Laser left range or hit the ground
    LaserExpired { id: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ship: ShipPose,
    /// Active lasers, in fire order
    pub lasers: Vec<Laser>,
    /// Active enemies, in spawn order
    pub enemies: Vec<Enemy>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events not yet drained by an observer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh run: zero pose, seeded enemies, no lasers, zero score
    pub fn new(tuning: &Tuning) -> Self {
        let mut state = Self {
            ship: ShipPose::default(),
            lasers: Vec::new(),
            enemies: Vec::with_capacity(tuning.initial_enemies.len()),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        for &pos in &tuning.initial_enemies {
            state.spawn_enemy(pos);
        }

        state
    }

    /// Throw away the current run and start over
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at the given position, returning its ID
    pub fn spawn_enemy(&mut self, pos: Vec3) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy { id, pos });
        id
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
