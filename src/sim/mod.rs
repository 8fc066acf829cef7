//! Shooter simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per rendered frame, no wall-clock time
//! - Stable iteration order (fire order for lasers, spawn order for enemies)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{detect_hits, enemy_hit};
pub use input::{Pointer, apply_pointer, map_pointer};
pub use spawn::{fire, laser_velocity};
pub use state::{Enemy, GameEvent, GameState, Laser, ShipPose, ShipRotation};
pub use tick::{TickReport, tick};
