//! Laser spawning on fire actions
//!
//! Firing is event-driven, not frame-gated: it may be called any number of
//! times between two ticks.

use glam::{Vec2, Vec3};

use super::state::{GameEvent, GameState, Laser};
use crate::tuning::Tuning;

/// Launch velocity for the current ship rotation
pub fn laser_velocity(state: &GameState, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        state.ship.rotation.x * tuning.laser_vx_gain,
        state.ship.rotation.y * tuning.laser_vy_gain,
    )
}

/// Append a laser at the origin, returning its ID
pub fn fire(state: &mut GameState, tuning: &Tuning) -> u32 {
    let id = state.next_entity_id();
    let velocity = laser_velocity(state, tuning);
    state.lasers.push(Laser {
        id,
        pos: Vec3::ZERO,
        velocity,
    });
    state.events.push(GameEvent::LaserFired { id, velocity });
    log::debug!("Laser {} fired with velocity {:?}", id, velocity);
    id
}
