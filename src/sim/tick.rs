//! Per-frame simulation tick
//!
//! Advances lasers and enemies, resolves hits and retires expired entities.
//! Hit detection runs against the state as it was at the start of the tick,
//! before anything moves.

use serde::Serialize;

use super::collision::detect_hits;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// What a single tick changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Enemies destroyed this tick (equals the score increment)
    pub hits: u32,
    /// Enemies that reached the camera plane unharmed
    pub enemies_escaped: u32,
    /// Lasers that left range or hit the ground
    pub lasers_expired: u32,
    /// Score after the tick
    pub score: u64,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, tuning: &Tuning) -> TickReport {
    state.time_ticks += 1;
    let mut report = TickReport::default();

    // Flags are aligned with `state.enemies` as it stands before any update
    let hit_enemies = detect_hits(&state.enemies, &state.lasers, tuning.hit_radius);
    log::debug!("Tick {} hit enemies: {:?}", state.time_ticks, hit_enemies);

    let hits = hit_enemies.iter().filter(|&&hit| hit).count() as u32;
    if hits > 0 {
        state.score += u64::from(hits);
        report.hits = hits;
        log::info!("Hit detected: {} enemies, score {}", hits, state.score);
    }

    // Enemies: advance first, then keep unhit ones still in front of the camera
    let enemies = std::mem::take(&mut state.enemies);
    for (mut enemy, hit) in enemies.into_iter().zip(hit_enemies) {
        enemy.advance(tuning.enemy_speed);
        if hit {
            state.events.push(GameEvent::EnemyDestroyed {
                id: enemy.id,
                pos: enemy.pos,
            });
        } else if !enemy.ahead_of_camera() {
            report.enemies_escaped += 1;
            state.events.push(GameEvent::EnemyEscaped { id: enemy.id });
        } else {
            state.enemies.push(enemy);
        }
    }

    // Lasers: advance, then keep those still in flight. Hits don't consume lasers.
    let lasers = std::mem::take(&mut state.lasers);
    for mut laser in lasers {
        laser.advance(tuning.laser_z_velocity);
        if laser.in_flight(tuning) {
            state.lasers.push(laser);
        } else {
            report.lasers_expired += 1;
            state.events.push(GameEvent::LaserExpired { id: laser.id });
        }
    }

    report.score = state.score;
    report
}
