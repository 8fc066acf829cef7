//! Demo autopilot
//!
//! Steers the pointer so the next laser intercepts the closest enemy, with a
//! little seeded wobble so runs with different seeds play out differently.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{SHIP_PITCH_GAIN, SHIP_ROLL_GAIN};
use crate::frame::{FrameInput, World};
use crate::sim::Pointer;

pub struct Autopilot {
    rng: Pcg32,
    /// Fire once every this many frames (0 never fires)
    fire_every: u64,
    /// Max pointer jitter added to the aim, NDC units
    wobble: f32,
}

impl Autopilot {
    pub fn new(seed: u64, fire_every: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            fire_every,
            wobble: 0.02,
        }
    }

    pub fn with_wobble(mut self, wobble: f32) -> Self {
        self.wobble = wobble;
        self
    }

    /// Pointer that sends a laser fired now through the closest enemy
    pub fn aim(world: &World) -> Option<Pointer> {
        let tuning = &world.tuning;
        let target = world
            .game
            .enemies
            .iter()
            .filter(|e| e.pos.z.is_finite())
            .max_by(|a, b| a.pos.z.total_cmp(&b.pos.z))?;

        // Laser z after t ticks: -v*t. Enemy z: z0 + s*t. They meet at t = -z0 / (v + s).
        let closing = tuning.laser_z_velocity + tuning.enemy_speed;
        if closing <= 0.0 {
            return None;
        }
        let t = -target.pos.z / closing;
        if t <= 0.0 {
            return None;
        }

        let vx = target.pos.x / t;
        let vy = target.pos.y / t;
        // Invert laser_velocity(map_pointer(p))
        let mx = -vx / (SHIP_ROLL_GAIN * tuning.laser_vx_gain);
        let my = -vy / (SHIP_PITCH_GAIN * tuning.laser_vy_gain);
        Some(Pointer::new(mx.clamp(-1.0, 1.0), my.clamp(-1.0, 1.0)))
    }

    /// Input for the next frame of `world`
    pub fn next_input(&mut self, world: &World) -> FrameInput {
        let frame = world.frame_count() + 1;
        let pointer = match Self::aim(world) {
            Some(p) if self.wobble > 0.0 => Pointer::new(
                p.x + self.rng.random_range(-self.wobble..=self.wobble),
                p.y + self.rng.random_range(-self.wobble..=self.wobble),
            ),
            Some(p) => p,
            // Nothing to shoot at: drift lazily
            None => Pointer::new(
                (frame as f32 * 0.01).sin() * 0.5,
                (frame as f32 * 0.007).cos() * 0.3,
            ),
        };
        let fire = u32::from(self.fire_every > 0 && frame % self.fire_every == 0);
        FrameInput { pointer, fire }
    }
}
