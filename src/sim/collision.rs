//! Laser/enemy hit detection
//!
//! Hits are sphere tests against a fixed radius. A laser is not consumed by
//! a hit, so one laser may flag several enemies in the same tick.

use super::state::{Enemy, Laser};
use crate::distance;

/// True if any laser lies strictly within `radius` of the enemy
pub fn enemy_hit(enemy: &Enemy, lasers: &[Laser], radius: f32) -> bool {
    lasers.iter().any(|laser| distance(laser.pos, enemy.pos) < radius)
}

/// Hit flags aligned with `enemies` by index
pub fn detect_hits(enemies: &[Enemy], lasers: &[Laser], radius: f32) -> Vec<bool> {
    enemies
        .iter()
        .map(|enemy| enemy_hit(enemy, lasers, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn laser(id: u32, x: f32, y: f32, z: f32) -> Laser {
        Laser {
            id,
            pos: Vec3::new(x, y, z),
            velocity: Vec2::ZERO,
        }
    }

    fn enemy(id: u32, x: f32, y: f32, z: f32) -> Enemy {
        Enemy {
            id,
            pos: Vec3::new(x, y, z),
        }
    }

    #[test]
    fn test_flags_align_with_enemies() {
        let enemies = [enemy(1, 0.0, 0.0, -10.0), enemy(2, 50.0, 0.0, -10.0)];
        let lasers = [laser(3, 0.0, 1.0, -11.0)];
        assert_eq!(detect_hits(&enemies, &lasers, 3.0), vec![true, false]);
    }

    #[test]
    fn test_radius_is_exclusive() {
        let enemies = [enemy(1, 0.0, 0.0, -10.0)];
        let lasers = [laser(2, 0.0, 0.0, -13.0)];
        assert_eq!(detect_hits(&enemies, &lasers, 3.0), vec![false]);
    }

    #[test]
    fn test_one_laser_can_flag_many_enemies() {
        let enemies = [enemy(1, 1.0, 0.0, -10.0), enemy(2, -1.0, 0.0, -10.0)];
        let lasers = [laser(3, 0.0, 0.0, -10.0)];
        assert_eq!(detect_hits(&enemies, &lasers, 3.0), vec![true, true]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(detect_hits(&[], &[laser(1, 0.0, 0.0, 0.0)], 3.0).is_empty());
        assert_eq!(detect_hits(&[enemy(1, 0.0, 0.0, -1.0)], &[], 3.0), vec![false]);
    }
}
