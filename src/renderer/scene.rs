//! Builds the per-frame instance list from the world

use glam::Vec3;

use super::instance::{Instance, PrimitiveKind, ShipTransform};
use crate::frame::World;

/// One instance per drawable entity, in a fixed order: starfield, terrain,
/// ship, reticles, enemies, lasers
pub fn collect_instances(world: &World) -> Vec<Instance> {
    let game = &world.game;
    let mut instances = Vec::with_capacity(5 + game.enemies.len() + game.lasers.len());

    instances.push(Instance::new(
        PrimitiveKind::Starfield,
        Vec3::ZERO,
        world.starfield.rotation,
    ));

    // Ground plane lies flat at ground height and scrolls toward the camera
    instances.push(Instance::new(
        PrimitiveKind::Terrain,
        Vec3::new(0.0, world.tuning.ground_height, world.terrain.z),
        Vec3::new(-std::f32::consts::FRAC_PI_2, 0.0, 0.0),
    ));

    let ship = ShipTransform::from_pose(&game.ship);
    instances.push(Instance::new(PrimitiveKind::Ship, ship.position, ship.rotation));

    instances.push(Instance::new(PrimitiveKind::Reticle, world.reticle.rear, Vec3::ZERO));
    instances.push(Instance::new(PrimitiveKind::Reticle, world.reticle.front, Vec3::ZERO));

    instances.extend(
        game.enemies
            .iter()
            .map(|e| Instance::new(PrimitiveKind::Enemy, e.pos, Vec3::ZERO)),
    );
    instances.extend(
        game.lasers
            .iter()
            .map(|l| Instance::new(PrimitiveKind::Laser, l.pos, Vec3::ZERO)),
    );

    instances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameInput;
    use crate::tuning::Tuning;

    fn count(instances: &[Instance], kind: PrimitiveKind) -> usize {
        instances.iter().filter(|i| i.kind() == Some(kind)).count()
    }

    #[test]
    fn test_initial_scene() {
        let world = World::new(Tuning::default());
        let instances = collect_instances(&world);
        assert_eq!(count(&instances, PrimitiveKind::Ship), 1);
        assert_eq!(count(&instances, PrimitiveKind::Terrain), 1);
        assert_eq!(count(&instances, PrimitiveKind::Starfield), 1);
        assert_eq!(count(&instances, PrimitiveKind::Reticle), 2);
        assert_eq!(count(&instances, PrimitiveKind::Enemy), 2);
        assert_eq!(count(&instances, PrimitiveKind::Laser), 0);
    }

    #[test]
    fn test_each_entity_drawn_once() {
        let mut world = World::new(Tuning::default());
        world.queue_fire();
        world.queue_fire();
        world.queue_fire();
        world.frame(&FrameInput::default());

        let instances = collect_instances(&world);
        assert_eq!(count(&instances, PrimitiveKind::Laser), 3);
        assert_eq!(count(&instances, PrimitiveKind::Enemy), world.game.enemies.len());
        assert_eq!(instances.len(), 5 + 3 + world.game.enemies.len());
    }

    #[test]
    fn test_positions_follow_state() {
        let mut world = World::new(Tuning::default());
        world.frame(&FrameInput::default());
        let instances = collect_instances(&world);

        let enemy = instances
            .iter()
            .find(|i| i.kind() == Some(PrimitiveKind::Enemy))
            .unwrap();
        assert_eq!(enemy.position, world.game.enemies[0].pos.to_array());

        let terrain = instances
            .iter()
            .find(|i| i.kind() == Some(PrimitiveKind::Terrain))
            .unwrap();
        assert_eq!(terrain.position[1], -50.0);
        assert_eq!(terrain.position[2], world.terrain.z);
    }
}
