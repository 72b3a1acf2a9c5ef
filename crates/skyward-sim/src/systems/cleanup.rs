//! Cleanup system: removes transient objects that have outlived their lifespan.

use hecs::{Entity, World};

use skyward_core::components::Projectile;

/// Despawn every projectile, tracer and flare whose age has reached its lifespan.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, now_ms: u64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.is_expired(now_ms) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
