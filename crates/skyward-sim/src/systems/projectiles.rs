//! Transient object motion. Flares fall; projectiles and tracers fly straight.

use hecs::World;

use skyward_core::components::Projectile;
use skyward_core::enums::ProjectileKind;
use skyward_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f64, gravity: f64) {
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &mut Velocity)>()
    {
        if projectile.kind == ProjectileKind::Flare {
            vel.0.y -= gravity * dt;
        }
        pos.0 += vel.0 * dt;
    }
}
