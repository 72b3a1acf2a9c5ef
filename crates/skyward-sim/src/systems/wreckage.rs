//! Wreckage physics: drag, gravity and spin for destroyed airframes.
//!
//! Wreckage that falls out of the arena sphere is parked until respawn.

use glam::DQuat;
use hecs::World;

use skyward_core::components::Lifecycle;
use skyward_core::config::BattleConfig;
use skyward_core::types::{Orientation, Position, Velocity};

pub fn run(world: &mut World, config: &BattleConfig) {
    let dt = config.dt();
    let damping = (1.0 - config.wreck_drag * dt).max(0.0);

    for (_entity, (pos, vel, orientation, lifecycle)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Orientation,
        &mut Lifecycle,
    )>() {
        let Lifecycle::Wrecked {
            destroyed_at_ms,
            spin,
        } = *lifecycle
        else {
            continue;
        };

        vel.0 *= damping;
        vel.0.y -= config.gravity * dt;
        orientation.0 = (DQuat::from_scaled_axis(spin * dt) * orientation.0).normalize();
        pos.0 += vel.0 * dt;

        if pos.radius() > config.world_radius {
            *lifecycle = Lifecycle::PendingRespawn { destroyed_at_ms };
        }
    }
}
