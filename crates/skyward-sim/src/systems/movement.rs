//! Flight integration for active combatants.
//!
//! Turns each airframe toward its aim point at a bounded rate, blends
//! velocity toward cruise along the new nose, advances position and wraps
//! anything that leaves the arena sphere through the origin.

use glam::{DQuat, DVec3};
use hecs::World;

use skyward_core::components::Lifecycle;
use skyward_core::config::BattleConfig;
use skyward_core::types::{Orientation, Position, Velocity};

use super::steering::Aim;

pub fn run(world: &mut World, aims: &[Aim], config: &BattleConfig) {
    let dt = config.dt();
    let max_turn = config.turn_rate * dt;
    let blend = (config.velocity_blend_rate * dt).min(1.0);

    for aim in aims {
        let Ok((pos, vel, orientation, lifecycle)) = world
            .query_one_mut::<(&mut Position, &mut Velocity, &mut Orientation, &Lifecycle)>(
                aim.entity,
            )
        else {
            continue;
        };
        if !lifecycle.is_active() {
            continue;
        }

        let desired = (aim.point - pos.0).normalize_or_zero();
        if desired != DVec3::ZERO {
            orientation.0 = turn_toward(orientation.0, desired, max_turn);
        }

        let desired_velocity = orientation.forward() * config.cruise_speed;
        vel.0 = vel.0.lerp(desired_velocity, blend);
        pos.0 = integrate_position(pos.0, vel.0, dt, config.world_radius);
    }
}

/// Rotate `current` toward facing `desired` by at most `max_angle` radians.
/// `desired` must be normalized.
pub fn turn_toward(current: DQuat, desired: DVec3, max_angle: f64) -> DQuat {
    let forward = current * DVec3::Z;
    let angle = forward.angle_between(desired);
    if !angle.is_finite() || angle <= 1e-9 {
        return current;
    }

    let aligned = (DQuat::from_rotation_arc(forward, desired) * current).normalize();
    let fraction = (max_angle / angle).min(1.0);
    current.slerp(aligned, fraction).normalize()
}

/// Advance a position by one step. Anything beyond `world_radius` is
/// reflected through the origin, keeping its distance.
pub fn integrate_position(position: DVec3, velocity: DVec3, dt: f64, world_radius: f64) -> DVec3 {
    let next = position + velocity * dt;
    if next.length() > world_radius {
        -next
    } else {
        next
    }
}
