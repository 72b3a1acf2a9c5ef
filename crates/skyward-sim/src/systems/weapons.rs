//! Guns and flares.
//!
//! Purely cosmetic: tracers and flares never change an outcome. Each
//! combatant fires a tracer when its gun is ready and its target sits in the
//! forward cone, and drops a flare when its flare timer is ready and an
//! active opponent is chasing it at close range.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::WeaponTimers;
use skyward_core::constants::*;
use skyward_core::enums::ProjectileKind;

use super::sample::{find_active, sample_combatants, Sample};
use crate::world_setup;

pub fn run(
    world: &mut World,
    tick_ms: u64,
    now_ms: u64,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u64,
) {
    let samples = sample_combatants(world);
    let mut shots: Vec<(ProjectileKind, DVec3, DVec3)> = Vec::new();

    for sample in samples.iter().filter(|s| s.active) {
        let Ok(mut timers) = world.get::<&mut WeaponTimers>(sample.entity) else {
            continue;
        };
        timers.gun_cooldown_ms = timers.gun_cooldown_ms.saturating_sub(tick_ms);
        timers.flare_cooldown_ms = timers.flare_cooldown_ms.saturating_sub(tick_ms);

        if timers.gun_cooldown_ms == 0 && has_firing_solution(sample, &samples) {
            timers.gun_cooldown_ms = rng.gen_range(GUN_COOLDOWN_MIN_MS..=GUN_COOLDOWN_MAX_MS);
            shots.push((
                ProjectileKind::Tracer,
                sample.position,
                sample.velocity + sample.forward * TRACER_SPEED,
            ));
        }
        if timers.flare_cooldown_ms == 0 && under_pursuit(sample, &samples) {
            timers.flare_cooldown_ms = rng.gen_range(FLARE_COOLDOWN_MIN_MS..=FLARE_COOLDOWN_MAX_MS);
            shots.push((ProjectileKind::Flare, sample.position, sample.velocity * 0.25));
        }
    }

    for (kind, origin, velocity) in shots {
        world_setup::spawn_projectile(world, next_projectile_id, kind, origin, velocity, now_ms);
    }
}

/// Target within gun range and inside the forward cone.
fn has_firing_solution(shooter: &Sample, samples: &[Sample]) -> bool {
    let Some(target) = shooter
        .target
        .as_ref()
        .and_then(|id| find_active(samples, id))
    else {
        return false;
    };
    let offset = target.position - shooter.position;
    let distance = offset.length();
    if distance <= f64::EPSILON || distance > GUN_RANGE {
        return false;
    }
    shooter.forward.dot(offset / distance) >= GUN_CONE_COS
}

/// Some active opponent has this combatant locked and is close behind.
fn under_pursuit(me: &Sample, samples: &[Sample]) -> bool {
    samples.iter().any(|s| {
        s.active
            && s.team != me.team
            && s.target.as_ref() == Some(&me.id)
            && s.position.distance(me.position) <= FLARE_THREAT_RANGE
    })
}
