//! Event executor: replays the pre-computed schedule against the world.
//!
//! Every event whose timestamp has been reached is applied exactly once, in
//! schedule order. The executed list is always a prefix of the schedule.

use glam::DVec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::*;
use skyward_core::constants::{PROJECTILE_SPREAD, WRECK_MAX_SPIN};
use skyward_core::enums::*;
use skyward_core::events::{CombatEvent, Notice};
use skyward_core::types::Position;

use crate::world_setup::{self, RosterIndex};

/// Apply every due event. Returns how many were executed this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    index: &RosterIndex,
    schedule: &[CombatEvent],
    executed: &mut Vec<CombatEvent>,
    now_ms: u64,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u64,
    notices: &mut Vec<Notice>,
) -> usize {
    let start = executed.len();

    while let Some(event) = schedule.get(executed.len()) {
        if event.timestamp_ms > now_ms {
            break;
        }
        apply(world, index, event, now_ms, rng, next_projectile_id, notices);
        executed.push(event.clone());
        notices.push(Notice::EventExecuted {
            event: event.clone(),
        });
    }

    executed.len() - start
}

fn apply(
    world: &mut World,
    index: &RosterIndex,
    event: &CombatEvent,
    now_ms: u64,
    rng: &mut ChaCha8Rng,
    next_projectile_id: &mut u64,
    notices: &mut Vec<Notice>,
) {
    let attacker = index.get(&event.attacker).copied();
    let target = index.get(&event.target).copied();

    if attacker.is_none() {
        tracing::warn!(
            id = %event.attacker,
            at = event.timestamp_ms,
            "scheduled {:?} names an unknown attacker",
            event.kind
        );
    }
    let Some(target) = target else {
        tracing::warn!(
            id = %event.target,
            at = event.timestamp_ms,
            "scheduled {:?} names an unknown target",
            event.kind
        );
        return;
    };

    if event.spawns_projectile() {
        if let Some(origin) = attacker.and_then(|a| world.get::<&Position>(a).ok().map(|p| p.0)) {
            let half = PROJECTILE_SPREAD / 2.0;
            let velocity = DVec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            world_setup::spawn_projectile(
                world,
                next_projectile_id,
                ProjectileKind::Projectile,
                origin,
                velocity,
                now_ms,
            );
        }
    }

    match event.kind {
        CombatEventKind::Hit => {
            if let (Some(resulting), Ok(mut health)) =
                (event.resulting_health, world.get::<&mut Health>(target))
            {
                health.current = resulting.clamp(0.0, health.max);
            }
        }
        CombatEventKind::Destroy => {
            destroy(world, target, now_ms, rng);
            if let Some(attacker) = attacker {
                if let Ok(mut kills) = world.get::<&mut KillCount>(attacker) {
                    kills.0 += 1;
                }
            }
            let position = world
                .get::<&Position>(target)
                .map(|p| p.0.to_array())
                .unwrap_or_default();
            notices.push(Notice::CombatantDestroyed {
                id: event.target.clone(),
                by: event.attacker.clone(),
                position,
            });
        }
        CombatEventKind::Escape => {
            if let Ok(mut behavior) = world.get::<&mut Behavior>(target) {
                behavior.state = BehaviorState::Escaping;
            }
        }
        CombatEventKind::Miss => {}
    }
}

/// Flip an active combatant into the wreckage phase.
fn destroy(world: &mut World, target: hecs::Entity, now_ms: u64, rng: &mut ChaCha8Rng) {
    let Ok((lifecycle, health, targeting, behavior)) = world.query_one_mut::<(
        &mut Lifecycle,
        &mut Health,
        &mut Targeting,
        &mut Behavior,
    )>(target) else {
        return;
    };

    health.current = 0.0;
    if !lifecycle.is_active() {
        return;
    }

    let spin = DVec3::new(
        rng.gen_range(-WRECK_MAX_SPIN..WRECK_MAX_SPIN),
        rng.gen_range(-WRECK_MAX_SPIN..WRECK_MAX_SPIN),
        rng.gen_range(-WRECK_MAX_SPIN..WRECK_MAX_SPIN),
    );
    *lifecycle = Lifecycle::Wrecked {
        destroyed_at_ms: now_ms,
        spin,
    };
    targeting.target = None;
    behavior.state = BehaviorState::Wrecked;
}
