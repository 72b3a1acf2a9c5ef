//! Steering AI: where each active combatant wants to fly this tick.
//!
//! Produces an aim point per combatant. Allied units additionally flock:
//! cohesion pulls stragglers toward the squadron centroid and avoidance keeps
//! wingmen from stacking on top of each other.

use glam::DVec3;
use hecs::{Entity, World};

use skyward_core::components::Behavior;
use skyward_core::config::BattleConfig;
use skyward_core::constants::STRAIGHT_FLIGHT_LOOKAHEAD;
use skyward_core::enums::*;

use super::sample::{find_active, sample_combatants, Sample};

/// Desired aim point for one combatant.
#[derive(Debug, Clone, Copy)]
pub struct Aim {
    pub entity: Entity,
    pub point: DVec3,
}

/// Compute aim points and refresh behavior tags. Wrecked combatants get none.
pub fn run(world: &mut World, config: &BattleConfig) -> Vec<Aim> {
    let samples = sample_combatants(world);
    let wingmen: Vec<&Sample> = samples
        .iter()
        .filter(|s| s.active && s.team == Team::Allied)
        .collect();
    let flocking = wingmen.len() > 1;
    let centroid = if flocking {
        wingmen.iter().map(|s| s.position).sum::<DVec3>() / wingmen.len() as f64
    } else {
        DVec3::ZERO
    };

    let mut aims = Vec::new();
    let mut behaviors: Vec<(Entity, BehaviorState)> = Vec::new();

    for sample in samples.iter().filter(|s| s.active) {
        let target = sample
            .target
            .as_ref()
            .and_then(|id| find_active(&samples, id));

        let (mut point, mut state) = if sample.behavior == BehaviorState::Escaping {
            (escape_point(sample), BehaviorState::Escaping)
        } else if let Some(target) = target {
            (target.position, BehaviorState::Pursuing)
        } else {
            (
                sample.position + sample.forward * STRAIGHT_FLIGHT_LOOKAHEAD,
                BehaviorState::Idle,
            )
        };

        if flocking && sample.team == Team::Allied {
            let (pulled, regrouping) = apply_cohesion(sample.position, point, centroid, config);
            point = apply_avoidance(sample, pulled, &wingmen, config);
            if regrouping && state == BehaviorState::Idle {
                state = BehaviorState::Regrouping;
            }
        }

        aims.push(Aim {
            entity: sample.entity,
            point,
        });
        if state != sample.behavior {
            behaviors.push((sample.entity, state));
        }
    }

    for (entity, state) in behaviors {
        if let Ok(mut behavior) = world.get::<&mut Behavior>(entity) {
            behavior.state = state;
        }
    }

    aims
}

/// Pull the aim point toward the centroid in proportion to how far outside
/// the cohesion radius the unit is. Returns whether any pull was applied.
pub fn apply_cohesion(
    position: DVec3,
    aim: DVec3,
    centroid: DVec3,
    config: &BattleConfig,
) -> (DVec3, bool) {
    let distance = position.distance(centroid);
    if distance <= config.cohesion_radius {
        return (aim, false);
    }
    let excess = (distance - config.cohesion_radius) / config.cohesion_radius;
    let pull = (excess * config.cohesion_strength).min(config.max_cohesion_pull);
    (aim.lerp(centroid, pull), pull > 0.0)
}

/// Push the aim point away from every wingman inside the avoidance radius.
pub fn apply_avoidance(
    me: &Sample,
    aim: DVec3,
    wingmen: &[&Sample],
    config: &BattleConfig,
) -> DVec3 {
    let reach = aim.distance(me.position);
    let mut adjusted = aim;

    for other in wingmen.iter().filter(|o| o.entity != me.entity) {
        let offset = me.position - other.position;
        let distance = offset.length();
        if distance <= f64::EPSILON || distance >= config.avoidance_radius {
            continue;
        }
        let closeness = 1.0 - distance / config.avoidance_radius;
        let push = (closeness * closeness * config.avoidance_strength).min(config.max_avoidance_push);
        adjusted += (offset / distance) * reach * push;
    }

    adjusted
}

/// Escaping units head straight out from the arena centre.
fn escape_point(sample: &Sample) -> DVec3 {
    let outward = sample.position.try_normalize().unwrap_or(sample.forward);
    sample.position + outward * STRAIGHT_FLIGHT_LOOKAHEAD
}
