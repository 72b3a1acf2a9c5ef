//! Target acquisition.
//!
//! Allied units lock the nearest active enemy; enemies pick a random active
//! allied unit. A lock is kept until its target stops being active.

use hecs::World;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::Targeting;
use skyward_core::enums::Team;
use skyward_core::types::CombatantId;

use super::sample::{find_active, sample_combatants, Sample};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    let samples = sample_combatants(world);
    let mut updates: Vec<(hecs::Entity, Option<CombatantId>)> = Vec::new();

    for sample in samples.iter().filter(|s| s.active) {
        let still_valid = sample
            .target
            .as_ref()
            .and_then(|id| find_active(&samples, id))
            .is_some_and(|t| t.team != sample.team);
        if still_valid {
            continue;
        }

        let acquired = match sample.team {
            Team::Allied => nearest_opponent(sample, &samples),
            Team::Enemy => random_opponent(sample, &samples, rng),
        };
        if acquired.as_ref() != sample.target.as_ref() {
            updates.push((sample.entity, acquired));
        }
    }

    for (entity, target) in updates {
        if let Ok(mut targeting) = world.get::<&mut Targeting>(entity) {
            targeting.target = target;
        }
    }
}

/// Nearest active opponent. Samples are in roster order and `min_by` keeps
/// the first of equal elements, so ties go to the lower roster index.
fn nearest_opponent(me: &Sample, samples: &[Sample]) -> Option<CombatantId> {
    samples
        .iter()
        .filter(|s| s.active && s.team != me.team)
        .min_by(|a, b| {
            let da = a.position.distance_squared(me.position);
            let db = b.position.distance_squared(me.position);
            da.total_cmp(&db)
        })
        .map(|s| s.id.clone())
}

fn random_opponent(me: &Sample, samples: &[Sample], rng: &mut ChaCha8Rng) -> Option<CombatantId> {
    let candidates: Vec<&Sample> = samples
        .iter()
        .filter(|s| s.active && s.team != me.team)
        .collect();
    candidates.choose(rng).map(|s| s.id.clone())
}
