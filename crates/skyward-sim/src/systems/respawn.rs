//! Respawn: recycles wreckage back into the fight after the respawn delay.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skyward_core::components::*;
use skyward_core::enums::{BehaviorState, Team};
use skyward_core::events::Notice;
use skyward_core::types::{CombatantId, Orientation, Position, Velocity};

use crate::world_setup;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    now_ms: u64,
    respawn_delay_ms: u64,
    notices: &mut Vec<Notice>,
) {
    let mut due: Vec<(Entity, CombatantId, Team, usize)> = world
        .query::<(&Combatant, &Lifecycle)>()
        .iter()
        .filter_map(|(entity, (combatant, lifecycle))| {
            let destroyed_at = lifecycle.destroyed_at_ms()?;
            (now_ms.saturating_sub(destroyed_at) > respawn_delay_ms).then(|| {
                (
                    entity,
                    combatant.id.clone(),
                    combatant.team,
                    combatant.roster_index,
                )
            })
        })
        .collect();
    // Roll in roster order.
    due.sort_by_key(|(_, _, team, index)| (*team == Team::Enemy, *index));

    for (entity, id, team, _) in due {
        let position = world_setup::respawn_position(team, rng);
        let timers = world_setup::roll_weapon_timers(rng);

        let Ok((pos, vel, orientation, health, targeting, lifecycle, behavior, weapons)) = world
            .query_one_mut::<(
                &mut Position,
                &mut Velocity,
                &mut Orientation,
                &mut Health,
                &mut Targeting,
                &mut Lifecycle,
                &mut Behavior,
                &mut WeaponTimers,
            )>(entity)
        else {
            continue;
        };

        pos.0 = position;
        vel.0 = DVec3::ZERO;
        *orientation = Orientation::default();
        health.current = health.max;
        targeting.target = None;
        *lifecycle = Lifecycle::Active;
        behavior.state = BehaviorState::Idle;
        *weapons = timers;

        tracing::debug!(%id, at = now_ms, "combatant respawned");
        notices.push(Notice::CombatantRespawned {
            id,
            position: position.to_array(),
        });
    }
}
