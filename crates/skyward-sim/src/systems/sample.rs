//! Read-only per-tick view of every combatant.
//!
//! hecs cannot hand out overlapping borrows, so systems that need to look at
//! other combatants while updating one first take a sample, then apply.

use glam::DVec3;
use hecs::{Entity, World};

use skyward_core::components::*;
use skyward_core::enums::*;
use skyward_core::types::{CombatantId, Orientation, Position, Velocity};

#[derive(Debug, Clone)]
pub struct Sample {
    pub entity: Entity,
    pub id: CombatantId,
    pub team: Team,
    pub roster_index: usize,
    pub position: DVec3,
    pub velocity: DVec3,
    pub forward: DVec3,
    pub target: Option<CombatantId>,
    pub active: bool,
    pub behavior: BehaviorState,
}

/// Every combatant, allied first, each team in roster order.
pub fn sample_combatants(world: &World) -> Vec<Sample> {
    let mut samples: Vec<Sample> = world
        .query::<(
            &Combatant,
            &Position,
            &Velocity,
            &Orientation,
            &Targeting,
            &Lifecycle,
            &Behavior,
        )>()
        .iter()
        .map(
            |(entity, (combatant, pos, vel, orientation, targeting, lifecycle, behavior))| Sample {
                entity,
                id: combatant.id.clone(),
                team: combatant.team,
                roster_index: combatant.roster_index,
                position: pos.0,
                velocity: vel.0,
                forward: orientation.forward(),
                target: targeting.target.clone(),
                active: lifecycle.is_active(),
                behavior: behavior.state,
            },
        )
        .collect();

    samples.sort_by_key(|s| (s.team == Team::Enemy, s.roster_index));
    samples
}

/// Find an active combatant by id.
pub fn find_active<'a>(samples: &'a [Sample], id: &CombatantId) -> Option<&'a Sample> {
    samples.iter().find(|s| s.active && &s.id == id)
}
