//! Snapshot system: queries the ECS world and builds the roster and
//! projectile views for a `BattleState`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use skyward_core::components::*;
use skyward_core::enums::*;
use skyward_core::state::{CombatantView, ProjectileView};
use skyward_core::types::{Orientation, Position, Velocity};

/// Build `(allied, enemy)` combatant views, each sorted by roster index.
pub fn build_rosters(world: &World) -> (Vec<CombatantView>, Vec<CombatantView>) {
    let mut allied: Vec<(usize, CombatantView)> = Vec::new();
    let mut enemy: Vec<(usize, CombatantView)> = Vec::new();

    for (_, (combatant, pos, vel, orientation, health, stats, targeting, lifecycle, behavior, kills)) in
        world
            .query::<(
                &Combatant,
                &Position,
                &Velocity,
                &Orientation,
                &Health,
                &CombatStats,
                &Targeting,
                &Lifecycle,
                &Behavior,
                &KillCount,
            )>()
            .iter()
    {
        let view = CombatantView {
            id: combatant.id.clone(),
            roster_ref: combatant.roster_ref.clone(),
            team: combatant.team,
            health: health.current,
            max_health: health.max,
            position: pos.0.to_array(),
            velocity: vel.0.to_array(),
            orientation: orientation.0.to_array(),
            rotation: orientation.euler(),
            target: targeting.target.clone(),
            weapon_strength: stats.weapon_strength,
            speed: stats.speed,
            agility: stats.agility,
            intelligence: stats.intelligence,
            endurance: stats.endurance,
            is_destroyed: lifecycle.is_pending_respawn(),
            is_wrecked: lifecycle.is_wrecked(),
            destroyed_at_ms: lifecycle.destroyed_at_ms(),
            kill_count: kills.0,
            behavior: behavior.state,
        };
        match combatant.team {
            Team::Allied => allied.push((combatant.roster_index, view)),
            Team::Enemy => enemy.push((combatant.roster_index, view)),
        }
    }

    allied.sort_by_key(|(index, _)| *index);
    enemy.sort_by_key(|(index, _)| *index);
    (
        allied.into_iter().map(|(_, v)| v).collect(),
        enemy.into_iter().map(|(_, v)| v).collect(),
    )
}

/// Build the live transient object list, sorted by id.
pub fn build_projectiles(world: &World, now_ms: u64) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            kind: projectile.kind,
            color: projectile.color,
            position: pos.0.to_array(),
            velocity: vel.0.to_array(),
            lifespan_ms: projectile.lifespan_ms.saturating_sub(projectile.age_ms(now_ms)),
            created_at_ms: projectile.created_at_ms,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
