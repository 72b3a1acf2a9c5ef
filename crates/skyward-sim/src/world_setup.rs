//! Entity spawn factories for setting up the battle world.
//!
//! Creates allied and enemy combatants on their standoff rings and the
//! transient projectile, tracer and flare entities spawned during a battle.

use std::collections::HashMap;

use glam::{DQuat, DVec3};
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyward_core::components::*;
use skyward_core::constants::*;
use skyward_core::enums::*;
use skyward_core::roster::{FighterJet, Mission, Pilot};
use skyward_core::types::{CombatantId, Orientation, Position, Velocity};

/// Id → entity lookup for every combatant. Ids stay bound to the same
/// entity for the whole battle; respawning reuses the entity.
pub type RosterIndex = HashMap<CombatantId, Entity>;

/// Spawn the allied squadron and the mission's enemy formation.
pub fn setup_battle(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    squadron: &[FighterJet],
    pilots: &[Pilot],
    mission: &Mission,
    cruise_speed: f64,
) -> RosterIndex {
    let mut index = RosterIndex::new();

    for (i, jet) in squadron.iter().enumerate() {
        let (intelligence, endurance) = jet.pilot_attributes(pilots);
        let stats = CombatStats {
            weapon_strength: jet.computed_stats.weapon_strength,
            speed: jet.computed_stats.speed,
            agility: jet.computed_stats.agility,
            intelligence,
            endurance,
        };
        let combatant = Combatant {
            id: CombatantId::new(Team::Allied, i),
            team: Team::Allied,
            roster_index: i,
            roster_ref: jet.id.clone(),
        };
        let position = ring_position(ALLIED_STANDOFF_RADIUS, i, squadron.len());
        let id = combatant.id.clone();
        let entity = spawn_combatant(world, rng, combatant, stats, position, cruise_speed);
        index.insert(id, entity);
    }

    let enemy_stats = CombatStats {
        weapon_strength: mission.enemy_stats.weapon_strength,
        speed: mission.enemy_stats.speed,
        agility: mission.enemy_stats.agility,
        intelligence: mission.enemy_stats.intelligence,
        endurance: mission.enemy_stats.endurance,
    };
    for i in 0..mission.enemy_count {
        let combatant = Combatant {
            id: CombatantId::new(Team::Enemy, i),
            team: Team::Enemy,
            roster_index: i,
            roster_ref: String::new(),
        };
        let position = ring_position(ENEMY_STANDOFF_RADIUS, i, mission.enemy_count);
        let id = combatant.id.clone();
        let entity = spawn_combatant(world, rng, combatant, enemy_stats, position, cruise_speed);
        index.insert(id, entity);
    }

    tracing::debug!(
        allied = squadron.len(),
        enemy = mission.enemy_count,
        "battle world populated"
    );
    index
}

/// Spawn one combatant at `position`, nose toward the arena centre, at cruise speed.
pub fn spawn_combatant(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    combatant: Combatant,
    stats: CombatStats,
    position: DVec3,
    cruise_speed: f64,
) -> Entity {
    let orientation = facing_centre(position);
    let velocity = orientation.forward() * cruise_speed;

    world.spawn((
        combatant,
        Position(position),
        Velocity(velocity),
        orientation,
        Health::full(MAX_HEALTH),
        stats,
        Targeting::default(),
        Lifecycle::Active,
        Behavior::default(),
        KillCount::default(),
        roll_weapon_timers(rng),
    ))
}

/// Evenly spaced point on a horizontal ring at y = 0.
pub fn ring_position(radius: f64, index: usize, count: usize) -> DVec3 {
    let angle = std::f64::consts::TAU * index as f64 / count.max(1) as f64;
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Spawn ring radius for a team.
pub fn standoff_radius(team: Team) -> f64 {
    match team {
        Team::Allied => ALLIED_STANDOFF_RADIUS,
        Team::Enemy => ENEMY_STANDOFF_RADIUS,
    }
}

/// Random point on the team's standoff ring with a little altitude jitter.
pub fn respawn_position(team: Team, rng: &mut ChaCha8Rng) -> DVec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let altitude: f64 = rng.gen_range(-RESPAWN_ALTITUDE_JITTER..RESPAWN_ALTITUDE_JITTER);
    let radius = standoff_radius(team);
    DVec3::new(radius * angle.cos(), altitude, radius * angle.sin())
}

/// Fresh gun and flare cooldowns, so a formation does not fire in unison.
pub fn roll_weapon_timers(rng: &mut ChaCha8Rng) -> WeaponTimers {
    WeaponTimers {
        gun_cooldown_ms: rng.gen_range(GUN_COOLDOWN_MIN_MS..=GUN_COOLDOWN_MAX_MS),
        flare_cooldown_ms: rng.gen_range(FLARE_COOLDOWN_MIN_MS..=FLARE_COOLDOWN_MAX_MS),
    }
}

/// Spawn a transient object. Returns the new entity.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u64,
    kind: ProjectileKind,
    position: DVec3,
    velocity: DVec3,
    created_at_ms: u64,
) -> Entity {
    let (color, lifespan_ms) = match kind {
        ProjectileKind::Projectile => (PROJECTILE_COLOR, PROJECTILE_LIFESPAN_MS),
        ProjectileKind::Tracer => (TRACER_COLOR, TRACER_LIFESPAN_MS),
        ProjectileKind::Flare => (FLARE_COLOR, FLARE_LIFESPAN_MS),
    };
    let id = *next_id;
    *next_id += 1;

    world.spawn((
        Projectile {
            id,
            kind,
            color,
            lifespan_ms,
            created_at_ms,
        },
        Position(position),
        Velocity(velocity),
    ))
}

fn facing_centre(position: DVec3) -> Orientation {
    let inward = (-position).normalize_or_zero();
    if inward == DVec3::ZERO {
        return Orientation::default();
    }
    Orientation(DQuat::from_rotation_arc(DVec3::Z, inward))
}
