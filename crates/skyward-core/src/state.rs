//! Battle state snapshot: the complete visible state published after each tick.
//!
//! Snapshots are plain values: once published they are never mutated, and a
//! renderer holding one is unaffected by later ticks.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{CombatEvent, Notice};
use crate::types::{CombatantId, SimTime};

/// Complete battle state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleState {
    pub status: BattleStatus,
    /// Battle clock. Tick 0 / 0 ms is the moment the battle started.
    pub time: SimTime,
    /// Elapsed time at which the battle concluded.
    pub end_time_ms: Option<u64>,
    /// Clock frozen by a pause request.
    pub paused: bool,
    pub tactic: Tactic,
    /// Allied combatants, in roster order.
    pub allied: Vec<CombatantView>,
    /// Enemy combatants, in roster order.
    pub enemy: Vec<CombatantView>,
    pub scheduled_events: Vec<CombatEvent>,
    /// Prefix of `scheduled_events` already applied.
    pub executed_events: Vec<CombatEvent>,
    pub projectiles: Vec<ProjectileView>,
    /// Present only once the status is terminal.
    pub results: Option<BattleResults>,
    /// What happened during the tick that produced this snapshot.
    pub notices: Vec<Notice>,
}

/// One combatant as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: CombatantId,
    /// Jet id for allied units, empty for enemies.
    pub roster_ref: String,
    pub team: Team,
    pub health: f64,
    pub max_health: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    /// Unit quaternion `[x, y, z, w]`.
    pub orientation: [f64; 4],
    /// XYZ Euler angles derived from `orientation`, for renderers.
    pub rotation: [f64; 3],
    pub target: Option<CombatantId>,
    pub weapon_strength: f64,
    pub speed: f64,
    pub agility: f64,
    pub intelligence: f64,
    pub endurance: f64,
    /// Wreckage has left the arena and is waiting to respawn.
    pub is_destroyed: bool,
    /// Falling debris.
    pub is_wrecked: bool,
    pub destroyed_at_ms: Option<u64>,
    pub kill_count: u32,
    pub behavior: BehaviorState,
}

/// A live transient object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub kind: ProjectileKind,
    pub color: u32,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    /// Milliseconds left before the object expires.
    pub lifespan_ms: u64,
    pub created_at_ms: u64,
}

/// Final results, fixed by the outcome calculator before the battle starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleResults {
    pub victory: bool,
    pub surviving_allied: u32,
    pub destroyed_allied: u32,
    pub surviving_enemy: u32,
    pub destroyed_enemy: u32,
    pub enemies_escaped: u32,
    pub duration_ms: u64,
    pub rewards: Rewards,
    pub pilot_stats: Vec<PilotStats>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    pub credits: u32,
    pub research_points: u32,
    pub high_score_bonus: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PilotStats {
    pub pilot_id: String,
    pub kills: u32,
    pub damage: f64,
    pub survived: bool,
}

impl BattleState {
    /// Look up a combatant in either roster.
    pub fn combatant(&self, id: &str) -> Option<&CombatantView> {
        self.allied
            .iter()
            .chain(self.enemy.iter())
            .find(|c| c.id.as_str() == id)
    }

    /// Combatants that are flying (neither wrecked nor destroyed).
    pub fn active_count(&self, team: Team) -> usize {
        let roster = match team {
            Team::Allied => &self.allied,
            Team::Enemy => &self.enemy,
        };
        roster.iter().filter(|c| c.is_active()).count()
    }
}

impl CombatantView {
    pub fn is_active(&self) -> bool {
        !self.is_destroyed && !self.is_wrecked
    }
}
