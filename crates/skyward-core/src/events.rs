//! Scheduled combat events and the per-tick notices emitted for presentation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::CombatantId;

/// A pre-determined combat occurrence produced by the outcome calculator.
/// Never mutated once scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Milliseconds from battle start.
    pub timestamp_ms: u64,
    pub kind: CombatEventKind,
    pub attacker: CombatantId,
    pub target: CombatantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting_health: Option<f64>,
}

/// Something that happened during a tick, for event logs and effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notice {
    /// A scheduled event was executed.
    EventExecuted { event: CombatEvent },
    /// A combatant entered the wreckage phase.
    CombatantDestroyed {
        id: CombatantId,
        by: CombatantId,
        position: [f64; 3],
    },
    /// A combatant was recycled back into the fight.
    CombatantRespawned { id: CombatantId, position: [f64; 3] },
    /// The battle reached a terminal status.
    BattleConcluded { status: BattleStatus, forced: bool },
}

impl CombatEvent {
    pub fn new(
        timestamp_ms: u64,
        kind: CombatEventKind,
        attacker: impl Into<CombatantId>,
        target: impl Into<CombatantId>,
    ) -> Self {
        Self {
            timestamp_ms,
            kind,
            attacker: attacker.into(),
            target: target.into(),
            damage: None,
            resulting_health: None,
        }
    }

    /// Attach damage figures (hit/destroy events).
    pub fn with_damage(mut self, damage: f64, resulting_health: f64) -> Self {
        self.damage = Some(damage);
        self.resulting_health = Some(resulting_health);
        self
    }

    /// Whether this event spawns a projectile when executed.
    pub fn spawns_projectile(&self) -> bool {
        matches!(self.kind, CombatEventKind::Hit | CombatEventKind::Destroy)
    }
}
