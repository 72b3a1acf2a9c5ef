//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::CombatantId;

/// Identity of a combatant. Present on every allied and enemy airframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: CombatantId,
    pub team: Team,
    /// Position in the owning roster; restores roster order after queries.
    pub roster_index: usize,
    /// Id of the roster record this combatant was built from (empty for enemies).
    pub roster_ref: String,
}

/// Displayed health. Cosmetic: outcomes come from the schedule, not from this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Combat attributes carried for display and for the outcome calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub weapon_strength: f64,
    pub speed: f64,
    pub agility: f64,
    pub intelligence: f64,
    pub endurance: f64,
}

/// Current target, by id. Re-validated every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Targeting {
    pub target: Option<CombatantId>,
}

/// Lifecycle phase. The three phases are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Flying and fighting.
    #[default]
    Active,
    /// Falling, spinning debris.
    Wrecked {
        destroyed_at_ms: u64,
        /// Angular velocity (radians per second about each axis).
        spin: DVec3,
    },
    /// Wreckage left the arena; waiting for the respawn timer.
    PendingRespawn { destroyed_at_ms: u64 },
}

/// AI behavior tag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Behavior {
    pub state: BehaviorState,
}

/// Number of `destroy` events credited to this combatant.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KillCount(pub u32);

/// Gun and flare cooldowns (ms remaining until each may fire again).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeaponTimers {
    pub gun_cooldown_ms: u64,
    pub flare_cooldown_ms: u64,
}

/// A transient visual object: projectile, tracer or flare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub kind: ProjectileKind,
    pub color: u32,
    pub lifespan_ms: u64,
    pub created_at_ms: u64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }
}

impl Lifecycle {
    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    pub fn is_wrecked(&self) -> bool {
        matches!(self, Lifecycle::Wrecked { .. })
    }

    pub fn is_pending_respawn(&self) -> bool {
        matches!(self, Lifecycle::PendingRespawn { .. })
    }

    /// Time of destruction, for either non-active phase.
    pub fn destroyed_at_ms(&self) -> Option<u64> {
        match *self {
            Lifecycle::Active => None,
            Lifecycle::Wrecked {
                destroyed_at_ms, ..
            }
            | Lifecycle::PendingRespawn { destroyed_at_ms } => Some(destroyed_at_ms),
        }
    }
}

impl Projectile {
    /// Age at `now_ms`, saturating for objects created in the future.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) >= self.lifespan_ms
    }
}
