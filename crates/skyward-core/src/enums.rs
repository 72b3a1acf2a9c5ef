//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side a combatant flies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Allied,
    Enemy,
}

/// Top-level battle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    /// Roster built and outcome computed, clock not yet running.
    #[default]
    Preparing,
    Active,
    Victory,
    Defeat,
}

/// Tactic chosen for the allied squadron before the battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tactic {
    #[default]
    Aggressive,
    Defensive,
}

/// Kind of a pre-computed combat event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatEventKind {
    Hit,
    Miss,
    Destroy,
    Escape,
}

/// AI behavior tag, informational for renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorState {
    /// No target; flying straight ahead.
    #[default]
    Idle,
    /// Chasing an acquired target.
    Pursuing,
    /// No target and being pulled back toward the squadron.
    Regrouping,
    /// Disengaging after an escape event.
    Escaping,
    /// Falling debris.
    Wrecked,
}

/// Visual kind of a transient object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileKind {
    /// Spawned by a scheduled hit/destroy event.
    Projectile,
    /// Gun fire from a combatant with a target in its cone.
    Tracer,
    /// Decoy dropped by a combatant under pursuit.
    Flare,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Allied => Team::Enemy,
            Team::Enemy => Team::Allied,
        }
    }
}

impl BattleStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, BattleStatus::Victory | BattleStatus::Defeat)
    }

    /// Terminal status implied by the outcome's victory flag.
    pub fn concluded(victory: bool) -> Self {
        if victory {
            BattleStatus::Victory
        } else {
            BattleStatus::Defeat
        }
    }
}
