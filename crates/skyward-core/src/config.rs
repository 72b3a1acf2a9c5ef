//! Battle configuration: every tunable the loop recognises, in one struct.
//!
//! Passed to the engine at construction; no system reads module-level state.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{Result, SetupError};

/// How a battle ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleMode {
    /// Ends once `duration_ms` of simulated time has elapsed. Destroyed
    /// combatants stay down.
    FixedDuration { duration_ms: u64 },
    /// Never ends on its own; only a force-end request concludes it.
    /// Wreckage is recycled into fresh combatants indefinitely.
    Unbounded,
}

/// Complete configuration for one battle session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// RNG seed for determinism. Same seed and schedule = same battle.
    pub seed: u64,
    pub tick_ms: u64,
    pub mode: BattleMode,
    pub world_radius: f64,
    pub cruise_speed: f64,
    /// Radians per second.
    pub turn_rate: f64,
    /// Per second.
    pub velocity_blend_rate: f64,
    pub cohesion_radius: f64,
    pub cohesion_strength: f64,
    pub max_cohesion_pull: f64,
    pub avoidance_radius: f64,
    pub avoidance_strength: f64,
    pub max_avoidance_push: f64,
    pub wreck_drag: f64,
    pub gravity: f64,
    pub respawn_delay_ms: u64,
}

impl Default for BattleMode {
    fn default() -> Self {
        BattleMode::FixedDuration {
            duration_ms: BATTLE_DURATION_MS,
        }
    }
}

impl BattleMode {
    /// Whether elapsed time alone ends the battle.
    pub fn time_expired(&self, elapsed_ms: u64) -> bool {
        match *self {
            BattleMode::FixedDuration { duration_ms } => elapsed_ms >= duration_ms,
            BattleMode::Unbounded => false,
        }
    }

    /// Whether destroyed combatants come back after the respawn delay.
    pub fn recycles_wreckage(&self) -> bool {
        matches!(self, BattleMode::Unbounded)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_ms: TICK_MS,
            mode: BattleMode::default(),
            world_radius: WORLD_RADIUS,
            cruise_speed: CRUISE_SPEED,
            turn_rate: TURN_RATE,
            velocity_blend_rate: VELOCITY_BLEND_RATE,
            cohesion_radius: COHESION_RADIUS,
            cohesion_strength: COHESION_STRENGTH,
            max_cohesion_pull: MAX_COHESION_PULL,
            avoidance_radius: AVOIDANCE_RADIUS,
            avoidance_strength: AVOIDANCE_STRENGTH,
            max_avoidance_push: MAX_AVOIDANCE_PUSH,
            wreck_drag: WRECK_DRAG,
            gravity: GRAVITY,
            respawn_delay_ms: RESPAWN_DELAY_MS,
        }
    }
}

impl BattleConfig {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        self.tick_ms as f64 / 1000.0
    }

    /// Reject values that would make the integrator misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(SetupError::InvalidConfig("tick_ms must be positive".into()));
        }
        if let BattleMode::FixedDuration { duration_ms: 0 } = self.mode {
            return Err(SetupError::InvalidConfig(
                "fixed-duration battles need a positive duration".into(),
            ));
        }

        let positive = [
            ("world_radius", self.world_radius),
            ("cruise_speed", self.cruise_speed),
            ("turn_rate", self.turn_rate),
            ("velocity_blend_rate", self.velocity_blend_rate),
            ("cohesion_radius", self.cohesion_radius),
            ("avoidance_radius", self.avoidance_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SetupError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let non_negative = [
            ("cohesion_strength", self.cohesion_strength),
            ("max_cohesion_pull", self.max_cohesion_pull),
            ("avoidance_strength", self.avoidance_strength),
            ("max_avoidance_push", self.max_avoidance_push),
            ("wreck_drag", self.wreck_drag),
            ("gravity", self.gravity),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SetupError::InvalidConfig(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}
