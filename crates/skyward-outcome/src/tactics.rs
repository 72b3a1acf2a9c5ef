//! Tactic-specific modifiers.
//!
//! Consolidates the per-tactic parameters for the outcome calculator.

use skyward_core::enums::Tactic;

/// Combat modifiers applied to the allied squadron for a tactic.
pub struct TacticProfile {
    /// Time between exchanges of fire (ms).
    pub exchange_interval_ms: u64,
    /// Multiplier on allied damage.
    pub damage_factor: f64,
    /// Added to allied hit chance.
    pub accuracy_bonus: f64,
    /// Subtracted from enemy hit chance.
    pub evasion_bonus: f64,
}

/// Get the modifiers for a given tactic.
pub fn get_profile(tactic: Tactic) -> TacticProfile {
    match tactic {
        // Close fast, trade hits often.
        Tactic::Aggressive => TacticProfile {
            exchange_interval_ms: 700,
            damage_factor: 1.2,
            accuracy_bonus: 0.05,
            evasion_bonus: -0.05,
        },
        // Keep distance, fewer and safer exchanges.
        Tactic::Defensive => TacticProfile {
            exchange_interval_ms: 1_000,
            damage_factor: 0.9,
            accuracy_bonus: -0.05,
            evasion_bonus: 0.1,
        },
    }
}
