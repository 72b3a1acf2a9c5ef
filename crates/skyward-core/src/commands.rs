//! Commands sent to a running battle.
//!
//! Commands are queued and applied at the next tick boundary, never mid-tick.

use serde::{Deserialize, Serialize};

/// All external requests a battle session accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleCommand {
    /// Start the battle clock (`preparing` → `active`).
    Start,
    /// Freeze the clock without touching state.
    Pause,
    /// Unfreeze the clock.
    Resume,
    /// Conclude the battle now, with the precomputed victory flag.
    ForceEnd,
    /// Real-time pacing for the tick driver (1.0 = normal).
    SetTimeScale { scale: f64 },
}
