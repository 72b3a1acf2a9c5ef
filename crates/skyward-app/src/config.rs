//! Session configuration loaded from TOML.
//!
//! ```toml
//! outcome_seed = 9
//!
//! [battle]
//! seed = 7
//! world_radius = 150.0
//!
//! [battle.mode]
//! type = "fixed_duration"
//! duration_ms = 45000
//! ```
//!
//! An optional `[setup]` table supplies the squadron, pilots and mission;
//! without it the CLI flies the demo roster.

use std::path::Path;

use serde::{Deserialize, Serialize};

use skyward_core::config::{BattleConfig, BattleMode};
use skyward_core::constants::BATTLE_DURATION_MS;
use skyward_core::roster::BattleSetup;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub battle: BattleConfig,
    /// Seed for the outcome dice. Falls back to the battle seed.
    pub outcome_seed: Option<u64>,
    pub setup: Option<BattleSetup>,
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded session config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.battle.validate()?;
        if let Some(setup) = &config.setup {
            setup.validate()?;
        }
        Ok(config)
    }

    pub fn outcome_seed(&self) -> u64 {
        self.outcome_seed.unwrap_or(self.battle.seed)
    }

    /// Length of the pre-computed schedule. Unbounded battles still get a
    /// finite schedule of the default length.
    pub fn schedule_duration_ms(&self) -> u64 {
        match self.battle.mode {
            BattleMode::FixedDuration { duration_ms } => duration_ms,
            BattleMode::Unbounded => BATTLE_DURATION_MS,
        }
    }
}
