//! Roster input: the squadron, its pilots, and the mission being flown.
//!
//! These are owned by the wider game; a battle only reads them once at setup.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PILOT_ATTRIBUTE;
use crate::enums::Tactic;
use crate::error::{Result, SetupError};

/// Airframe stats after upgrades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JetStats {
    pub weapon_strength: f64,
    pub speed: f64,
    pub agility: f64,
}

/// An allied fighter in the player's squadron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterJet {
    pub id: String,
    pub name: String,
    pub computed_stats: JetStats,
    pub assigned_pilot_id: Option<String>,
}

/// A pilot who can be assigned to a jet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilot {
    pub id: String,
    pub name: String,
    pub intelligence: f64,
    pub endurance: f64,
}

/// Stats shared by every enemy in a mission, scaled by difficulty upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub weapon_strength: f64,
    pub speed: f64,
    pub agility: f64,
    pub intelligence: f64,
    pub endurance: f64,
}

/// The mission being flown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    /// 1 (easy) and up.
    pub difficulty: u32,
    pub enemy_count: usize,
    pub enemy_stats: EnemyStats,
    /// Credits awarded on victory, before kill bonuses.
    pub reward_credits: u32,
}

/// Everything needed to stand up a battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSetup {
    pub squadron: Vec<FighterJet>,
    pub pilots: Vec<Pilot>,
    pub mission: Option<Mission>,
    pub tactic: Tactic,
}

impl FighterJet {
    /// The pilot flying this jet, if assigned and on file.
    pub fn pilot<'a>(&self, pilots: &'a [Pilot]) -> Option<&'a Pilot> {
        let pilot_id = self.assigned_pilot_id.as_deref()?;
        pilots.iter().find(|p| p.id == pilot_id)
    }

    /// `(intelligence, endurance)` of the assigned pilot, or the defaults.
    pub fn pilot_attributes(&self, pilots: &[Pilot]) -> (f64, f64) {
        self.pilot(pilots)
            .map(|p| (p.intelligence, p.endurance))
            .unwrap_or((DEFAULT_PILOT_ATTRIBUTE, DEFAULT_PILOT_ATTRIBUTE))
    }
}

impl BattleSetup {
    /// Check the preconditions for a battle and return the mission.
    pub fn validate(&self) -> Result<&Mission> {
        let mission = self.mission.as_ref().ok_or(SetupError::MissingMission)?;
        if self.squadron.is_empty() {
            return Err(SetupError::EmptyRoster);
        }
        if mission.enemy_count == 0 {
            return Err(SetupError::NoEnemies(mission.id.clone()));
        }

        for jet in &self.squadron {
            let s = &jet.computed_stats;
            check_stats(
                &jet.id,
                &[
                    ("weapon_strength", s.weapon_strength),
                    ("speed", s.speed),
                    ("agility", s.agility),
                ],
            )?;
        }
        for pilot in &self.pilots {
            check_stats(
                &pilot.id,
                &[
                    ("intelligence", pilot.intelligence),
                    ("endurance", pilot.endurance),
                ],
            )?;
        }
        let e = &mission.enemy_stats;
        check_stats(
            &mission.id,
            &[
                ("weapon_strength", e.weapon_strength),
                ("speed", e.speed),
                ("agility", e.agility),
                ("intelligence", e.intelligence),
                ("endurance", e.endurance),
            ],
        )?;

        Ok(mission)
    }
}

fn check_stats(owner: &str, stats: &[(&'static str, f64)]) -> Result<()> {
    match stats.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
        Some(&(stat, value)) => Err(SetupError::InvalidStat {
            owner: owner.to_string(),
            stat,
            value,
        }),
        None => Ok(()),
    }
}
