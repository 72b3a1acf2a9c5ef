//! The outcome calculator contract and the default seeded dice model.
//!
//! `compute` runs once, before the battle clock starts. Its schedule is
//! sorted by timestamp and its victory flag is final.

use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyward_core::constants::{BATTLE_DURATION_MS, MAX_HEALTH};
use skyward_core::enums::{CombatEventKind, Tactic, Team};
use skyward_core::events::CombatEvent;
use skyward_core::roster::{FighterJet, Mission, Pilot};
use skyward_core::state::{BattleResults, PilotStats, Rewards};
use skyward_core::types::CombatantId;

use crate::tactics::{get_profile, TacticProfile};

/// Time before the end of the battle reserved for escapes (ms).
const ESCAPE_WINDOW_MS: u64 = 1_500;

/// Spacing between consecutive escape events (ms).
const ESCAPE_SPACING_MS: u64 = 50;

/// Surviving enemies below this health fraction break off and escape.
const ESCAPE_HEALTH_FRACTION: f64 = 0.4;

/// Base hit chance before stat and tactic modifiers.
const BASE_HIT_CHANCE: f64 = 0.55;

/// Pre-computed battle: the schedule plus final results.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Sorted ascending by `timestamp_ms`.
    pub events: Vec<CombatEvent>,
    pub results: BattleResults,
}

/// Anything that can decide a battle ahead of time.
pub trait OutcomeCalculator {
    fn compute(
        &self,
        squadron: &[FighterJet],
        pilots: &[Pilot],
        mission: &Mission,
        tactic: Tactic,
    ) -> Outcome;
}

/// Deterministic dice model: same seed and roster give the same battle.
#[derive(Debug, Clone)]
pub struct SeededCalculator {
    pub seed: u64,
    pub duration_ms: u64,
}

/// Combatant state while the dice are rolled.
struct Fighter {
    id: CombatantId,
    team: Team,
    health: f64,
    weapon_strength: f64,
    agility: f64,
    intelligence: f64,
    endurance: f64,
    pilot_id: Option<String>,
    kills: u32,
    damage_dealt: f64,
    escaped: bool,
}

impl Fighter {
    fn in_fight(&self) -> bool {
        self.health > 0.0 && !self.escaped
    }
}

impl SeededCalculator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            duration_ms: BATTLE_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl OutcomeCalculator for SeededCalculator {
    fn compute(
        &self,
        squadron: &[FighterJet],
        pilots: &[Pilot],
        mission: &Mission,
        tactic: Tactic,
    ) -> Outcome {
        let profile = get_profile(tactic);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut fighters = build_fighters(squadron, pilots, mission);
        let mut events = Vec::new();

        let fight_until = self.duration_ms.saturating_sub(ESCAPE_WINDOW_MS);
        let step = (profile.exchange_interval_ms / 2).max(1);
        let mut now = profile.exchange_interval_ms;
        let mut side = Team::Allied;

        while now < fight_until {
            match roll_exchange(&mut fighters, side, &profile, &mut rng, now) {
                Some(event) => events.push(event),
                None => break,
            }
            side = side.opponent();
            now += step;
        }

        schedule_escapes(&mut fighters, &mut events, self.duration_ms);

        let results = tally(&fighters, mission, self.duration_ms);
        tracing::debug!(
            events = events.len(),
            victory = results.victory,
            "outcome computed for mission {}",
            mission.id
        );

        Outcome { events, results }
    }
}

fn build_fighters(squadron: &[FighterJet], pilots: &[Pilot], mission: &Mission) -> Vec<Fighter> {
    let allied = squadron.iter().enumerate().map(|(i, jet)| {
        let (intelligence, endurance) = jet.pilot_attributes(pilots);
        Fighter {
            id: CombatantId::new(Team::Allied, i),
            team: Team::Allied,
            health: MAX_HEALTH,
            weapon_strength: jet.computed_stats.weapon_strength,
            agility: jet.computed_stats.agility,
            intelligence,
            endurance,
            pilot_id: jet.pilot(pilots).map(|p| p.id.clone()),
            kills: 0,
            damage_dealt: 0.0,
            escaped: false,
        }
    });

    let stats = mission.enemy_stats;
    let enemy = (0..mission.enemy_count).map(|i| Fighter {
        id: CombatantId::new(Team::Enemy, i),
        team: Team::Enemy,
        health: MAX_HEALTH,
        weapon_strength: stats.weapon_strength,
        agility: stats.agility,
        intelligence: stats.intelligence,
        endurance: stats.endurance,
        pilot_id: None,
        kills: 0,
        damage_dealt: 0.0,
        escaped: false,
    });

    allied.chain(enemy).collect()
}

/// Roll one attack by a random fighter on `side` against a random opponent.
/// Returns `None` once either side has nobody left in the fight.
fn roll_exchange(
    fighters: &mut [Fighter],
    side: Team,
    profile: &TacticProfile,
    rng: &mut ChaCha8Rng,
    now: u64,
) -> Option<CombatEvent> {
    let attacker_idx = (0..fighters.len())
        .filter(|&i| fighters[i].team == side && fighters[i].in_fight())
        .choose(rng)?;
    let target_idx = (0..fighters.len())
        .filter(|&i| fighters[i].team == side.opponent() && fighters[i].in_fight())
        .choose(rng)?;

    let attacker = &fighters[attacker_idx];
    let target = &fighters[target_idx];

    let modifier = match side {
        Team::Allied => profile.accuracy_bonus,
        Team::Enemy => -profile.evasion_bonus,
    };
    let hit_chance = (BASE_HIT_CHANCE + (attacker.intelligence - target.agility) / 200.0 + modifier)
        .clamp(0.1, 0.9);

    if !rng.gen_bool(hit_chance) {
        return Some(CombatEvent::new(
            now,
            CombatEventKind::Miss,
            attacker.id.clone(),
            target.id.clone(),
        ));
    }

    let factor = match side {
        Team::Allied => profile.damage_factor,
        Team::Enemy => 1.0,
    };
    let raw = attacker.weapon_strength * rng.gen_range(0.25..0.45) * factor;
    let damage = round_tenth((raw * (1.0 - target.endurance / 500.0)).max(1.0));

    let attacker_id = attacker.id.clone();
    let target_id = target.id.clone();
    let remaining = round_tenth((target.health - damage).max(0.0));

    fighters[target_idx].health = remaining;
    let attacker = &mut fighters[attacker_idx];
    attacker.damage_dealt += damage;

    let kind = if remaining <= 0.0 {
        attacker.kills += 1;
        CombatEventKind::Destroy
    } else {
        CombatEventKind::Hit
    };

    Some(CombatEvent::new(now, kind, attacker_id, target_id).with_damage(damage, remaining))
}

/// Badly damaged enemies still flying at the end break off.
fn schedule_escapes(fighters: &mut [Fighter], events: &mut Vec<CombatEvent>, duration_ms: u64) {
    let first = duration_ms.saturating_sub(ESCAPE_WINDOW_MS - 500);
    let last = duration_ms.saturating_sub(1);

    let fleeing = fighters.iter_mut().filter(|f| {
        f.team == Team::Enemy && f.in_fight() && f.health < MAX_HEALTH * ESCAPE_HEALTH_FRACTION
    });
    for (n, fighter) in fleeing.enumerate() {
        fighter.escaped = true;
        let at = (first + n as u64 * ESCAPE_SPACING_MS).min(last);
        events.push(CombatEvent::new(
            at,
            CombatEventKind::Escape,
            fighter.id.clone(),
            fighter.id.clone(),
        ));
    }
}

fn tally(fighters: &[Fighter], mission: &Mission, duration_ms: u64) -> BattleResults {
    let destroyed_allied = count(fighters, Team::Allied, |f| f.health <= 0.0);
    let surviving_allied = count(fighters, Team::Allied, |f| f.health > 0.0);
    let destroyed_enemy = count(fighters, Team::Enemy, |f| f.health <= 0.0);
    let enemies_escaped = count(fighters, Team::Enemy, |f| f.escaped);
    let surviving_enemy = count(fighters, Team::Enemy, Fighter::in_fight);

    let victory =
        surviving_allied > 0 && (surviving_enemy == 0 || destroyed_enemy > destroyed_allied);

    let difficulty = mission.difficulty.max(1);
    let rewards = Rewards {
        credits: destroyed_enemy
            .saturating_mul(100)
            .saturating_mul(difficulty)
            .saturating_add(if victory { mission.reward_credits } else { 0 }),
        research_points: destroyed_enemy
            .saturating_mul(10)
            .saturating_add(if victory { 25 } else { 0 }),
        high_score_bonus: if victory && destroyed_allied == 0 {
            difficulty.saturating_mul(250)
        } else {
            0
        },
    };

    let pilot_stats = fighters
        .iter()
        .filter(|f| f.team == Team::Allied)
        .filter_map(|f| {
            f.pilot_id.as_ref().map(|pilot_id| PilotStats {
                pilot_id: pilot_id.clone(),
                kills: f.kills,
                damage: round_tenth(f.damage_dealt),
                survived: f.health > 0.0,
            })
        })
        .collect();

    BattleResults {
        victory,
        surviving_allied,
        destroyed_allied,
        surviving_enemy,
        destroyed_enemy,
        enemies_escaped,
        duration_ms,
        rewards,
        pilot_stats,
    }
}

fn count(fighters: &[Fighter], team: Team, pred: impl Fn(&Fighter) -> bool) -> u32 {
    fighters
        .iter()
        .filter(|f| f.team == team && pred(f))
        .count() as u32
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
