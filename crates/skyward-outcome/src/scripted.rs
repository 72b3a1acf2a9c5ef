//! A fixed, pre-recorded outcome.
//!
//! Replays a known schedule regardless of roster or tactic. Used for
//! replaying recorded battles and for driving the simulation in tests.

use skyward_core::enums::Tactic;
use skyward_core::events::CombatEvent;
use skyward_core::roster::{FighterJet, Mission, Pilot};
use skyward_core::state::BattleResults;

use crate::calculator::{Outcome, OutcomeCalculator};

#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcome {
    pub events: Vec<CombatEvent>,
    pub results: BattleResults,
}

impl ScriptedOutcome {
    pub fn new(events: Vec<CombatEvent>, results: BattleResults) -> Self {
        Self { events, results }
    }

    /// Same schedule with the victory flag forced.
    pub fn with_victory(mut self, victory: bool) -> Self {
        self.results.victory = victory;
        self
    }
}

impl OutcomeCalculator for ScriptedOutcome {
    fn compute(
        &self,
        _squadron: &[FighterJet],
        _pilots: &[Pilot],
        _mission: &Mission,
        _tactic: Tactic,
    ) -> Outcome {
        Outcome {
            events: self.events.clone(),
            results: self.results.clone(),
        }
    }
}
