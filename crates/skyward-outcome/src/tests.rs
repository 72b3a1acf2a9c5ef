#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use skyward_core::enums::{CombatEventKind, Tactic};
    use skyward_core::events::CombatEvent;
    use skyward_core::roster::{EnemyStats, FighterJet, JetStats, Mission, Pilot};
    use skyward_core::state::BattleResults;

    use crate::calculator::{OutcomeCalculator, SeededCalculator};
    use crate::scripted::ScriptedOutcome;
    use crate::tactics::get_profile;

    fn squadron(count: usize) -> Vec<FighterJet> {
        (0..count)
            .map(|i| FighterJet {
                id: format!("jet-{i}"),
                name: format!("Falcon {i}"),
                computed_stats: JetStats {
                    weapon_strength: 70.0,
                    speed: 65.0,
                    agility: 60.0,
                },
                assigned_pilot_id: Some(format!("pilot-{i}")),
            })
            .collect()
    }

    fn pilots(count: usize) -> Vec<Pilot> {
        (0..count)
            .map(|i| Pilot {
                id: format!("pilot-{i}"),
                name: format!("Pilot {i}"),
                intelligence: 70.0,
                endurance: 60.0,
            })
            .collect()
    }

    fn mission(enemy_count: usize) -> Mission {
        Mission {
            id: "m-7".to_string(),
            name: "Night Raid".to_string(),
            difficulty: 2,
            enemy_count,
            enemy_stats: EnemyStats {
                weapon_strength: 55.0,
                speed: 60.0,
                agility: 50.0,
                intelligence: 45.0,
                endurance: 40.0,
            },
            reward_credits: 800,
        }
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let calc = SeededCalculator::new(9);
        let a = calc.compute(&squadron(3), &pilots(3), &mission(4), Tactic::Aggressive);
        let b = calc.compute(&squadron(3), &pilots(3), &mission(4), Tactic::Aggressive);
        assert_eq!(a.events, b.events);
        assert_eq!(a.results, b.results);
    }

    #[test]
    fn test_schedule_sorted_and_within_duration() {
        for seed in 0..20 {
            let calc = SeededCalculator::new(seed).with_duration(20_000);
            let outcome = calc.compute(&squadron(4), &pilots(4), &mission(5), Tactic::Defensive);
            assert!(!outcome.events.is_empty());
            assert!(
                outcome
                    .events
                    .windows(2)
                    .all(|w| w[0].timestamp_ms <= w[1].timestamp_ms),
                "seed {seed}: schedule not sorted"
            );
            assert!(outcome.events.iter().all(|e| e.timestamp_ms < 20_000));
        }
    }

    /// Once destroyed or escaped, a combatant never acts or is targeted again.
    #[test]
    fn test_removed_combatants_stay_out_of_the_schedule() {
        for seed in 0..20 {
            let outcome = SeededCalculator::new(seed).compute(
                &squadron(3),
                &pilots(3),
                &mission(3),
                Tactic::Aggressive,
            );
            let mut gone = HashSet::new();
            for event in &outcome.events {
                assert!(!gone.contains(&event.attacker), "seed {seed}: {event:?}");
                assert!(!gone.contains(&event.target), "seed {seed}: {event:?}");
                if matches!(event.kind, CombatEventKind::Destroy | CombatEventKind::Escape) {
                    gone.insert(event.target.clone());
                }
            }
        }
    }

    #[test]
    fn test_results_agree_with_schedule() {
        for seed in 0..20 {
            let outcome = SeededCalculator::new(seed).compute(
                &squadron(3),
                &pilots(3),
                &mission(4),
                Tactic::Aggressive,
            );
            let destroyed = |prefix: &str| {
                outcome
                    .events
                    .iter()
                    .filter(|e| e.kind == CombatEventKind::Destroy)
                    .filter(|e| e.target.as_str().starts_with(prefix))
                    .count() as u32
            };
            let escaped = outcome
                .events
                .iter()
                .filter(|e| e.kind == CombatEventKind::Escape)
                .count() as u32;

            let r = &outcome.results;
            assert_eq!(r.destroyed_allied, destroyed("allied-"));
            assert_eq!(r.destroyed_enemy, destroyed("enemy-"));
            assert_eq!(r.enemies_escaped, escaped);
            assert_eq!(r.surviving_allied + r.destroyed_allied, 3);
            assert_eq!(
                r.surviving_enemy + r.destroyed_enemy + r.enemies_escaped,
                4
            );
            assert_eq!(r.pilot_stats.len(), 3);

            let kills: u32 = r.pilot_stats.iter().map(|p| p.kills).sum();
            assert_eq!(kills, r.destroyed_enemy);
        }
    }

    #[test]
    fn test_destroy_events_carry_zero_health() {
        let outcome =
            SeededCalculator::new(3).compute(&squadron(2), &pilots(2), &mission(2), Tactic::Aggressive);
        for event in outcome
            .events
            .iter()
            .filter(|e| e.kind == CombatEventKind::Destroy)
        {
            assert_eq!(event.resulting_health, Some(0.0));
            assert!(event.damage.unwrap_or_default() > 0.0);
        }
    }

    #[test]
    fn test_rewards_saturate_at_extreme_difficulty() {
        let mut extreme = mission(4);
        extreme.difficulty = u32::MAX;
        extreme.reward_credits = u32::MAX;

        let mut saw_kills = false;
        for seed in 0..10 {
            let calc = SeededCalculator::new(seed);
            let results = calc
                .compute(&squadron(4), &pilots(4), &extreme, Tactic::Aggressive)
                .results;
            if results.destroyed_enemy > 0 {
                saw_kills = true;
                assert_eq!(results.rewards.credits, u32::MAX);
            }
            if results.victory && results.destroyed_allied == 0 {
                assert_eq!(results.rewards.high_score_bonus, u32::MAX);
            }
        }
        assert!(saw_kills);
    }

    #[test]
    fn test_missing_pilots_are_not_reported() {
        let outcome = SeededCalculator::new(1).compute(&squadron(2), &[], &mission(1), Tactic::Defensive);
        assert!(outcome.results.pilot_stats.is_empty());
    }

    #[test]
    fn test_aggressive_fights_faster_than_defensive() {
        assert!(
            get_profile(Tactic::Aggressive).exchange_interval_ms
                < get_profile(Tactic::Defensive).exchange_interval_ms
        );
        let aggressive =
            SeededCalculator::new(5).compute(&squadron(3), &pilots(3), &mission(3), Tactic::Aggressive);
        let defensive =
            SeededCalculator::new(5).compute(&squadron(3), &pilots(3), &mission(3), Tactic::Defensive);
        assert_eq!(aggressive.events[0].timestamp_ms, 700);
        assert_eq!(defensive.events[0].timestamp_ms, 1_000);
    }

    #[test]
    fn test_scripted_outcome_replays_verbatim() {
        let events = vec![
            CombatEvent::new(500, CombatEventKind::Hit, "allied-0", "enemy-0").with_damage(20.0, 80.0),
            CombatEvent::new(1200, CombatEventKind::Destroy, "allied-0", "enemy-0")
                .with_damage(80.0, 0.0),
        ];
        let scripted = ScriptedOutcome::new(events.clone(), BattleResults::default()).with_victory(true);
        let outcome = scripted.compute(&squadron(1), &[], &mission(1), Tactic::Defensive);
        assert_eq!(outcome.events, events);
        assert!(outcome.results.victory);
    }
}
