//! Built-in roster used when no setup is configured.

use skyward_core::enums::Tactic;
use skyward_core::roster::{BattleSetup, EnemyStats, FighterJet, JetStats, Mission, Pilot};

const CALLSIGNS: [&str; 8] = [
    "Falcon", "Merlin", "Kestrel", "Osprey", "Harrier", "Condor", "Shrike", "Peregrine",
];

/// A squadron of `allied` jets, one pilot each, against `enemies` bandits.
pub fn demo_setup(allied: usize, enemies: usize, tactic: Tactic) -> BattleSetup {
    let squadron = (0..allied)
        .map(|i| FighterJet {
            id: format!("jet-{i}"),
            name: format!("{} {}", CALLSIGNS[i % CALLSIGNS.len()], i / CALLSIGNS.len() + 1),
            computed_stats: JetStats {
                weapon_strength: 60.0 + (i % 3) as f64 * 5.0,
                speed: 65.0,
                agility: 55.0 + (i % 2) as f64 * 10.0,
            },
            assigned_pilot_id: Some(format!("pilot-{i}")),
        })
        .collect();

    let pilots = (0..allied)
        .map(|i| Pilot {
            id: format!("pilot-{i}"),
            name: format!("{} Lead", CALLSIGNS[i % CALLSIGNS.len()]),
            intelligence: 55.0 + (i % 4) as f64 * 5.0,
            endurance: 50.0 + (i % 3) as f64 * 5.0,
        })
        .collect();

    let mission = Mission {
        id: "demo".to_string(),
        name: "Training Sortie".to_string(),
        difficulty: 2,
        enemy_count: enemies,
        enemy_stats: EnemyStats {
            weapon_strength: 55.0,
            speed: 60.0,
            agility: 50.0,
            intelligence: 50.0,
            endurance: 45.0,
        },
        reward_credits: 500,
    };

    BattleSetup {
        squadron,
        pilots,
        mission: Some(mission),
        tactic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_setup_is_valid() {
        let setup = demo_setup(4, 3, Tactic::Aggressive);
        let mission = setup.validate().unwrap();
        assert_eq!(mission.enemy_count, 3);
        assert_eq!(setup.squadron.len(), 4);
        for jet in &setup.squadron {
            assert!(jet.pilot(&setup.pilots).is_some(), "{} has no pilot", jet.id);
        }
    }

    #[test]
    fn test_demo_names_wrap() {
        let setup = demo_setup(10, 1, Tactic::Defensive);
        assert_eq!(setup.squadron[0].name, "Falcon 1");
        assert_eq!(setup.squadron[8].name, "Falcon 2");
    }
}
