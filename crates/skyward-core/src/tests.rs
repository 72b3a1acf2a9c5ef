#[cfg(test)]
mod tests {
    use glam::{DQuat, DVec3};

    use crate::commands::BattleCommand;
    use crate::components::{Lifecycle, Projectile};
    use crate::config::{BattleConfig, BattleMode};
    use crate::enums::*;
    use crate::error::SetupError;
    use crate::events::{CombatEvent, Notice};
    use crate::roster::{BattleSetup, EnemyStats, FighterJet, JetStats, Mission, Pilot};
    use crate::state::BattleState;
    use crate::types::{CombatantId, Orientation, Position, SimTime};

    fn jet(id: &str, pilot: Option<&str>) -> FighterJet {
        FighterJet {
            id: id.to_string(),
            name: id.to_uppercase(),
            computed_stats: JetStats {
                weapon_strength: 60.0,
                speed: 70.0,
                agility: 55.0,
            },
            assigned_pilot_id: pilot.map(str::to_string),
        }
    }

    fn mission(enemy_count: usize) -> Mission {
        Mission {
            id: "m-1".to_string(),
            name: "Border Patrol".to_string(),
            difficulty: 2,
            enemy_count,
            enemy_stats: EnemyStats::default(),
            reward_credits: 500,
        }
    }

    #[test]
    fn test_combatant_id_format() {
        assert_eq!(CombatantId::new(Team::Allied, 0).as_str(), "allied-0");
        assert_eq!(CombatantId::new(Team::Enemy, 12).to_string(), "enemy-12");
    }

    /// Ids serialize as bare strings so schedules stay readable.
    #[test]
    fn test_combatant_id_serializes_transparently() {
        let json = serde_json::to_string(&CombatantId::from("enemy-1")).unwrap();
        assert_eq!(json, "\"enemy-1\"");
    }

    #[test]
    fn test_combat_event_serde_shape() {
        let event = CombatEvent::new(1200, CombatEventKind::Destroy, "allied-0", "enemy-0")
            .with_damage(35.0, 0.0);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"destroy\""), "got {json}");
        let back: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);

        // Optional damage fields are omitted for misses.
        let miss = CombatEvent::new(800, CombatEventKind::Miss, "enemy-1", "allied-2");
        let json = serde_json::to_string(&miss).unwrap();
        assert!(!json.contains("damage"));
    }

    #[test]
    fn test_only_hits_and_destroys_spawn_projectiles() {
        let kinds = [
            (CombatEventKind::Hit, true),
            (CombatEventKind::Destroy, true),
            (CombatEventKind::Miss, false),
            (CombatEventKind::Escape, false),
        ];
        for (kind, expected) in kinds {
            let event = CombatEvent::new(0, kind, "a", "b");
            assert_eq!(event.spawns_projectile(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_command_and_notice_are_tagged() {
        let json = serde_json::to_string(&BattleCommand::SetTimeScale { scale: 2.0 }).unwrap();
        assert_eq!(json, r#"{"type":"SetTimeScale","scale":2.0}"#);

        let notice = Notice::BattleConcluded {
            status: BattleStatus::Victory,
            forced: false,
        };
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.starts_with(r#"{"type":"BattleConcluded""#), "got {json}");
    }

    #[test]
    fn test_default_snapshot_is_preparing_and_small() {
        let snapshot = BattleState::default();
        assert_eq!(snapshot.status, BattleStatus::Preparing);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BattleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, snapshot.time);
        assert!(json.len() < 1024, "empty snapshot was {} bytes", json.len());
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..75 {
            time.advance(16);
        }
        assert_eq!(time.tick, 75);
        assert_eq!(time.elapsed_ms, 1200);
    }

    #[test]
    fn test_orientation_identity_faces_plus_z() {
        let forward = Orientation::default().forward();
        assert!((forward - DVec3::Z).length() < 1e-12);

        let yawed = Orientation(DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2));
        assert!((yawed.forward() - DVec3::X).length() < 1e-12);

        let slight = Orientation(DQuat::from_rotation_y(0.5));
        let [x, y, z] = slight.euler();
        assert!(x.abs() < 1e-9 && z.abs() < 1e-9);
        assert!((y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_position_geometry() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.radius() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_lifecycle_phases_exclusive() {
        let phases = [
            Lifecycle::Active,
            Lifecycle::Wrecked {
                destroyed_at_ms: 10,
                spin: DVec3::ONE,
            },
            Lifecycle::PendingRespawn {
                destroyed_at_ms: 10,
            },
        ];
        for phase in phases {
            let flags = [
                phase.is_active(),
                phase.is_wrecked(),
                phase.is_pending_respawn(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{phase:?}");
            assert_eq!(phase.destroyed_at_ms().is_some(), !phase.is_active());
        }
    }

    #[test]
    fn test_projectile_expiry() {
        let projectile = Projectile {
            id: 1,
            kind: ProjectileKind::Projectile,
            color: 0,
            lifespan_ms: 2000,
            created_at_ms: 1200,
        };
        assert!(!projectile.is_expired(3199));
        assert!(projectile.is_expired(3200));
        assert_eq!(projectile.age_ms(1000), 0);
    }

    #[test]
    fn test_battle_mode_policies() {
        let fixed = BattleMode::FixedDuration { duration_ms: 30_000 };
        assert!(!fixed.time_expired(29_984));
        assert!(fixed.time_expired(30_000));
        assert!(!fixed.recycles_wreckage());

        let unbounded = BattleMode::Unbounded;
        assert!(!unbounded.time_expired(u64::MAX));
        assert!(unbounded.recycles_wreckage());
    }

    #[test]
    fn test_config_validation() {
        assert!(BattleConfig::default().validate().is_ok());

        let config = BattleConfig {
            tick_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));

        let config = BattleConfig {
            world_radius: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));

        let config = BattleConfig {
            gravity: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_mode_is_internally_tagged() {
        let json = r#"{"mode":{"type":"unbounded"},"world_radius":90.0}"#;
        let config: BattleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, BattleMode::Unbounded);
        assert_eq!(config.world_radius, 90.0);
        // Unspecified fields fall back to defaults.
        assert_eq!(config.tick_ms, 16);
    }

    #[test]
    fn test_setup_validation() {
        let ok = BattleSetup {
            squadron: vec![jet("j1", None)],
            pilots: vec![],
            mission: Some(mission(2)),
            tactic: Tactic::Aggressive,
        };
        assert!(ok.validate().is_ok());

        let no_mission = BattleSetup {
            mission: None,
            ..ok.clone()
        };
        assert_eq!(no_mission.validate().unwrap_err(), SetupError::MissingMission);

        let empty = BattleSetup {
            squadron: vec![],
            ..ok.clone()
        };
        assert_eq!(empty.validate().unwrap_err(), SetupError::EmptyRoster);

        let no_enemies = BattleSetup {
            mission: Some(mission(0)),
            ..ok
        };
        assert!(matches!(
            no_enemies.validate(),
            Err(SetupError::NoEnemies(_))
        ));
    }

    #[test]
    fn test_pilot_attributes_fall_back_to_defaults() {
        let pilots = vec![Pilot {
            id: "p1".to_string(),
            name: "Maverick".to_string(),
            intelligence: 80.0,
            endurance: 65.0,
        }];
        assert_eq!(jet("j1", Some("p1")).pilot_attributes(&pilots), (80.0, 65.0));
        assert_eq!(jet("j2", Some("ghost")).pilot_attributes(&pilots), (50.0, 50.0));
        assert_eq!(jet("j3", None).pilot_attributes(&pilots), (50.0, 50.0));
    }
}
