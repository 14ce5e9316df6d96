#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, GameConfig, CONFIG_VERSION};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::KillTally;
    use crate::types::{ticks_from_ms, Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_tier_serde() {
        for v in EnemyTier::ALL {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyTier = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_tier_serializes_lowercase() {
        let json = serde_json::to_string(&EnemyTier::Whale).unwrap();
        assert_eq!(json, "\"whale\"", "tier names should be lowercase on the wire");
    }

    #[test]
    fn test_enemy_tier_ordering() {
        assert!(EnemyTier::Shrimp < EnemyTier::Crab);
        assert!(EnemyTier::Crab < EnemyTier::Dolphin);
        assert!(EnemyTier::Dolphin < EnemyTier::Whale);
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Loading, GamePhase::Playing, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_tint_serde() {
        let variants = vec![Tint::None, Tint::Inert, Tint::Hurt, Tint::Heal, Tint::Dash];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Tint = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::SetMovement { x: 1.0, y: 0.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(
            json.contains("\"type\":\"SetMovement\""),
            "commands should be internally tagged, got {}",
            json
        );
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::SetMovement { x, y } if x == 1.0 && y == 0.0));
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = GameEvent::EnemySpawned {
            tier: EnemyTier::Dolphin,
            magnitude: 3200.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_ticks_from_ms_values() {
        // 60Hz: one tick per 16.67ms, durations round up.
        assert_eq!(ticks_from_ms(0), 0);
        assert_eq!(ticks_from_ms(1), 1, "sub-tick durations should round up to 1");
        assert_eq!(ticks_from_ms(100), 6);
        assert_eq!(ticks_from_ms(120), 8);
        assert_eq!(ticks_from_ms(210), 13);
        assert_eq!(ticks_from_ms(220), 14);
        assert_eq!(ticks_from_ms(250), 15);
        assert_eq!(ticks_from_ms(400), 24);
        assert_eq!(ticks_from_ms(500), 30);
        assert_eq!(ticks_from_ms(800), 48);
        assert_eq!(ticks_from_ms(1200), 72);
        assert_eq!(ticks_from_ms(1400), 84);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-9,
            "60 ticks at 60Hz = 1 second, got {}",
            time.elapsed_secs
        );
    }

    #[test]
    fn test_position_helpers() {
        let a = Position::new(100.0, 100.0);
        let b = Position::new(103.0, 104.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6, "3-4-5 triangle");

        let dir = a.direction_to(&b);
        assert!((dir.length() - 1.0).abs() < 1e-6, "direction should be unit length");
        assert_eq!(
            a.direction_to(&a),
            glam::Vec2::ZERO,
            "direction to self should be zero"
        );
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.enemies.len(), 4, "all four tiers should have stats");
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = GameConfig::from_json(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_partial_config_merges_defaults() {
        let config = GameConfig::from_json(r#"{"player": {"speed": 400.0}}"#).unwrap();
        assert_eq!(config.player.speed, 400.0);
        assert_eq!(config.player.max_health, 13, "unset fields keep defaults");
        assert_eq!(config.enemies.len(), 4, "unset enemy table keeps defaults");
        assert_eq!(config.world.width, 1500.0);
    }

    #[test]
    fn test_config_rejects_wrong_version() {
        let err = GameConfig::from_json(r#"{"version": 99}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_config_rejects_unordered_thresholds() {
        let json = r#"{"spawning": {"thresholds": {"shrimp": 0.0, "crab": 2500.0, "dolphin": 1000.0, "whale": 10000.0}}}"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(
            matches!(err, ConfigError::ThresholdOrder(EnemyTier::Crab, EnemyTier::Dolphin)),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_config_rejects_tiny_world() {
        let err = GameConfig::from_json(r#"{"world": {"width": 80.0, "height": 900.0}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorld(_)));
    }

    #[test]
    fn test_config_rejects_unknown_tier_key() {
        let err = GameConfig::from_json(r#"{"enemies": {"kraken": {"hp": 99}}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_tier_stats_fall_back_to_defaults() {
        let mut config = GameConfig::default();
        config.enemies.remove(&EnemyTier::Whale);
        let stats = config.enemy(EnemyTier::Whale);
        assert_eq!(stats.hp, 3, "missing tier should get default stats");
        let shrimp = config.enemy(EnemyTier::Shrimp);
        assert_eq!(shrimp.hp, 3);
        let whale_real = GameConfig::default().enemy(EnemyTier::Whale);
        assert_eq!(whale_real.hp, 25);
        assert_eq!(whale_real.score_value, 350);
    }

    #[test]
    fn test_kill_tally() {
        let mut tally = KillTally::default();
        tally.record(EnemyTier::Shrimp);
        tally.record(EnemyTier::Shrimp);
        tally.record(EnemyTier::Whale);
        assert_eq!(tally.for_tier(EnemyTier::Shrimp), 2);
        assert_eq!(tally.for_tier(EnemyTier::Whale), 1);
        assert_eq!(tally.for_tier(EnemyTier::Crab), 0);
        assert_eq!(tally.total, 3);
    }
}
