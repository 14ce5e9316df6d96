#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use riptide_core::config::SpawnConfig;
    use riptide_core::enums::{EnemyTier, TradeSide};

    use crate::classify::TierLadder;
    use crate::event::{TradeEvent, TradeEventError};

    fn default_ladder() -> TierLadder {
        TierLadder::from_config(&SpawnConfig::default())
    }

    fn trade(magnitude: f64) -> TradeEvent {
        TradeEvent {
            magnitude,
            sequence: 1,
            side: TradeSide::Buy,
        }
    }

    // ---- Classification ----

    #[test]
    fn test_classify_boundaries() {
        let ladder = default_ladder();
        let cases = [
            (0.0, EnemyTier::Shrimp),
            (999.99, EnemyTier::Shrimp),
            (1000.0, EnemyTier::Crab),
            (2499.99, EnemyTier::Crab),
            (2500.0, EnemyTier::Dolphin),
            (9999.99, EnemyTier::Dolphin),
            (10_000.0, EnemyTier::Whale),
            (9_999_999.0, EnemyTier::Whale),
        ];
        for (magnitude, expected) in cases {
            assert_eq!(
                ladder.classify(magnitude),
                expected,
                "magnitude {} should classify as {:?}",
                magnitude,
                expected
            );
        }
    }

    #[test]
    fn test_ladder_inserts_floor_rung() {
        let mut spawning = SpawnConfig::default();
        spawning.thresholds.remove(&EnemyTier::Shrimp);
        let ladder = TierLadder::from_config(&spawning);
        assert_eq!(
            ladder.classify(50.0),
            EnemyTier::Shrimp,
            "magnitudes below the lowest configured threshold should still classify"
        );
        assert_eq!(ladder.classify(1500.0), EnemyTier::Crab);
    }

    #[test]
    fn test_empty_thresholds_classify_as_default() {
        let mut spawning = SpawnConfig::default();
        spawning.thresholds.clear();
        let ladder = TierLadder::from_config(&spawning);
        assert_eq!(ladder.classify(0.0), EnemyTier::Shrimp);
        assert_eq!(ladder.classify(1_000_000.0), EnemyTier::Shrimp);
    }

    // ---- Validation ----

    #[test]
    fn test_validate_accepts_plausible_trades() {
        let cap = SpawnConfig::default().max_trade_magnitude;
        assert!(trade(0.0).validate(cap).is_ok());
        assert!(trade(123.45).validate(cap).is_ok());
        assert!(trade(cap).validate(cap).is_ok(), "cap itself is plausible");
    }

    #[test]
    fn test_validate_rejects_glitches() {
        let cap = SpawnConfig::default().max_trade_magnitude;
        assert_eq!(trade(f64::NAN).validate(cap), Err(TradeEventError::NotFinite));
        assert_eq!(
            trade(f64::INFINITY).validate(cap),
            Err(TradeEventError::NotFinite)
        );
        assert_eq!(trade(-1.0).validate(cap), Err(TradeEventError::Negative));
        assert_eq!(
            trade(cap + 1.0).validate(cap),
            Err(TradeEventError::Implausible(cap + 1.0))
        );
    }

    #[test]
    fn test_trade_deserializes_without_side() {
        let event: TradeEvent =
            serde_json::from_str(r#"{"magnitude": 500.0, "sequence": 7}"#).unwrap();
        assert_eq!(event.side, TradeSide::Buy, "side should default to buy");
        assert_eq!(event.sequence, 7);
    }

    proptest! {
        /// Bigger trades never spawn a smaller tier.
        #[test]
        fn classify_is_monotonic(a in 0.0..1e12f64, b in 0.0..1e12f64) {
            let ladder = default_ladder();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ladder.classify(lo) <= ladder.classify(hi));
        }
    }
}
