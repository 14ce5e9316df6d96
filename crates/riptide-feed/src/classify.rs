//! Trade magnitude to enemy tier mapping.

use riptide_core::config::SpawnConfig;
use riptide_core::enums::EnemyTier;

/// Threshold ladder built once from config. Rungs are (tier, minimum
/// magnitude) in ascending tier order, and the bottom rung always starts
/// at zero so every valid trade maps to some tier.
#[derive(Debug, Clone)]
pub struct TierLadder {
    rungs: Vec<(EnemyTier, f64)>,
}

impl TierLadder {
    pub fn from_config(spawning: &SpawnConfig) -> Self {
        let mut rungs: Vec<(EnemyTier, f64)> = EnemyTier::ALL
            .iter()
            .filter_map(|&tier| spawning.thresholds.get(&tier).map(|&min| (tier, min)))
            .collect();
        match rungs.first() {
            Some(&(_, min)) if min <= 0.0 => {}
            _ => rungs.insert(0, (EnemyTier::default(), 0.0)),
        }
        Self { rungs }
    }

    /// The largest tier whose threshold the magnitude meets. Boundaries are
    /// inclusive: a trade exactly at a threshold spawns that tier.
    pub fn classify(&self, magnitude: f64) -> EnemyTier {
        self.rungs
            .iter()
            .rev()
            .find(|&&(_, min)| magnitude >= min)
            .map(|&(tier, _)| tier)
            .unwrap_or_default()
    }
}
