//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy size class, ordered smallest to largest. Trade magnitude maps to
/// a tier through the spawn thresholds in `SpawnConfig`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EnemyTier {
    #[default]
    Shrimp,
    Crab,
    Dolphin,
    Whale,
}

impl EnemyTier {
    /// All tiers in ascending order.
    pub const ALL: [EnemyTier; 4] = [
        EnemyTier::Shrimp,
        EnemyTier::Crab,
        EnemyTier::Dolphin,
        EnemyTier::Whale,
    ];
}

/// Direction of a market trade. Carried through to spawn events for
/// presentation; both sides spawn identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    #[default]
    Buy,
    Sell,
}

/// Cardinal facing for the player sprite, derived from aim direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine constructed, no session started yet.
    #[default]
    Loading,
    /// Session live: systems run, trades spawn enemies.
    Playing,
    /// Player defeated. World frozen until restart.
    GameOver,
}

/// Sprite tint cue for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    None,
    /// Enemy not yet activated after spawn.
    Inert,
    /// Damage taken recently.
    Hurt,
    /// Healing received recently.
    Heal,
    /// Dash active.
    Dash,
}
