//! Per-tick snapshot types — everything a renderer needs to draw a frame.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Enemies sorted by entity id for stable ordering across ticks.
    pub enemies: Vec<EnemyView>,
    /// Live projectiles only; inactive pool slots are omitted.
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
    /// Set once the session ends; cleared on restart.
    pub result: Option<SessionResult>,
}

/// Player status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    pub dashing: bool,
    pub invulnerable: bool,
    /// Render opacity. Blinks during invulnerability.
    pub alpha: f32,
    pub tint: Tint,
}

/// Enemy status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    /// Entity id, stable for the enemy's lifetime.
    pub id: u32,
    pub tier: EnemyTier,
    pub position: Position,
    pub velocity: Velocity,
    pub health: i32,
    pub max_health: i32,
    /// False while the spawn-activation delay runs.
    pub active: bool,
    pub alpha: f32,
    pub tint: Tint,
}

/// Live projectile for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Pool slot entity id, stable while the projectile is live.
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub wave: u64,
    /// Points from wave-advance signals.
    pub wave_score: u64,
    /// Points from kills.
    pub kill_score: u64,
    pub total_score: u64,
    pub kills: KillTally,
}

/// Kill counts by tier plus the overall total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillTally {
    pub per_tier: BTreeMap<EnemyTier, u32>,
    pub total: u32,
}

impl KillTally {
    pub fn record(&mut self, tier: EnemyTier) {
        *self.per_tier.entry(tier).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn for_tier(&self, tier: EnemyTier) -> u32 {
        self.per_tier.get(&tier).copied().unwrap_or(0)
    }
}

/// Final tallies of a finished session, frozen at the moment of death.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub final_score: u64,
    pub final_wave: u64,
    pub kills: KillTally,
}
