//! Events emitted by the simulation for audio and UI feedback.
//!
//! Each snapshot carries the events produced during its tick, then the
//! engine's internal buffer is cleared. Consumers that skip a snapshot
//! miss its events.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// One-shot gameplay events for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A session started (fresh or restart).
    SessionStarted,
    /// The wave counter advanced.
    WaveStarted { wave: u64 },
    /// A trade spawned an enemy.
    EnemySpawned { tier: EnemyTier, magnitude: f64 },
    /// An enemy died to a bullet.
    EnemyKilled { tier: EnemyTier, score_value: u32 },
    /// A bullet left the muzzle.
    ShotFired,
    PlayerDashed,
    /// The player took contact damage.
    PlayerHurt { damage: i32, health: i32 },
    /// The player died. Final tallies are frozen at this moment.
    PlayerDied { final_score: u64, final_wave: u64 },
}
