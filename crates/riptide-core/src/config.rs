//! Gameplay tuning table, loadable from JSON with hand-written defaults.
//!
//! Every knob a session reads at runtime lives here: world size, player
//! movement and combat numbers, per-tier enemy stats, and the trade-to-spawn
//! mapping. Missing fields in a loaded file fall back to the defaults below,
//! so a partial override file is valid.

use std::collections::BTreeMap;

use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::EnemyTier;
use crate::types::Position;

/// Config schema version accepted by this build.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse error")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("world too small for spawn margin: {0}")]
    InvalidWorld(String),
    #[error("spawn thresholds not ascending: {0:?} >= {1:?}")]
    ThresholdOrder(EnemyTier, EnemyTier),
}

/// Playfield dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 900.0,
        }
    }
}

impl WorldConfig {
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Player movement, dash, and combat tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Walk speed (pixels/sec).
    pub speed: f32,
    /// Dash speed (pixels/sec).
    pub dash_speed: f32,
    pub dash_duration_ms: u64,
    /// Cooldown measured from dash end.
    pub dash_cooldown_ms: u64,
    /// When true, dashing also grants invulnerability for the dash duration.
    pub dash_invulnerability: bool,
    pub max_health: i32,
    /// Invulnerability window after taking contact damage.
    pub invulnerability_ms: u64,
    pub bullet_speed: f32,
    pub shoot_cooldown_ms: u64,
    pub bullet_lifespan_ms: u64,
    pub hurt_flash_ms: u64,
    pub dash_flash_ms: u64,
    /// Speed imparted to an enemy struck by a bullet (pixels/sec).
    pub bullet_knockback: f32,
    /// Speed imparted to the player on enemy contact (pixels/sec).
    pub contact_knockback: f32,
    /// Collision body size (width, height) in pixels.
    pub hitbox: Vec2,
    pub bullet_hitbox: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 320.0,
            dash_speed: 920.0,
            dash_duration_ms: 220,
            dash_cooldown_ms: 500,
            dash_invulnerability: true,
            max_health: 13,
            invulnerability_ms: 400,
            bullet_speed: 900.0,
            shoot_cooldown_ms: 250,
            bullet_lifespan_ms: 1200,
            hurt_flash_ms: 250,
            dash_flash_ms: 210,
            bullet_knockback: 260.0,
            contact_knockback: 150.0,
            hitbox: Vec2::new(19.0, 25.0),
            bullet_hitbox: Vec2::new(10.0, 10.0),
        }
    }
}

/// Per-tier enemy stats. The `Default` impl is the shrimp row and doubles
/// as the fallback when a tier has no entry in the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub hp: i32,
    /// Seek acceleration toward the player (pixels/sec per tick).
    pub seek_accel: f32,
    /// Per-axis velocity cap (pixels/sec).
    pub max_velocity: f32,
    /// Contact damage per hit.
    pub damage: i32,
    /// Minimum interval between contact hits from the same enemy.
    pub damage_interval_ms: u64,
    /// Kill score awarded when this enemy dies.
    pub score_value: u32,
    /// Collision body size (width, height) in pixels.
    pub hitbox: Vec2,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            hp: 3,
            seek_accel: 80.0,
            max_velocity: 260.0,
            damage: 2,
            damage_interval_ms: 500,
            score_value: 25,
            hitbox: Vec2::new(19.0, 19.0),
        }
    }
}

/// Trade-to-spawn mapping and placement tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Minimum trade magnitude per tier. A trade spawns the largest tier
    /// whose threshold it meets.
    pub thresholds: BTreeMap<EnemyTier, f64>,
    /// Score awarded per wave-advance signal.
    pub wave_points: u64,
    /// Delay between spawn and activation.
    pub spawn_delay_ms: u64,
    /// Inset from the world edges for spawn placement.
    pub margin: f32,
    /// Spawn positions closer than this to the player are re-rolled.
    pub min_player_distance: f32,
    /// Placement re-rolls before accepting the last candidate.
    pub max_attempts: u32,
    /// Trades above this magnitude are treated as feed glitches and dropped.
    pub max_trade_magnitude: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            thresholds: BTreeMap::from([
                (EnemyTier::Shrimp, 0.0),
                (EnemyTier::Crab, 1000.0),
                (EnemyTier::Dolphin, 2500.0),
                (EnemyTier::Whale, 10_000.0),
            ]),
            wave_points: 100,
            spawn_delay_ms: 1400,
            margin: 50.0,
            min_player_distance: 120.0,
            max_attempts: 10,
            max_trade_magnitude: 10_000_000.0,
        }
    }
}

/// Full gameplay config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub version: u32,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub enemies: BTreeMap<EnemyTier, EnemyConfig>,
    pub spawning: SpawnConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            enemies: BTreeMap::from([
                (EnemyTier::Shrimp, EnemyConfig::default()),
                (
                    EnemyTier::Crab,
                    EnemyConfig {
                        hp: 6,
                        seek_accel: 45.0,
                        max_velocity: 200.0,
                        damage: 3,
                        damage_interval_ms: 500,
                        score_value: 50,
                        hitbox: Vec2::new(26.0, 26.0),
                    },
                ),
                (
                    EnemyTier::Dolphin,
                    EnemyConfig {
                        hp: 12,
                        seek_accel: 35.0,
                        max_velocity: 140.0,
                        damage: 4,
                        damage_interval_ms: 500,
                        score_value: 125,
                        hitbox: Vec2::new(36.0, 36.0),
                    },
                ),
                (
                    EnemyTier::Whale,
                    EnemyConfig {
                        hp: 25,
                        seek_accel: 30.0,
                        max_velocity: 110.0,
                        damage: 7,
                        damage_interval_ms: 500,
                        score_value: 350,
                        hitbox: Vec2::new(80.0, 80.0),
                    },
                ),
            ]),
            spawning: SpawnConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        // Spawn placement samples margin..=dim-margin; the range must be
        // non-empty or position rolls would panic.
        if self.world.width <= self.spawning.margin * 2.0
            || self.world.height <= self.spawning.margin * 2.0
        {
            return Err(ConfigError::InvalidWorld(format!(
                "{}x{} with margin {}",
                self.world.width, self.world.height, self.spawning.margin
            )));
        }
        let mut last: Option<(EnemyTier, f64)> = None;
        for tier in EnemyTier::ALL {
            if let Some(&threshold) = self.spawning.thresholds.get(&tier) {
                if let Some((last_tier, last_threshold)) = last {
                    if threshold <= last_threshold {
                        return Err(ConfigError::ThresholdOrder(last_tier, tier));
                    }
                }
                last = Some((tier, threshold));
            }
        }
        Ok(())
    }

    /// Stats for a tier, falling back to default stats when the table has
    /// no entry for it.
    pub fn enemy(&self, tier: EnemyTier) -> EnemyConfig {
        match self.enemies.get(&tier) {
            Some(stats) => *stats,
            None => {
                warn!("no enemy stats configured for {tier:?}, using defaults");
                EnemyConfig::default()
            }
        }
    }
}
