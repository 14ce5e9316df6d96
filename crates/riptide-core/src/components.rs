//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! All timing fields hold absolute tick deadlines, never countdowns.
//! A deadline in the past means the effect is over.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Axis-aligned collision body, stored as half extents from the position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub half: Vec2,
}

/// Transient sprite tint, cleared once the deadline passes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Flash {
    pub tint: Tint,
    pub until_tick: u64,
}

/// Player control and cooldown state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub facing: Facing,
    /// Last non-zero movement direction, used as the dash fallback.
    pub last_move: Vec2,
    /// Direction locked in when the current dash started.
    pub dash_dir: Vec2,
    /// Dash is active while the current tick is before this deadline.
    pub dash_until_tick: u64,
    /// Next dash is accepted at or after this tick.
    pub dash_ready_at_tick: u64,
    /// Contact damage is ignored while the current tick is before this.
    pub invulnerable_until_tick: u64,
    /// Next shot is accepted at or after this tick.
    pub next_shot_at_tick: u64,
}

/// Enemy spawn gate, seek tuning, and contact-damage pacing.
/// Stats are copied out of the config at spawn time so a session is
/// unaffected by config edits made while it runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyState {
    pub tier: EnemyTier,
    /// The enemy is inert (no movement, no contact damage) before this tick.
    pub active_at_tick: u64,
    pub activated: bool,
    /// Next contact hit is accepted at or after this tick.
    pub next_damage_at_tick: u64,
    pub seek_accel: f32,
    pub max_velocity: f32,
    pub damage: i32,
    pub damage_interval_ticks: u64,
    pub score_value: u32,
}

/// Pooled projectile slot. Inactive slots are invisible and collide with
/// nothing; firing claims one and resets its deadline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileState {
    pub active: bool,
    pub expires_at_tick: u64,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a pooled projectile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an entity whose position is clamped to the playfield each tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundToWorld;
