//! Entity spawn factories.

use glam::Vec2;
use hecs::{Entity, World};

use riptide_core::components::*;
use riptide_core::config::{EnemyConfig, GameConfig};
use riptide_core::constants::PROJECTILE_POOL_SIZE;
use riptide_core::enums::{EnemyTier, Facing, Tint};
use riptide_core::types::{ticks_from_ms, Position, Velocity};

/// Spawn the player at the center of the playfield.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    let player = &config.player;
    world.spawn((
        Player,
        BoundToWorld,
        config.world.center(),
        Velocity::default(),
        Hitbox {
            half: player.hitbox * 0.5,
        },
        Health {
            current: player.max_health,
            max: player.max_health,
        },
        PlayerState {
            facing: Facing::default(),
            last_move: Vec2::X,
            dash_dir: Vec2::X,
            dash_until_tick: 0,
            dash_ready_at_tick: 0,
            invulnerable_until_tick: 0,
            next_shot_at_tick: 0,
        },
        Flash::default(),
    ))
}

/// Spawn an enemy that activates at `active_at_tick`. Stats are copied in
/// so later config edits leave live enemies untouched.
pub fn spawn_enemy(
    world: &mut World,
    position: Position,
    tier: EnemyTier,
    stats: EnemyConfig,
    active_at_tick: u64,
) -> Entity {
    world.spawn((
        Enemy,
        BoundToWorld,
        position,
        Velocity::default(),
        Hitbox {
            half: stats.hitbox * 0.5,
        },
        Health {
            current: stats.hp,
            max: stats.hp,
        },
        EnemyState {
            tier,
            active_at_tick,
            activated: false,
            next_damage_at_tick: active_at_tick,
            seek_accel: stats.seek_accel,
            max_velocity: stats.max_velocity,
            damage: stats.damage,
            damage_interval_ticks: ticks_from_ms(stats.damage_interval_ms),
            score_value: stats.score_value,
        },
        Flash {
            tint: Tint::Inert,
            until_tick: active_at_tick,
        },
    ))
}

/// Spawn the fixed pool of inactive projectile entities. Firing claims a
/// slot; nothing is spawned or despawned per shot.
pub fn spawn_projectile_pool(world: &mut World, config: &GameConfig) -> Vec<Entity> {
    (0..PROJECTILE_POOL_SIZE)
        .map(|_| {
            world.spawn((
                Projectile,
                Position::default(),
                Velocity::default(),
                Hitbox {
                    half: config.player.bullet_hitbox * 0.5,
                },
                ProjectileState::default(),
            ))
        })
        .collect()
}
