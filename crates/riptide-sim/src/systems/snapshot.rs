//! Builds the per-tick `GameStateSnapshot` from the world.
//!
//! Strictly read-only — the world is never modified here, so the snapshot
//! can be built at any point without disturbing the tick.

use hecs::World;

use riptide_core::components::*;
use riptide_core::constants::{FLASH_ALPHA, INERT_ALPHA, INVULN_FLASH_INTERVAL_MS};
use riptide_core::enums::GamePhase;
use riptide_core::events::GameEvent;
use riptide_core::state::*;
use riptide_core::types::{ticks_from_ms, Position, SimTime, Velocity};

use crate::session::Session;

/// Assemble the snapshot for the current tick.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &Session,
    events: Vec<GameEvent>,
    result: Option<SessionResult>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: build_player(world, time.tick),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        score: session.score_view(),
        events,
        result,
    }
}

fn build_player(world: &World, current_tick: u64) -> PlayerView {
    world
        .query::<(&Player, &Position, &Velocity, &Health, &PlayerState, &Flash)>()
        .iter()
        .next()
        .map(|(_, (_player, pos, vel, health, state, flash))| {
            let invulnerable = current_tick < state.invulnerable_until_tick;
            PlayerView {
                position: *pos,
                velocity: *vel,
                health: health.current,
                max_health: health.max,
                facing: state.facing,
                dashing: current_tick < state.dash_until_tick,
                invulnerable,
                alpha: if invulnerable {
                    invuln_alpha(current_tick)
                } else {
                    1.0
                },
                tint: flash.tint,
            }
        })
        .unwrap_or_default()
}

/// Blink while invulnerable: full and dimmed alpha alternate every interval.
fn invuln_alpha(current_tick: u64) -> f32 {
    let interval = ticks_from_ms(INVULN_FLASH_INTERVAL_MS).max(1);
    if (current_tick / interval) % 2 == 0 {
        1.0
    } else {
        FLASH_ALPHA
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Velocity, &Health, &EnemyState, &Flash)>()
        .iter()
        .map(|(entity, (_enemy, pos, vel, health, state, flash))| EnemyView {
            id: entity.id(),
            tier: state.tier,
            position: *pos,
            velocity: *vel,
            health: health.current,
            max_health: health.max,
            active: state.activated,
            alpha: if state.activated { 1.0 } else { INERT_ALPHA },
            tint: flash.tint,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &ProjectileState, &Position, &Velocity)>()
        .iter()
        .filter(|(_, (_marker, state, _, _))| state.active)
        .map(|(entity, (_marker, _state, pos, vel))| ProjectileView {
            id: entity.id(),
            position: *pos,
            velocity: *vel,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
