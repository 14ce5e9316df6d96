//! Player control system: movement, dash, facing, and firing.

use glam::Vec2;
use hecs::{Entity, World};

use riptide_core::components::{Flash, Health, Player, PlayerState, ProjectileState};
use riptide_core::config::GameConfig;
use riptide_core::enums::{Facing, Tint};
use riptide_core::events::GameEvent;
use riptide_core::types::{ticks_from_ms, Position, Velocity};

use crate::engine::InputState;

/// Apply held input to the player: dash trigger, velocity, facing, and the
/// shoot cooldown. Fires at most one projectile per tick.
pub fn run(
    world: &mut World,
    input: &mut InputState,
    config: &GameConfig,
    pool: &[Entity],
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let dash_queued = std::mem::take(&mut input.dash_queued);
    let player = &config.player;
    let mut shot: Option<(Position, Vec2)> = None;

    for (_entity, (_player, state, pos, vel, flash)) in world.query_mut::<(
        &Player,
        &mut PlayerState,
        &Position,
        &mut Velocity,
        &mut Flash,
    )>() {
        let moving = input.move_dir != Vec2::ZERO;
        if moving {
            state.last_move = input.move_dir;
        }

        if dash_queued && current_tick >= state.dash_ready_at_tick {
            let dir = if moving { input.move_dir } else { state.last_move };
            state.dash_dir = dir.normalize_or(Vec2::X);
            state.dash_until_tick = current_tick + ticks_from_ms(player.dash_duration_ms);
            state.dash_ready_at_tick =
                state.dash_until_tick + ticks_from_ms(player.dash_cooldown_ms);
            if player.dash_invulnerability {
                state.invulnerable_until_tick =
                    state.invulnerable_until_tick.max(state.dash_until_tick);
            }
            *flash = Flash {
                tint: Tint::Dash,
                until_tick: current_tick + ticks_from_ms(player.dash_flash_ms),
            };
            events.push(GameEvent::PlayerDashed);
        }

        if current_tick < state.dash_until_tick {
            *vel = Velocity::from_vec2(state.dash_dir * player.dash_speed);
        } else {
            *vel = Velocity::from_vec2(input.move_dir * player.speed);
        }

        let to_aim = input.aim - pos.vec2();
        if to_aim != Vec2::ZERO {
            state.facing = if to_aim.x.abs() > to_aim.y.abs() {
                if to_aim.x > 0.0 {
                    Facing::Right
                } else {
                    Facing::Left
                }
            } else if to_aim.y >= 0.0 {
                Facing::Down
            } else {
                Facing::Up
            };
        }

        if input.firing && current_tick >= state.next_shot_at_tick {
            // Cooldown arms even if the pool turns out to be exhausted.
            state.next_shot_at_tick = current_tick + ticks_from_ms(player.shoot_cooldown_ms);
            shot = Some((*pos, to_aim.normalize_or(Vec2::X)));
        }

        if flash.tint != Tint::None && current_tick >= flash.until_tick {
            *flash = Flash::default();
        }
    }

    if let Some((origin, dir)) = shot {
        if fire_projectile(world, pool, origin, dir, config, current_tick) {
            events.push(GameEvent::ShotFired);
        }
    }
}

/// Claim the first inactive pool slot and launch it. Returns false when
/// every slot is live; the shot is simply skipped.
pub fn fire_projectile(
    world: &mut World,
    pool: &[Entity],
    origin: Position,
    dir: Vec2,
    config: &GameConfig,
    current_tick: u64,
) -> bool {
    for &slot in pool {
        let active = match world.get::<&ProjectileState>(slot) {
            Ok(state) => state.active,
            Err(_) => continue,
        };
        if active {
            continue;
        }

        if let Ok(mut state) = world.get::<&mut ProjectileState>(slot) {
            state.active = true;
            state.expires_at_tick = current_tick + ticks_from_ms(config.player.bullet_lifespan_ms);
        }
        if let Ok(mut pos) = world.get::<&mut Position>(slot) {
            *pos = origin;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(slot) {
            *vel = Velocity::from_vec2(dir * config.player.bullet_speed);
        }
        return true;
    }
    false
}

/// Restore player health, clamped to max, with a heal tint cue.
pub fn heal(world: &mut World, player: Entity, amount: i32, config: &GameConfig, current_tick: u64) {
    if amount <= 0 {
        return;
    }
    let healed = match world.get::<&mut Health>(player) {
        Ok(mut health) => {
            if health.current <= 0 {
                return;
            }
            health.current = (health.current + amount).min(health.max);
            true
        }
        Err(_) => false,
    };
    if healed {
        if let Ok(mut flash) = world.get::<&mut Flash>(player) {
            *flash = Flash {
                tint: Tint::Heal,
                until_tick: current_tick + ticks_from_ms(config.player.hurt_flash_ms),
            };
        }
    }
}
