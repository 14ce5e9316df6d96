//! Damage resolution — consumes the tick's contact pairs in two passes:
//! projectile hits first, then enemy contact damage against the player.
//!
//! Entities killed in the projectile pass are dead for the rest of the
//! tick: later pairs involving them resolve to nothing, and resolution
//! never panics on stale entity ids.

use glam::Vec2;
use hecs::{Entity, World};

use riptide_core::components::{EnemyState, Flash, Health, PlayerState, ProjectileState};
use riptide_core::config::GameConfig;
use riptide_core::constants::{ENEMY_HURT_FLASH_MS, PROJECTILE_DAMAGE};
use riptide_core::enums::{EnemyTier, Tint};
use riptide_core::events::GameEvent;
use riptide_core::types::{ticks_from_ms, Position, Velocity};

use crate::session::Session;
use crate::systems::collision::Contacts;

enum HitOutcome {
    Survived,
    Killed { tier: EnemyTier, score_value: u32 },
}

/// Resolve all combat for one tick.
pub fn resolve(
    world: &mut World,
    contacts: &Contacts,
    player: Option<Entity>,
    session: &mut Session,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    current_tick: u64,
) {
    resolve_projectile_hits(world, contacts, session, despawn_buffer, events, config, current_tick);
    resolve_player_contacts(world, contacts, player, events, config, current_tick);
}

fn resolve_projectile_hits(
    world: &mut World,
    contacts: &Contacts,
    session: &mut Session,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    current_tick: u64,
) {
    for &(projectile, enemy) in &contacts.projectile_enemy {
        if !enemy_alive(world, enemy) {
            continue;
        }
        let origin = match deactivate_projectile(world, projectile) {
            Some(origin) => origin,
            None => continue,
        };

        let knock = match world.get::<&Position>(enemy) {
            Ok(pos) => (pos.vec2() - origin).normalize_or_zero() * config.player.bullet_knockback,
            Err(_) => continue,
        };

        match damage_enemy(world, enemy, PROJECTILE_DAMAGE, knock, current_tick) {
            Some(HitOutcome::Killed { tier, score_value }) => {
                session.record_kill(tier, score_value);
                events.push(GameEvent::EnemyKilled { tier, score_value });
                despawn_buffer.push(enemy);
            }
            Some(HitOutcome::Survived) | None => {}
        }
    }
}

fn resolve_player_contacts(
    world: &mut World,
    contacts: &Contacts,
    player: Option<Entity>,
    events: &mut Vec<GameEvent>,
    config: &GameConfig,
    current_tick: u64,
) {
    let player = match player {
        Some(entity) => entity,
        None => return,
    };
    for &enemy in &contacts.player_enemy {
        let (damage, enemy_pos) = match contact_damage(world, enemy, current_tick) {
            Some(hit) => hit,
            None => continue,
        };
        apply_player_damage(world, player, damage, enemy_pos, config, events, current_tick);
    }
}

fn enemy_alive(world: &World, enemy: Entity) -> bool {
    world
        .get::<&Health>(enemy)
        .map(|health| health.current > 0)
        .unwrap_or(false)
}

/// Retire a projectile on impact. Returns its position, or None when the
/// slot was already consumed this tick.
fn deactivate_projectile(world: &mut World, projectile: Entity) -> Option<Vec2> {
    let mut state = world.get::<&mut ProjectileState>(projectile).ok()?;
    if !state.active {
        return None;
    }
    state.active = false;
    drop(state);

    if let Ok(mut vel) = world.get::<&mut Velocity>(projectile) {
        *vel = Velocity::default();
    }
    world.get::<&Position>(projectile).ok().map(|pos| pos.vec2())
}

/// Apply damage to an enemy. No-op when already dead. Knockback lands only
/// on activated enemies; inert ones take the damage but hold position.
fn damage_enemy(
    world: &mut World,
    enemy: Entity,
    amount: i32,
    knock: Vec2,
    current_tick: u64,
) -> Option<HitOutcome> {
    let activated = world.get::<&EnemyState>(enemy).ok()?.activated;

    let killed = {
        let mut health = world.get::<&mut Health>(enemy).ok()?;
        if health.current <= 0 {
            return None;
        }
        health.current = (health.current - amount).max(0);
        health.current == 0
    };

    if let Ok(mut flash) = world.get::<&mut Flash>(enemy) {
        *flash = Flash {
            tint: Tint::Hurt,
            until_tick: current_tick + ticks_from_ms(ENEMY_HURT_FLASH_MS),
        };
    }

    if activated {
        if let Ok(mut vel) = world.get::<&mut Velocity>(enemy) {
            vel.x += knock.x;
            vel.y += knock.y;
        }
    }

    if killed {
        let state = world.get::<&EnemyState>(enemy).ok()?;
        Some(HitOutcome::Killed {
            tier: state.tier,
            score_value: state.score_value,
        })
    } else {
        Some(HitOutcome::Survived)
    }
}

/// Check the enemy side of a contact: alive, past its activation gate, and
/// past its damage interval. Eligibility re-arms the interval whether or
/// not the player ends up taking the hit.
fn contact_damage(world: &mut World, enemy: Entity, current_tick: u64) -> Option<(i32, Vec2)> {
    if !enemy_alive(world, enemy) {
        return None;
    }
    let damage = {
        let mut state = world.get::<&mut EnemyState>(enemy).ok()?;
        if current_tick < state.active_at_tick {
            return None;
        }
        if current_tick < state.next_damage_at_tick {
            return None;
        }
        state.next_damage_at_tick = current_tick + state.damage_interval_ticks;
        state.damage
    };
    let pos = world.get::<&Position>(enemy).ok()?.vec2();
    Some((damage, pos))
}

/// Apply contact damage to the player. No-op while invulnerable or dead.
fn apply_player_damage(
    world: &mut World,
    player: Entity,
    damage: i32,
    enemy_pos: Vec2,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
    current_tick: u64,
) {
    let invulnerable = match world.get::<&PlayerState>(player) {
        Ok(state) => current_tick < state.invulnerable_until_tick,
        Err(_) => return,
    };
    if invulnerable {
        return;
    }

    let health_after = {
        let mut health = match world.get::<&mut Health>(player) {
            Ok(health) => health,
            Err(_) => return,
        };
        if health.current <= 0 {
            return;
        }
        health.current = (health.current - damage).max(0);
        health.current
    };

    let dashing = {
        let mut state = match world.get::<&mut PlayerState>(player) {
            Ok(state) => state,
            Err(_) => return,
        };
        state.invulnerable_until_tick =
            current_tick + ticks_from_ms(config.player.invulnerability_ms);
        current_tick < state.dash_until_tick
    };

    if let Ok(mut flash) = world.get::<&mut Flash>(player) {
        *flash = Flash {
            tint: Tint::Hurt,
            until_tick: current_tick + ticks_from_ms(config.player.hurt_flash_ms),
        };
    }

    if damage > 0 && !dashing {
        let player_pos = world.get::<&Position>(player).ok().map(|pos| pos.vec2());
        if let Some(player_pos) = player_pos {
            let knock = (player_pos - enemy_pos).normalize_or_zero() * config.player.contact_knockback;
            if let Ok(mut vel) = world.get::<&mut Velocity>(player) {
                vel.x += knock.x;
                vel.y += knock.y;
            }
        }
    }

    events.push(GameEvent::PlayerHurt {
        damage,
        health: health_after,
    });
}
