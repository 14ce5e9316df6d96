//! Overlap detection. Produces contact pairs; resolution happens in combat.

use glam::Vec2;
use hecs::{Entity, World};

use riptide_core::components::{Enemy, Hitbox, Projectile, ProjectileState};
use riptide_core::types::Position;

/// Contact pairs found this tick.
#[derive(Debug, Default)]
pub struct Contacts {
    /// Live projectile overlapping an enemy.
    pub projectile_enemy: Vec<(Entity, Entity)>,
    /// Enemy overlapping the player body.
    pub player_enemy: Vec<Entity>,
}

/// Axis-aligned box overlap, boundary inclusive.
pub fn overlaps(a_pos: Vec2, a_half: Vec2, b_pos: Vec2, b_half: Vec2) -> bool {
    (a_pos.x - b_pos.x).abs() <= a_half.x + b_half.x
        && (a_pos.y - b_pos.y).abs() <= a_half.y + b_half.y
}

/// Collect all projectile-enemy and player-enemy overlaps. Inert enemies are
/// included; the combat pass decides what a contact means for them.
pub fn gather(world: &World, player: Option<Entity>) -> Contacts {
    let mut contacts = Contacts::default();

    let enemies: Vec<(Entity, Vec2, Vec2)> = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (_enemy, pos, hitbox))| (entity, pos.vec2(), hitbox.half))
        .collect();

    for (projectile, (_marker, state, pos, hitbox)) in world
        .query::<(&Projectile, &ProjectileState, &Position, &Hitbox)>()
        .iter()
    {
        if !state.active {
            continue;
        }
        for &(enemy, enemy_pos, enemy_half) in &enemies {
            if overlaps(pos.vec2(), hitbox.half, enemy_pos, enemy_half) {
                contacts.projectile_enemy.push((projectile, enemy));
            }
        }
    }

    if let Some(entity) = player {
        if let Some((player_pos, player_half)) = body_of(world, entity) {
            for &(enemy, enemy_pos, enemy_half) in &enemies {
                if overlaps(player_pos, player_half, enemy_pos, enemy_half) {
                    contacts.player_enemy.push(enemy);
                }
            }
        }
    }

    contacts
}

fn body_of(world: &World, entity: Entity) -> Option<(Vec2, Vec2)> {
    let pos = world.get::<&Position>(entity).ok()?.vec2();
    let half = world.get::<&Hitbox>(entity).ok()?.half;
    Some((pos, half))
}
