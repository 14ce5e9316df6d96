//! Enemy activation and seek system.
//!
//! Enemies spawn inert: frozen in place until their activation tick, then
//! they accelerate toward the player every tick, capped per axis. Knockback
//! applied by combat bleeds off through the same cap as seeking resumes.

use hecs::{Entity, World};

use riptide_core::components::{Enemy, EnemyState, Flash};
use riptide_core::enums::Tint;
use riptide_core::types::{Position, Velocity};

pub fn run(world: &mut World, player: Option<Entity>, current_tick: u64) {
    let target = player.and_then(|p| world.get::<&Position>(p).ok().map(|pos| *pos));

    for (_entity, (_enemy, state, pos, vel, flash)) in world.query_mut::<(
        &Enemy,
        &mut EnemyState,
        &Position,
        &mut Velocity,
        &mut Flash,
    )>() {
        if !state.activated && current_tick >= state.active_at_tick {
            state.activated = true;
            *flash = Flash::default();
        }

        // Expired hurt flashes fall back to the spawn-gate tint while inert.
        if flash.tint != Tint::None && current_tick >= flash.until_tick {
            *flash = if state.activated {
                Flash::default()
            } else {
                Flash {
                    tint: Tint::Inert,
                    until_tick: state.active_at_tick,
                }
            };
        }

        if !state.activated {
            *vel = Velocity::default();
            continue;
        }

        match target {
            Some(t) => {
                let dir = pos.direction_to(&t);
                vel.x += dir.x * state.seek_accel;
                vel.y += dir.y * state.seek_accel;
                let max = state.max_velocity;
                vel.x = vel.x.min(max).max(-max);
                vel.y = vel.y.min(max).max(-max);
            }
            None => *vel = Velocity::default(),
        }
    }
}
