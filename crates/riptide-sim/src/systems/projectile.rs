//! Projectile lifecycle system.
//!
//! Retires live projectiles whose lifespan has elapsed or that have left
//! the playfield. Retired slots go back to the pool; nothing is despawned.

use hecs::World;

use riptide_core::components::ProjectileState;
use riptide_core::config::WorldConfig;
use riptide_core::types::{Position, Velocity};

pub fn run(world: &mut World, bounds: &WorldConfig, current_tick: u64) {
    for (_entity, (state, pos, vel)) in
        world.query_mut::<(&mut ProjectileState, &Position, &mut Velocity)>()
    {
        if !state.active {
            continue;
        }
        let out_of_bounds =
            pos.x < 0.0 || pos.x > bounds.width || pos.y < 0.0 || pos.y > bounds.height;
        if current_tick >= state.expires_at_tick || out_of_bounds {
            state.active = false;
            *vel = Velocity::default();
        }
    }
}
