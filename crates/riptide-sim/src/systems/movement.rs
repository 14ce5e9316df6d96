//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Entities marked BoundToWorld are then clamped so their hitbox stays
//! inside the playfield.

use hecs::World;

use riptide_core::components::{BoundToWorld, Hitbox};
use riptide_core::config::WorldConfig;
use riptide_core::constants::DT;
use riptide_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity,
/// then clamp bounded entities to the world.
pub fn run(world: &mut World, bounds: &WorldConfig) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }

    for (_entity, (_bound, pos, hitbox)) in
        world.query_mut::<(&BoundToWorld, &mut Position, &Hitbox)>()
    {
        // min-then-max instead of clamp: a hitbox wider than the world
        // would invert the clamp bounds and panic.
        pos.x = pos.x.min(bounds.width - hitbox.half.x).max(hitbox.half.x);
        pos.y = pos.y.min(bounds.height - hitbox.half.y).max(hitbox.half.y);
    }
}
