//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or in
//! the engine.

pub mod collision;
pub mod combat;
pub mod enemy;
pub mod movement;
pub mod player;
pub mod projectile;
pub mod snapshot;
