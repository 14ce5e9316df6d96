//! Simulation engine for RIPTIDE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, turns market
//! trades into enemy spawns, and produces GameStateSnapshots for the
//! frontend.

pub mod engine;
pub mod market;
pub mod mint;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use mint::MintSink;
pub use riptide_core as core;
