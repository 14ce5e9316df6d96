//! Market feed layer for RIPTIDE.
//!
//! Defines the trade events the simulation consumes, validates them against
//! feed glitches, and maps trade magnitudes onto enemy tiers. Pure logic,
//! no transport: whatever delivers trades (websocket, replay file, test
//! fixture) hands `TradeEvent`s to the engine.

pub mod classify;
pub mod event;

pub use riptide_core as core;

#[cfg(test)]
mod tests;
