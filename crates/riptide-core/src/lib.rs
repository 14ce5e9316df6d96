//! Shared vocabulary of the RIPTIDE simulation.
//!
//! Everything the other crates agree on lives here: components, commands,
//! the config table, state snapshots, events, and constants. Nothing in
//! this crate depends on a runtime framework or a transport layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
