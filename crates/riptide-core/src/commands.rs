//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, before any
//! system runs.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a session from the loading screen, or restart after defeat
    /// once the restart delay has elapsed.
    Start,
    /// Set the movement input vector. Magnitudes above 1 are normalized,
    /// so diagonal input moves no faster than cardinal input.
    SetMovement { x: f32, y: f32 },
    /// Trigger a dash in the current (or last) movement direction.
    Dash,
    /// Aim at a world-space point.
    SetAim { x: f32, y: f32 },
    /// Hold or release the fire button.
    SetFiring { firing: bool },
}
