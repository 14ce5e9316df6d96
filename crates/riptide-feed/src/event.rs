//! Trade events arriving from the market feed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use riptide_core::enums::TradeSide;

/// Reasons a trade is rejected before it reaches the simulation.
#[derive(Debug, Error, PartialEq)]
pub enum TradeEventError {
    #[error("magnitude is NaN or infinite")]
    NotFinite,
    #[error("magnitude is negative")]
    Negative,
    #[error("magnitude {0} exceeds the plausibility cap")]
    Implausible(f64),
}

/// One observed trade. `sequence` is the feed's batch ordinal (trades from
/// the same batch share it); the wave machine watches it for changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Trade size in quote units. Drives enemy tier selection.
    pub magnitude: f64,
    pub sequence: u64,
    #[serde(default)]
    pub side: TradeSide,
}

impl TradeEvent {
    /// Reject malformed or implausibly large trades. The cap guards against
    /// decimal-shift glitches in upstream feeds.
    pub fn validate(&self, max_magnitude: f64) -> Result<(), TradeEventError> {
        if !self.magnitude.is_finite() {
            return Err(TradeEventError::NotFinite);
        }
        if self.magnitude < 0.0 {
            return Err(TradeEventError::Negative);
        }
        if self.magnitude > max_magnitude {
            return Err(TradeEventError::Implausible(self.magnitude));
        }
        Ok(())
    }
}
