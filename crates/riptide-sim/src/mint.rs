//! Outbound port for publishing finished session results.
//!
//! The engine calls the sink exactly once per session, at the moment of
//! death. Submission failures are logged and swallowed: losing the
//! publication must never stall or kill the game loop, and the engine does
//! not retry.

use std::sync::{Arc, Mutex};

use riptide_core::state::SessionResult;

/// Destination for final session results (e.g. an on-chain mint relay).
pub trait MintSink {
    fn submit(&mut self, result: &SessionResult) -> anyhow::Result<()>;
}

/// Discards every result. Default when no sink is attached.
pub struct NullSink;

impl MintSink for NullSink {
    fn submit(&mut self, _result: &SessionResult) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Collects submitted results for inspection. Used by tests and the replay
/// harness.
#[derive(Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<SessionResult>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All results submitted so far, in order.
    pub fn submitted(&self) -> Vec<SessionResult> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl MintSink for RecordingSink {
    fn submit(&mut self, result: &SessionResult) -> anyhow::Result<()> {
        match self.log.lock() {
            Ok(mut log) => log.push(result.clone()),
            Err(poisoned) => poisoned.into_inner().push(result.clone()),
        }
        Ok(())
    }
}
