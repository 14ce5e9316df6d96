//! Wave machine and score bookkeeping for one session.

use log::warn;

use riptide_core::enums::EnemyTier;
use riptide_core::state::{KillTally, ScoreView, SessionResult};

/// Score and wave state. Reset wholesale when a session starts.
///
/// The wave counter is anchored to the first wave-advance signal: the
/// sequence number seen then becomes the baseline, and later signals map to
/// `sequence - baseline + 1`. Feeds occasionally deliver stale batches out
/// of order, so the counter never moves backwards.
#[derive(Debug, Default)]
pub struct Session {
    baseline: Option<u64>,
    wave: u64,
    wave_score: u64,
    kill_score: u64,
    kills: KillTally,
}

impl Session {
    /// Apply one wave-advance signal. Always awards the wave bonus; returns
    /// the new wave number when the counter moved, None when the signal was
    /// stale.
    pub fn advance_wave(&mut self, sequence: u64, wave_points: u64) -> Option<u64> {
        self.wave_score += wave_points;

        let baseline = match self.baseline {
            None => {
                self.baseline = Some(sequence);
                self.wave = 1;
                return Some(1);
            }
            Some(b) => b,
        };

        if sequence < baseline {
            warn!("wave signal sequence {sequence} is before baseline {baseline}, ignoring");
            return None;
        }
        let candidate = sequence - baseline + 1;
        if candidate <= self.wave {
            if candidate < self.wave {
                warn!(
                    "wave signal regressed to {candidate} (current {}), ignoring",
                    self.wave
                );
            }
            return None;
        }
        self.wave = candidate;
        Some(candidate)
    }

    pub fn record_kill(&mut self, tier: EnemyTier, score_value: u32) {
        self.kill_score += score_value as u64;
        self.kills.record(tier);
    }

    pub fn wave(&self) -> u64 {
        self.wave
    }

    pub fn total_score(&self) -> u64 {
        self.wave_score + self.kill_score
    }

    pub fn kills(&self) -> &KillTally {
        &self.kills
    }

    pub fn score_view(&self) -> ScoreView {
        ScoreView {
            wave: self.wave,
            wave_score: self.wave_score,
            kill_score: self.kill_score,
            total_score: self.total_score(),
            kills: self.kills.clone(),
        }
    }

    pub fn result(&self) -> SessionResult {
        SessionResult {
            final_score: self.total_score(),
            final_wave: self.wave,
            kills: self.kills.clone(),
        }
    }
}
