//! Trade intake — validation, wave signals, and enemy spawn placement.

use hecs::{Entity, World};
use log::warn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use riptide_core::config::GameConfig;
use riptide_core::events::GameEvent;
use riptide_core::types::{ticks_from_ms, Position};
use riptide_feed::classify::TierLadder;
use riptide_feed::event::TradeEvent;

use crate::session::Session;
use crate::world_setup;

/// Watches the feed's sequence numbers for wave-advance signals.
#[derive(Debug, Default)]
pub struct MarketIntake {
    last_sequence: Option<u64>,
}

impl MarketIntake {
    pub fn reset(&mut self) {
        self.last_sequence = None;
    }

    /// Record a sequence number. Returns true when it differs from the
    /// previous one — the wave-advance signal. The first observation only
    /// anchors and never signals.
    fn observe(&mut self, sequence: u64) -> bool {
        let advanced = match self.last_sequence {
            Some(last) => last != sequence,
            None => false,
        };
        self.last_sequence = Some(sequence);
        advanced
    }
}

/// Apply one trade: validate it, run wave bookkeeping, spawn an enemy.
#[allow(clippy::too_many_arguments)]
pub fn apply_trade(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    ladder: &TierLadder,
    session: &mut Session,
    intake: &mut MarketIntake,
    events: &mut Vec<GameEvent>,
    player: Option<Entity>,
    current_tick: u64,
    trade: &TradeEvent,
) {
    if let Err(err) = trade.validate(config.spawning.max_trade_magnitude) {
        warn!("dropping trade (seq {}): {err}", trade.sequence);
        return;
    }

    if intake.observe(trade.sequence) {
        if let Some(wave) = session.advance_wave(trade.sequence, config.spawning.wave_points) {
            events.push(GameEvent::WaveStarted { wave });
        }
    }

    let tier = ladder.classify(trade.magnitude);
    let stats = config.enemy(tier);
    let position = pick_spawn_position(world, rng, config, player);
    let active_at = current_tick + ticks_from_ms(config.spawning.spawn_delay_ms);
    world_setup::spawn_enemy(world, position, tier, stats, active_at);
    events.push(GameEvent::EnemySpawned {
        tier,
        magnitude: trade.magnitude,
    });
}

/// Roll a spawn position inside the margin-inset playfield, rerolling a
/// bounded number of times to keep clear of the player.
fn pick_spawn_position(
    world: &World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    player: Option<Entity>,
) -> Position {
    let player_pos = player.and_then(|p| world.get::<&Position>(p).ok().map(|pos| *pos));

    let mut position = roll_position(rng, config);
    if let Some(target) = player_pos {
        let mut attempts = 0;
        while position.distance_to(&target) < config.spawning.min_player_distance
            && attempts < config.spawning.max_attempts
        {
            position = roll_position(rng, config);
            attempts += 1;
        }
    }
    position
}

fn roll_position(rng: &mut ChaCha8Rng, config: &GameConfig) -> Position {
    let margin = config.spawning.margin;
    Position::new(
        rng.gen_range(margin..=config.world.width - margin),
        rng.gen_range(margin..=config.world.height - margin),
    )
}
