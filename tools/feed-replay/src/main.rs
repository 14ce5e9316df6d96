//! feed-replay: headless harness that drives the simulation from a market
//! trade feed, recorded or synthetic.
//!
//! Usage:
//!   feed-replay replay --feed trades.jsonl
//!   feed-replay synthetic --seed 7 --max-ticks 7200 --fast

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use riptide_core::commands::PlayerCommand;
use riptide_core::config::GameConfig;
use riptide_core::constants::TICK_RATE;
use riptide_core::enums::{GamePhase, TradeSide};
use riptide_core::state::{GameStateSnapshot, SessionResult};
use riptide_feed::event::TradeEvent;
use riptide_sim::engine::{EngineConfig, GameEngine};
use riptide_sim::MintSink;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "replay" => cmd_replay(&args[2..]),
        "synthetic" => cmd_synthetic(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "feed-replay: drive the simulation from a market trade feed\n\
         \n\
         Commands:\n\
         \n\
         replay    Replay a recorded JSONL trade feed\n\
         \n\
           --feed <path>      Feed file, one JSON object per line:\n\
                              {{\"at_tick\":120,\"magnitude\":1500.0,\"sequence\":42,\"side\":\"buy\"}}\n\
           --config <path>    Gameplay config JSON (optional)\n\
           --seed <N>         Engine RNG seed (default: 42)\n\
           --max-ticks <N>    Stop after N ticks (default: 36000)\n\
           --fast             Run unpaced instead of at the tick rate\n\
         \n\
         synthetic Generate a feed procedurally and replay it\n\
         \n\
           --seed <N>         Seed for both the feed and the engine (default: 42)\n\
           --config <path>    Gameplay config JSON (optional)\n\
           --max-ticks <N>    Stop after N ticks (default: 36000)\n\
           --fast             Run unpaced instead of at the tick rate\n\
         \n\
         The final session result is written to stdout as JSON when the\n\
         player dies.\n\
         \n\
         Examples:\n\
         \n\
           feed-replay replay --feed trades.jsonl --fast\n\
           feed-replay synthetic --seed 7\n"
    );
}

// --- Argument parsing ---

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    match parse_value(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got '{raw}'");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn parse_feed_path(args: &[String]) -> PathBuf {
    match parse_value(args, "--feed") {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Error: --feed <path> is required");
            process::exit(1);
        }
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn load_config(args: &[String]) -> Result<GameConfig> {
    match parse_value(args, "--config") {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{path}'"))?;
            let config =
                GameConfig::from_json(&text).with_context(|| format!("parse config '{path}'"))?;
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

// --- Feed format ---

/// One line of a feed file: a trade plus the tick it should arrive at.
#[derive(Debug, Clone, Copy, Deserialize)]
struct FeedLine {
    at_tick: u64,
    #[serde(flatten)]
    trade: TradeEvent,
}

fn load_feed(path: &PathBuf) -> Result<Vec<FeedLine>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read feed '{}'", path.display()))?;
    let mut lines = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed: FeedLine = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: bad feed line", path.display(), idx + 1))?;
        lines.push(parsed);
    }
    lines.sort_by_key(|l| l.at_tick);
    Ok(lines)
}

/// Generate a deterministic trade stream: magnitudes log-uniform across the
/// tiers, sequence numbers advancing now and then to trigger waves.
fn synthetic_feed(seed: u64, max_ticks: u64) -> Vec<FeedLine> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut lines = Vec::new();
    let mut tick = 120;
    let mut sequence = 1_000u64;

    while tick < max_ticks {
        let magnitude = 10f64.powf(rng.gen_range(1.0..6.5));
        let side = if rng.gen_bool(0.5) {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        };
        lines.push(FeedLine {
            at_tick: tick,
            trade: TradeEvent {
                magnitude,
                sequence,
                side,
            },
        });
        if rng.gen_bool(0.3) {
            sequence += 1;
        }
        tick += rng.gen_range(30..=240);
    }
    lines
}

// --- Commands ---

fn cmd_replay(args: &[String]) -> Result<()> {
    let path = parse_feed_path(args);
    let feed = load_feed(&path)?;
    log::info!("loaded {} trades from {}", feed.len(), path.display());
    run_session(args, &feed)
}

fn cmd_synthetic(args: &[String]) -> Result<()> {
    let seed = parse_u64(args, "--seed", 42);
    let max_ticks = parse_u64(args, "--max-ticks", 36_000);
    let feed = synthetic_feed(seed, max_ticks);
    log::info!("generated {} synthetic trades (seed {seed})", feed.len());
    run_session(args, &feed)
}

// --- Session driver ---

fn run_session(args: &[String], feed: &[FeedLine]) -> Result<()> {
    let seed = parse_u64(args, "--seed", 42);
    let max_ticks = parse_u64(args, "--max-ticks", 36_000);
    let paced = !has_flag(args, "--fast");
    let game = load_config(args)?;

    let mut engine = GameEngine::with_mint_sink(
        EngineConfig { seed, game },
        Box::new(StdoutSink),
    );
    engine.queue_command(PlayerCommand::Start);

    let mut next_line = 0;
    let mut next_tick_time = Instant::now();
    let mut snapshot = GameStateSnapshot::default();

    loop {
        let tick = engine.time().tick;
        while next_line < feed.len() && feed[next_line].at_tick <= tick {
            engine.queue_trade(feed[next_line].trade);
            next_line += 1;
        }
        engine.queue_commands(pilot_commands(&snapshot));

        snapshot = engine.tick();

        if snapshot.time.tick % 600 == 0 {
            log::info!(
                "tick {}: wave {} score {} enemies {}",
                snapshot.time.tick,
                snapshot.score.wave,
                snapshot.score.total_score,
                snapshot.enemies.len()
            );
        }

        if let Some(result) = &snapshot.result {
            log_outcome(result);
            return Ok(());
        }
        if next_line == feed.len() && snapshot.enemies.is_empty() {
            log::info!(
                "feed exhausted at tick {} with the player alive, score {}",
                snapshot.time.tick,
                snapshot.score.total_score
            );
            return Ok(());
        }
        if snapshot.time.tick >= max_ticks {
            log::info!("tick cap {max_ticks} reached, stopping");
            return Ok(());
        }

        if paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind — reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

fn log_outcome(result: &SessionResult) {
    log::info!(
        "session over: score {} wave {} kills {}",
        result.final_score,
        result.final_wave,
        result.kills.total
    );
}

/// Mint port that prints the final result to stdout as one JSON line.
struct StdoutSink;

impl MintSink for StdoutSink {
    fn submit(&mut self, result: &SessionResult) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string(result)?);
        Ok(())
    }
}

// --- Autopilot ---

/// A small scripted player: aims at the nearest enemy, fires whenever a
/// target exists, kites away from close active enemies, and dashes out of
/// point-blank trouble.
fn pilot_commands(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    if snapshot.phase != GamePhase::Playing {
        return Vec::new();
    }
    let player = snapshot.player.position.vec2();
    let mut commands = Vec::new();

    let target = snapshot
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = a.position.vec2().distance_squared(player);
            let db = b.position.vec2().distance_squared(player);
            da.total_cmp(&db)
        })
        .map(|e| e.position.vec2());
    let threat = snapshot
        .enemies
        .iter()
        .filter(|e| e.active)
        .map(|e| e.position.vec2().distance(player))
        .min_by(f32::total_cmp);

    match target {
        Some(aim) => {
            commands.push(PlayerCommand::SetAim { x: aim.x, y: aim.y });
            commands.push(PlayerCommand::SetFiring { firing: true });
        }
        None => commands.push(PlayerCommand::SetFiring { firing: false }),
    }

    let retreat = match (target, threat) {
        (Some(enemy), Some(dist)) if dist < 220.0 => (player - enemy).normalize_or(Vec2::X),
        _ => Vec2::ZERO,
    };
    if retreat != Vec2::ZERO {
        commands.push(PlayerCommand::SetMovement {
            x: retreat.x,
            y: retreat.y,
        });
        if threat.is_some_and(|dist| dist < 90.0) {
            commands.push(PlayerCommand::Dash);
        }
    } else {
        // Drift back toward the center between fights.
        let center = Vec2::new(750.0, 450.0);
        let to_center = center - player;
        if to_center.length() > 40.0 {
            let dir = to_center.normalize_or(Vec2::ZERO);
            commands.push(PlayerCommand::SetMovement { x: dir.x, y: dir.y });
        } else {
            commands.push(PlayerCommand::SetMovement { x: 0.0, y: 0.0 });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_line_parses_with_flattened_trade() {
        let line: FeedLine =
            serde_json::from_str(r#"{"at_tick":120,"magnitude":1500.0,"sequence":42,"side":"sell"}"#)
                .unwrap();
        assert_eq!(line.at_tick, 120);
        assert_eq!(line.trade.magnitude, 1500.0);
        assert_eq!(line.trade.sequence, 42);
        assert_eq!(line.trade.side, TradeSide::Sell);

        // Side is optional on the wire.
        let line: FeedLine =
            serde_json::from_str(r#"{"at_tick":0,"magnitude":10.0,"sequence":1}"#).unwrap();
        assert_eq!(line.trade.side, TradeSide::Buy);
    }

    #[test]
    fn test_synthetic_feed_is_deterministic_and_ordered() {
        let a = synthetic_feed(7, 10_000);
        let b = synthetic_feed(7, 10_000);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.at_tick, y.at_tick);
            assert_eq!(x.trade, y.trade);
        }
        assert!(a.windows(2).all(|w| w[0].at_tick <= w[1].at_tick));
        assert!(a.iter().all(|l| l.at_tick < 10_000));
    }

    #[test]
    fn test_pilot_fires_at_the_nearest_enemy() {
        let mut engine = GameEngine::new(EngineConfig::default());
        engine.queue_command(PlayerCommand::Start);
        let mut snapshot = engine.tick();
        assert!(
            pilot_commands(&snapshot).iter().any(|c| matches!(
                c,
                PlayerCommand::SetFiring { firing: false }
            )),
            "no targets: hold fire"
        );

        engine.queue_trade(TradeEvent {
            magnitude: 50.0,
            sequence: 1,
            side: TradeSide::Buy,
        });
        snapshot = engine.tick();
        let commands = pilot_commands(&snapshot);
        let enemy = snapshot.enemies[0].position;
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetFiring { firing: true })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetAim { x, y } if *x == enemy.x && *y == enemy.y)));
    }
}
