//! The fixed-rate simulation engine.
//!
//! `GameEngine` owns the hecs ECS world and everything around it: queued
//! player commands and market trades drain at the tick boundary, systems
//! run in a fixed order, and each tick ends with a `GameStateSnapshot`.
//! The engine is fully headless, which is what makes runs reproducible
//! from a seed and a script.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use riptide_core::commands::PlayerCommand;
use riptide_core::components::Health;
use riptide_core::config::GameConfig;
use riptide_core::constants::RESTART_DELAY_MS;
use riptide_core::enums::GamePhase;
use riptide_core::events::GameEvent;
use riptide_core::state::{GameStateSnapshot, SessionResult};
use riptide_core::types::{ticks_from_ms, SimTime};
use riptide_feed::classify::TierLadder;
use riptide_feed::event::TradeEvent;

use crate::market::{self, MarketIntake};
use crate::mint::{MintSink, NullSink};
use crate::session::Session;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same inputs = same simulation.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// Held input state, written by commands and read by the player system.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Movement direction, length clamped to 1.
    pub move_dir: Vec2,
    /// Aim point in world space.
    pub aim: Vec2,
    pub firing: bool,
    /// One-shot dash trigger, consumed by the player system.
    pub dash_queued: bool,
}

/// Owns the world, the clock, and every piece of per-session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    seed: u64,
    config: GameConfig,
    ladder: TierLadder,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    trade_queue: VecDeque<TradeEvent>,
    input: InputState,
    session: Session,
    intake: MarketIntake,
    player: Option<Entity>,
    projectiles: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    mint_sink: Box<dyn MintSink>,
    result: Option<SessionResult>,
    restart_at_tick: u64,
}

impl GameEngine {
    /// Create a new engine with the given config and no result sink.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_mint_sink(config, Box::new(NullSink))
    }

    /// Create a new engine that publishes session results to `mint_sink`.
    pub fn with_mint_sink(config: EngineConfig, mint_sink: Box<dyn MintSink>) -> Self {
        let ladder = TierLadder::from_config(&config.game.spawning);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            seed: config.seed,
            config: config.game,
            ladder,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            trade_queue: VecDeque::new(),
            input: InputState::default(),
            session: Session::default(),
            intake: MarketIntake::default(),
            player: None,
            projectiles: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            mint_sink,
            result: None,
            restart_at_tick: 0,
        }
    }

    /// Queue a player command; it takes effect at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Queue a market trade for processing at the next tick boundary.
    pub fn queue_trade(&mut self, trade: TradeEvent) {
        self.trade_queue.push_back(trade);
    }

    /// Queue multiple trades.
    pub fn queue_trades(&mut self, trades: impl IntoIterator<Item = TradeEvent>) {
        self.trade_queue.extend(trades);
    }

    /// Run one tick: drain queued inputs, step the systems, and build the
    /// snapshot for this tick.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        self.process_trades();

        match self.phase {
            GamePhase::Playing => {
                self.run_systems();
                self.time.advance();
            }
            // Keep the clock moving so the restart delay can elapse.
            GamePhase::GameOver => self.time.advance(),
            GamePhase::Loading => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.session,
            events,
            self.result.clone(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the active gameplay config.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Final result of the last finished session, if any.
    pub fn result(&self) -> Option<&SessionResult> {
        self.result.as_ref()
    }

    /// Restore player health, clamped to max. For pickup layers on top of
    /// the engine; ignored outside a live session.
    pub fn heal_player(&mut self, amount: i32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(player) = self.player {
            systems::player::heal(&mut self.world, player, amount, &self.config, self.time.tick);
        }
    }

    /// Get a mutable reference to the ECS world (for test fixtures).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn player_entity(&self) -> Option<Entity> {
        self.player
    }

    #[cfg(test)]
    pub fn projectile_pool(&self) -> &[Entity] {
        &self.projectiles
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => match self.phase {
                GamePhase::Loading => self.start_session(),
                GamePhase::GameOver => {
                    if self.time.tick >= self.restart_at_tick {
                        self.start_session();
                    } else {
                        debug!(
                            "restart ignored at tick {}, accepted from {}",
                            self.time.tick, self.restart_at_tick
                        );
                    }
                }
                GamePhase::Playing => {}
            },
            PlayerCommand::SetMovement { x, y } => {
                let dir = Vec2::new(x, y);
                if dir.is_finite() {
                    self.input.move_dir = dir.clamp_length_max(1.0);
                } else {
                    warn!("ignoring non-finite movement input");
                }
            }
            PlayerCommand::Dash => {
                if self.phase == GamePhase::Playing {
                    self.input.dash_queued = true;
                }
            }
            PlayerCommand::SetAim { x, y } => {
                let aim = Vec2::new(x, y);
                if aim.is_finite() {
                    self.input.aim = aim;
                } else {
                    warn!("ignoring non-finite aim input");
                }
            }
            PlayerCommand::SetFiring { firing } => {
                self.input.firing = firing;
            }
        }
    }

    /// Process all queued trades. Trades arriving outside a live session
    /// are dropped.
    fn process_trades(&mut self) {
        while let Some(trade) = self.trade_queue.pop_front() {
            if self.phase != GamePhase::Playing {
                debug!("dropping trade (seq {}): no active session", trade.sequence);
                continue;
            }
            market::apply_trade(
                &mut self.world,
                &mut self.rng,
                &self.config,
                &self.ladder,
                &mut self.session,
                &mut self.intake,
                &mut self.events,
                self.player,
                self.time.tick,
                &trade,
            );
        }
    }

    /// Reset everything and begin a fresh session. A restarted session is
    /// indistinguishable from a fresh engine: the RNG is reseeded and all
    /// per-session state is rebuilt from scratch.
    fn start_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.session = Session::default();
        self.intake.reset();
        self.result = None;
        self.restart_at_tick = 0;
        self.despawn_buffer.clear();
        self.input = InputState::default();
        // Aim just below the player so the default facing is Down.
        let center = self.config.world.center();
        self.input.aim = Vec2::new(center.x, center.y + 1.0);

        self.player = Some(world_setup::spawn_player(&mut self.world, &self.config));
        self.projectiles = world_setup::spawn_projectile_pool(&mut self.world, &self.config);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::SessionStarted);
        info!("session started (seed {})", self.seed);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Player input, dash, and firing
        systems::player::run(
            &mut self.world,
            &mut self.input,
            &self.config,
            &self.projectiles,
            self.time.tick,
            &mut self.events,
        );
        // 2. Enemy activation and seek
        systems::enemy::run(&mut self.world, self.player, self.time.tick);
        // 3. Projectile lifespan and bounds
        systems::projectile::run(&mut self.world, &self.config.world, self.time.tick);
        // 4. Movement integration and world clamp
        systems::movement::run(&mut self.world, &self.config.world);
        // 5. Overlap detection
        let contacts = systems::collision::gather(&self.world, self.player);
        // 6. Damage resolution
        systems::combat::resolve(
            &mut self.world,
            &contacts,
            self.player,
            &mut self.session,
            &mut self.despawn_buffer,
            &mut self.events,
            &self.config,
            self.time.tick,
        );
        // 7. Despawn killed enemies
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        // 8. Session end check
        self.check_player_death();
    }

    /// Freeze the session the moment the player dies: result captured,
    /// sink notified once, restart delay armed.
    fn check_player_death(&mut self) {
        if self.result.is_some() {
            return;
        }
        let dead = match self.player {
            Some(player) => self
                .world
                .get::<&Health>(player)
                .map(|health| health.current <= 0)
                .unwrap_or(true),
            None => return,
        };
        if !dead {
            return;
        }

        let result = self.session.result();
        self.events.push(GameEvent::PlayerDied {
            final_score: result.final_score,
            final_wave: result.final_wave,
        });
        if let Err(err) = self.mint_sink.submit(&result) {
            warn!("result submission failed: {err:#}");
        }
        info!(
            "session over: score {} wave {} kills {}",
            result.final_score, result.final_wave, result.kills.total
        );
        self.result = Some(result);
        self.phase = GamePhase::GameOver;
        self.restart_at_tick = self.time.tick + ticks_from_ms(RESTART_DELAY_MS);
    }
}
