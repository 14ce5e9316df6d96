//! Engine-fixed constants. Gameplay tuning lives in `config`.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Projectiles ---

/// Number of projectile entities pre-spawned per session. Firing reuses
/// inactive pool slots; when every slot is live the shot is skipped.
pub const PROJECTILE_POOL_SIZE: usize = 40;

/// Damage dealt by one projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 1;

// --- Hit feedback ---

/// Duration of the enemy hurt flash (milliseconds).
pub const ENEMY_HURT_FLASH_MS: u64 = 120;

/// Half-period of the player invulnerability blink (milliseconds).
pub const INVULN_FLASH_INTERVAL_MS: u64 = 100;

/// Render alpha for enemies still in their spawn-activation delay.
pub const INERT_ALPHA: f32 = 0.6;

/// Dimmed alpha for the player invulnerability blink.
pub const FLASH_ALPHA: f32 = 0.5;

// --- Session ---

/// Delay after defeat before a restart command is accepted (milliseconds).
pub const RESTART_DELAY_MS: u64 = 800;
