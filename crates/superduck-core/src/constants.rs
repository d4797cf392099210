//! Simulation constants and tuning parameters.

use crate::enums::{Key, PowerupKind};

/// Nominal frame rate (Hz) used by the headless runner.
pub const FRAME_RATE: u32 = 60;

/// Seconds per nominal frame.
pub const DT: f64 = 1.0 / FRAME_RATE as f64;

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: f64 = 32.0;

// --- Demented mode ---

/// How long a character stays demented once it turns (seconds).
pub const DEMENTED_TIME: f64 = 10.0;

/// Timer horizon of the onset roll: the chance per frame is
/// `1 / max(1, DEMENTED_HORIZON - timer)`.
pub const DEMENTED_HORIZON: f64 = 2000.0;

/// Number of demented variant states.
pub const DEMENTED_STATE_COUNT: u8 = 4;

// --- Characters ---

pub const CHARACTER_WIDTH: f64 = 16.0;
pub const CHARACTER_HEIGHT: f64 = 16.0;

pub const PLAYER_MAX_HEALTH: i32 = 6;
pub const PLAYER_WALK_SPEED: f64 = 200.0;
pub const PLAYER_MELEE_RANGE: f64 = 40.0;
pub const PLAYER_MELEE_DAMAGE: i32 = 1;
pub const PLAYER_PROJECTILE_SPEED: f64 = 500.0;
pub const PLAYER_PROJECTILE_DAMAGE: i32 = 1;

/// Seconds between player shots. Halved by the rate-of-fire powerup.
pub const PLAYER_FIRE_COOLDOWN: f64 = 0.5;

/// Movement multiplier while super speed is active.
pub const SUPER_SPEED_FACTOR: f64 = 2.0;

/// Seconds between regeneration heals.
pub const REGENERATION_INTERVAL: f64 = 1.0;

// --- Mobs ---

/// Chance per frame that a ranged mob fires at its target.
pub const RANGED_FIRE_CHANCE: f64 = 0.01;

pub const MOB_PROJECTILE_SPEED: f64 = 300.0;
pub const MOB_PROJECTILE_DAMAGE: i32 = 1;

pub const MOB_MELEE_RANGE: f64 = 40.0;
pub const MOB_MELEE_DAMAGE: i32 = 1;
pub const MOB_MELEE_COOLDOWN: f64 = 1.0;

/// Death drop table: a roll below the bound (and at or above the previous
/// one) drops that powerup. Rolls of 0.25 and up drop nothing.
pub const POWERUP_DROP_TABLE: [(PowerupKind, f64); 5] = [
    (PowerupKind::ScoreMultiplier, 0.05),
    (PowerupKind::Invulnerable, 0.10),
    (PowerupKind::SuperSpeed, 0.15),
    (PowerupKind::RateOfFire, 0.20),
    (PowerupKind::Regeneration, 0.25),
];

pub const MOB_KILL_SCORE: u64 = 10;
pub const BOSS_KILL_SCORE: u64 = 100;

/// Kill score multiplier while the score multiplier powerup is active.
pub const SCORE_MULTIPLIER_FACTOR: u64 = 5;

// --- Items and projectiles ---

pub const ITEM_WIDTH: f64 = 16.0;
pub const ITEM_HEIGHT: f64 = 16.0;
pub const PROJECTILE_SIZE: f64 = 4.0;

/// Seconds a projectile flies before it expires.
pub const PROJECTILE_LIFETIME: f64 = 3.0;

// --- Cheats ---

/// How long a cheat stays active after triggering (seconds).
pub const CHEAT_ACTIVATION_TIME: f64 = 10.0;

/// How long a cheat blocks re-triggering after its active window (seconds).
pub const CHEAT_COOLDOWN_TIME: f64 = 60.0;

/// Konami code: grants all powerups.
pub const CHEAT_CODE_POWERUP: [Key; 10] = [
    Key::Up,
    Key::Up,
    Key::Down,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Left,
    Key::Right,
    Key::Char('b'),
    Key::Char('a'),
];

/// "mallard": walk through walls.
pub const CHEAT_CODE_NOCLIP: [Key; 7] = [
    Key::Char('m'),
    Key::Char('a'),
    Key::Char('l'),
    Key::Char('l'),
    Key::Char('a'),
    Key::Char('r'),
    Key::Char('d'),
];
