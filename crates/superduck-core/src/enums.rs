//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Cardinal direction a character is oriented toward.
/// Front faces the camera (moving down), Back faces away (moving up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Front,
    Back,
    Left,
    Right,
}

/// Timed buffs the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerupKind {
    ScoreMultiplier,
    Invulnerable,
    SuperSpeed,
    RateOfFire,
    Regeneration,
}

impl PowerupKind {
    /// Every powerup, in drop-table order.
    pub const ALL: [PowerupKind; 5] = [
        PowerupKind::ScoreMultiplier,
        PowerupKind::Invulnerable,
        PowerupKind::SuperSpeed,
        PowerupKind::RateOfFire,
        PowerupKind::Regeneration,
    ];

    /// Duration granted by a pickup of this kind (seconds).
    pub fn max_duration(self) -> f64 {
        match self {
            PowerupKind::Regeneration => 3.0,
            PowerupKind::ScoreMultiplier
            | PowerupKind::Invulnerable
            | PowerupKind::SuperSpeed
            | PowerupKind::RateOfFire => 10.0,
        }
    }
}

/// Permanent capabilities the player can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Unlocks ranged fire.
    Gun,
}

/// Tile-map layers the simulation classifies cells against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileLayer {
    Water,
    Collision,
    Obstacles,
}

/// Keyboard keys relevant to cheat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// A letter key, lower-case.
    Char(char),
}

/// The two cheat codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheatKind {
    /// Grants every powerup for the activation window.
    AllPowerups,
    /// Lets the player walk through collision tiles.
    Noclip,
}

/// Which AI strategy drives a mob (for display only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiKind {
    Dummy,
    Chase,
    Patrol,
    Ranged,
}

/// Which side an entity fights for. Projectiles never hit their own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Mobs,
}

/// Top-level state of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Active,
    Won,
    Lost,
}

/// Kind of item lying on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Powerup(PowerupKind),
    Upgrade(UpgradeKind),
}
