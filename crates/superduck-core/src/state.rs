//! Game state snapshot: the read-only view handed to rendering and HUD.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete visible state after a frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub score: u64,
    pub demented_mode: bool,
    pub player: Option<PlayerView>,
    pub mobs: Vec<MobView>,
    pub items: Vec<ItemView>,
    pub projectiles: Vec<ProjectileView>,
    pub cheats: CheatView,
    pub events: Vec<SimEvent>,
}

/// Fields every character exposes to the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterView {
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    /// Animation clock; 0 while standing still.
    pub state_time: f64,
    pub swimming: bool,
    pub demented: bool,
    pub demented_state: u8,
    pub current_health: i32,
    pub maximum_health: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub character: CharacterView,
    /// Remaining seconds per active powerup.
    pub powerups: Vec<(PowerupKind, f64)>,
    pub upgrades: Vec<UpgradeKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobView {
    pub character: CharacterView,
    pub ai: AiKind,
    pub ranged: bool,
    pub boss: bool,
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub position: Position,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub side: Side,
}

/// Cheat status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheatView {
    pub powerups_active: bool,
    pub noclip_active: bool,
    pub powerups_timer: f64,
    pub noclip_timer: f64,
}
