//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Things that happened during a frame. Drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile left a character.
    ProjectileFired { side: Side, origin: Position },
    /// A character turned demented.
    DementedOnset { position: Position, state: u8 },
    /// A mob died. `score` is what it was worth after multipliers.
    MobKilled { position: Position, boss: bool, score: u64 },
    /// A dying mob left a powerup behind.
    PowerupDropped { position: Position, kind: PowerupKind },
    /// The player picked an item up.
    ItemCollected { item: ItemKind },
    /// A cheat code was entered and accepted.
    CheatActivated { cheat: CheatKind },
    /// The player died.
    PlayerDied,
}
