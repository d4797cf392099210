//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Key;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Set the movement direction. Components are normalised; (0, 0) stops.
    Move { dir_x: f64, dir_y: f64 },
    /// Swing at the closest character in front of the player.
    Melee,
    /// Fire toward a world position. Requires the gun upgrade.
    FireAt { target: Position },
    /// A raw key press, fed to the cheat matchers.
    KeyDown { key: Key },
    /// Toggle demented mode for the whole round.
    SetDementedMode { enabled: bool },
}
