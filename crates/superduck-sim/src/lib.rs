//! Round simulation for Super Duck Invaders.
//!
//! Owns the hecs ECS world, steps every entity once per frame in a fixed
//! order, and produces `GameStateSnapshot`s for the presentation layer.

pub mod cheats;
pub mod combat;
pub mod components;
pub mod engine;
pub mod map;
pub mod systems;
pub mod world_setup;

pub use engine::{Round, SimConfig};
pub use map::TileMap;
pub use superduck_ai as ai;
pub use superduck_core as core;
