//! ECS systems that operate on the round's world each frame.
//!
//! Systems are free functions over `&mut World`. They do not own state;
//! anything that outlives a frame lives in components or the engine.

pub mod character;
pub mod cleanup;
pub mod items;
pub mod mob;
pub mod movement;
pub mod player;
pub mod projectiles;
pub mod snapshot;
