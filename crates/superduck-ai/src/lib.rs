//! Mob AI for Super Duck Invaders.
//!
//! Defines the strategy capability a mob delegates its movement and
//! targeting to, plus the stock behaviours. No ECS dependency: strategies
//! operate on a plain steering handle.

pub mod behaviors;
pub mod strategy;

pub use behaviors::{ChaseAi, DummyAi, PatrolAi, RangedAi};
pub use strategy::{AiContext, AiStrategy, MobSteering};
pub use superduck_core as core;
