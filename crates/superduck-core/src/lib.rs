//! Core types and definitions for the Super Duck Invaders simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, enums, commands, state snapshots, events, constants and the
//! world query surface. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod query;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
