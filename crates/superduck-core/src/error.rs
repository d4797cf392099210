//! Error types for construction and configuration failures.

use thiserror::Error;

/// Rejected construction of simulation objects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("maximum health must be positive, got {0}")]
    InvalidHealth(i32),
    #[error("walk speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f64),
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(f64),
    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
    #[error("round already has a player")]
    PlayerExists,
}

/// Failure to load a simulation config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
