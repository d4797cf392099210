//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::enums::Facing;

/// 2D position in world space (pixels). y grows upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in world space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames stepped so far.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Discretised cardinal direction from this position toward `other`.
    ///
    /// The dominant axis wins; an exact diagonal resolves vertically.
    pub fn direction_to(&self, other: &Position) -> Facing {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        if dx.abs() > dy.abs() {
            if dx < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            }
        } else if dy < 0.0 {
            Facing::Front
        } else {
            Facing::Back
        }
    }

    /// Offset this position by a velocity over `delta` seconds.
    pub fn advanced(&self, velocity: &Velocity, delta: f64) -> Position {
        Position::new(self.x + velocity.x * delta, self.y + velocity.y * delta)
    }
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl SimTime {
    /// Advance by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        self.frame += 1;
        self.elapsed_secs += delta;
    }
}

/// Axis-aligned bounding box overlap between two rectangles anchored at
/// their bottom-left corners.
pub fn rects_intersect(a: Position, a_size: (f64, f64), b: Position, b_size: (f64, f64)) -> bool {
    a.x < b.x + b_size.0 && b.x < a.x + a_size.0 && a.y < b.y + b_size.1 && b.y < a.y + a_size.1
}
