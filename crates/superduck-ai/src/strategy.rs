//! The AI strategy capability and the data it works on.

use superduck_core::enums::AiKind;
use superduck_core::query::WorldQuery;
use superduck_core::types::{Position, Velocity};

/// The slice of a mob an AI strategy may read and steer.
///
/// Strategies change `velocity` (through [`MobSteering::set_velocity`]) and
/// `target`; everything else is read-only context copied out of the mob.
#[derive(Debug, Clone)]
pub struct MobSteering {
    pub position: Position,
    pub size: (f64, f64),
    pub velocity: Velocity,
    /// Effective speed this frame (already halved in water).
    pub speed: f64,
    /// Last known attack target.
    pub target: Position,
    pub ranged: bool,
}

impl MobSteering {
    /// Point the mob along a direction vector at its current speed.
    /// A zero vector stops the mob.
    pub fn set_velocity(&mut self, dir_x: f64, dir_y: f64) {
        if dir_x == 0.0 && dir_y == 0.0 {
            self.velocity = Velocity::ZERO;
            return;
        }
        let magnitude = (dir_x * dir_x + dir_y * dir_y).sqrt();
        self.velocity = Velocity::new(dir_x * self.speed / magnitude, dir_y * self.speed / magnitude);
    }

    pub fn update_target_position(&mut self, target: Position) {
        self.target = target;
    }

    /// Centre of the mob's bounding box.
    pub fn center(&self) -> Position {
        Position::new(
            self.position.x + self.size.0 / 2.0,
            self.position.y + self.size.1 / 2.0,
        )
    }
}

/// Read-only world state available to strategies.
pub struct AiContext<'a> {
    /// Player position, if a live player exists.
    pub player: Option<Position>,
    pub world: &'a dyn WorldQuery,
}

/// Movement and targeting behaviour bound to a mob for its lifetime.
pub trait AiStrategy: Send + Sync {
    fn kind(&self) -> AiKind;

    /// Steer `mob` for this frame. Must not touch anything but the handle.
    fn update(&mut self, mob: &mut MobSteering, ctx: &AiContext<'_>, delta: f64);
}
