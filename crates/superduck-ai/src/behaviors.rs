//! Stock AI behaviours.
//!
//! Each behaviour is a small state machine over a [`MobSteering`] handle.
//! Movement that would walk straight into a blocking tile falls back to
//! sliding along one axis, then to standing still.

use glam::DVec2;

use superduck_core::enums::AiKind;
use superduck_core::types::Position;

use crate::strategy::{AiContext, AiStrategy, MobSteering};

/// Does nothing. The mob stands wherever it was spawned.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyAi;

impl AiStrategy for DummyAi {
    fn kind(&self) -> AiKind {
        AiKind::Dummy
    }

    fn update(&mut self, _mob: &mut MobSteering, _ctx: &AiContext<'_>, _delta: f64) {}
}

/// Walks straight at the player while it is within sight.
#[derive(Debug, Clone, Copy)]
pub struct ChaseAi {
    pub sight_range: f64,
}

impl ChaseAi {
    pub fn new(sight_range: f64) -> Self {
        Self { sight_range }
    }
}

impl AiStrategy for ChaseAi {
    fn kind(&self) -> AiKind {
        AiKind::Chase
    }

    fn update(&mut self, mob: &mut MobSteering, ctx: &AiContext<'_>, _delta: f64) {
        let Some(player) = player_in_sight(mob, ctx, self.sight_range) else {
            mob.set_velocity(0.0, 0.0);
            return;
        };
        mob.update_target_position(player);
        let desired = to_vec(&player) - to_vec(&mob.position);
        let dir = passable_direction(mob, ctx, desired);
        mob.set_velocity(dir.x, dir.y);
    }
}

/// Walks back and forth between two waypoints, keeping an eye on the player.
#[derive(Debug, Clone)]
pub struct PatrolAi {
    pub waypoints: [Position; 2],
    pub sight_range: f64,
    /// How close counts as having reached a waypoint.
    pub arrive_radius: f64,
    next: usize,
}

impl PatrolAi {
    pub fn new(from: Position, to: Position, sight_range: f64) -> Self {
        Self {
            waypoints: [from, to],
            sight_range,
            arrive_radius: 4.0,
            next: 1,
        }
    }

    /// Index of the waypoint currently being walked to.
    pub fn heading_to(&self) -> usize {
        self.next
    }
}

impl AiStrategy for PatrolAi {
    fn kind(&self) -> AiKind {
        AiKind::Patrol
    }

    fn update(&mut self, mob: &mut MobSteering, ctx: &AiContext<'_>, _delta: f64) {
        if let Some(player) = player_in_sight(mob, ctx, self.sight_range) {
            mob.update_target_position(player);
        }

        if mob.position.distance_to(&self.waypoints[self.next]) <= self.arrive_radius {
            self.next = 1 - self.next;
        }

        let desired = to_vec(&self.waypoints[self.next]) - to_vec(&mob.position);
        let dir = passable_direction(mob, ctx, desired);
        mob.set_velocity(dir.x, dir.y);
    }
}

/// Holds a preferred distance from the player and keeps the target fresh
/// so the mob's ranged roll has somewhere to shoot.
#[derive(Debug, Clone, Copy)]
pub struct RangedAi {
    pub preferred_distance: f64,
    /// Dead band around the preferred distance where the mob stands still.
    pub tolerance: f64,
    pub sight_range: f64,
}

impl RangedAi {
    pub fn new(preferred_distance: f64, sight_range: f64) -> Self {
        Self {
            preferred_distance,
            tolerance: 16.0,
            sight_range,
        }
    }
}

impl AiStrategy for RangedAi {
    fn kind(&self) -> AiKind {
        AiKind::Ranged
    }

    fn update(&mut self, mob: &mut MobSteering, ctx: &AiContext<'_>, _delta: f64) {
        let Some(player) = player_in_sight(mob, ctx, self.sight_range) else {
            mob.set_velocity(0.0, 0.0);
            return;
        };
        mob.update_target_position(player);

        let toward = to_vec(&player) - to_vec(&mob.position);
        let distance = toward.length();
        let desired = if distance > self.preferred_distance + self.tolerance {
            toward
        } else if distance < self.preferred_distance - self.tolerance {
            -toward
        } else {
            DVec2::ZERO
        };
        let dir = passable_direction(mob, ctx, desired);
        mob.set_velocity(dir.x, dir.y);
    }
}

fn to_vec(pos: &Position) -> DVec2 {
    DVec2::new(pos.x, pos.y)
}

fn player_in_sight(mob: &MobSteering, ctx: &AiContext<'_>, sight_range: f64) -> Option<Position> {
    ctx.player
        .filter(|player| mob.position.distance_to(player) <= sight_range)
}

/// Pick the first of `desired`, its x component, or its y component whose
/// half-tile probe from the mob's centre is not blocked.
fn passable_direction(mob: &MobSteering, ctx: &AiContext<'_>, desired: DVec2) -> DVec2 {
    if desired == DVec2::ZERO {
        return DVec2::ZERO;
    }
    let probe = ctx.world.tile_size() / 2.0 + mob.size.0.max(mob.size.1) / 2.0;
    let center = to_vec(&mob.center());
    let candidates = [
        desired,
        DVec2::new(desired.x, 0.0),
        DVec2::new(0.0, desired.y),
    ];
    candidates
        .into_iter()
        .filter(|dir| *dir != DVec2::ZERO)
        .find(|dir| {
            let ahead = center + dir.normalize() * probe;
            !ctx.world.is_blocked_at(&Position::new(ahead.x, ahead.y))
        })
        .unwrap_or(DVec2::ZERO)
}
