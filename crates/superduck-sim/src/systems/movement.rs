//! Kinematic integration with tile collision.
//!
//! Characters move one axis at a time and an axis step into a blocking
//! tile is cancelled, so they slide along walls. Projectiles that enter a
//! blocking tile are removed. The player skips collision under noclip.

use hecs::World;

use superduck_core::query::WorldQuery;
use superduck_core::types::{Position, Velocity};

use crate::components::{Body, PlayerState, Projectile};

/// Keeps a box flush against a wall from counting as inside it.
const EDGE_INSET: f64 = 1e-3;

/// Whether any corner of a box anchored at `pos` sits in a blocking tile.
pub fn box_blocked(map: &dyn WorldQuery, pos: &Position, size: (f64, f64)) -> bool {
    let left = pos.x + EDGE_INSET;
    let right = pos.x + size.0 - EDGE_INSET;
    let bottom = pos.y + EDGE_INSET;
    let top = pos.y + size.1 - EDGE_INSET;
    [(left, bottom), (right, bottom), (left, top), (right, top)]
        .iter()
        .any(|(x, y)| map.is_blocked_at(&Position::new(*x, *y)))
}

pub fn run(world: &mut World, map: &dyn WorldQuery, noclip: bool, delta: f64) {
    for (_entity, (pos, vel, body, projectile, player)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        &mut Body,
        Option<&Projectile>,
        Option<&PlayerState>,
    )>() {
        if body.removed || vel.is_zero() {
            continue;
        }

        if projectile.is_some() {
            let next = pos.advanced(vel, delta);
            if map.is_blocked_at(&body.center(&next)) {
                body.removed = true;
            } else {
                *pos = next;
            }
            continue;
        }

        if player.is_some() && noclip {
            *pos = pos.advanced(vel, delta);
            continue;
        }

        let step_x = Position::new(pos.x + vel.x * delta, pos.y);
        if !box_blocked(map, &step_x, body.size()) {
            *pos = step_x;
        }
        let step_y = Position::new(pos.x, pos.y + vel.y * delta);
        if !box_blocked(map, &step_y, body.size()) {
            *pos = step_y;
        }
    }
}
