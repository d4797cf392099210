//! Cleanup system: despawns every entity flagged as removed.

use hecs::{Entity, World};

use crate::components::Body;

/// Despawn removed entities. Runs last in the frame so nothing is deleted
/// while another system is iterating. Uses a pre-allocated buffer.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, body) in world.query_mut::<&Body>() {
        if body.removed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
