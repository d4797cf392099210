//! Character system: swim state, demented timer, facing, animation clock
//! and death flagging for every character.

use hecs::World;
use log::debug;
use rand::Rng;

use superduck_core::constants::{DEMENTED_HORIZON, DEMENTED_STATE_COUNT, DEMENTED_TIME};
use superduck_core::enums::{Facing, TileLayer};
use superduck_core::events::SimEvent;
use superduck_core::query::WorldQuery;
use superduck_core::types::{Position, Velocity};

use crate::components::{Body, CharacterState};

/// Chance per frame of turning demented for a given timer value.
///
/// Grows as the timer climbs toward the horizon and saturates at 1.
pub fn demented_chance(timer: f64) -> f64 {
    1.0 / (DEMENTED_HORIZON - timer).max(1.0)
}

/// Advance one character by a frame. Returns true if it turned demented.
pub fn step<R: Rng>(
    character: &mut CharacterState,
    position: &Position,
    velocity: &Velocity,
    world: &dyn WorldQuery,
    demented_mode: bool,
    delta: f64,
    rng: &mut R,
) -> bool {
    character.swimming = world.query_at(TileLayer::Water, position);

    // Refreshed every frame, mode on or off.
    character.last_demented_timer = character.demented_timer;

    let mut onset = false;
    if demented_mode {
        character.demented_timer += delta;

        let chance = demented_chance(character.demented_timer);
        if rng.gen::<f64>() < chance {
            character.demented_timer = -DEMENTED_TIME;
            let draw = rng.gen::<f64>() * f64::from(DEMENTED_STATE_COUNT);
            character.demented_state = (draw as u8).min(DEMENTED_STATE_COUNT - 1);
            onset = true;
        }
    }

    // Horizontal first, then any vertical movement overrides it.
    if velocity.x < 0.0 {
        character.facing = Facing::Left;
    } else if velocity.x > 0.0 {
        character.facing = Facing::Right;
    }
    if velocity.y < 0.0 {
        character.facing = Facing::Front;
    } else if velocity.y > 0.0 {
        character.facing = Facing::Back;
    }

    if velocity.is_zero() {
        character.state_time = 0.0;
    } else {
        character.state_time += delta;
    }

    onset
}

/// Run the character step for every live character and flag the dead.
pub fn run<R: Rng>(
    world: &mut World,
    map: &dyn WorldQuery,
    demented_mode: bool,
    delta: f64,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) {
    for (entity, (pos, vel, body, character)) in
        world.query_mut::<(&Position, &Velocity, &mut Body, &mut CharacterState)>()
    {
        if body.removed {
            continue;
        }
        if step(character, pos, vel, map, demented_mode, delta, rng) {
            debug!("{entity:?} turned demented (state {})", character.demented_state);
            events.push(SimEvent::DementedOnset {
                position: *pos,
                state: character.demented_state,
            });
        }
        if character.is_dead() {
            body.removed = true;
        }
    }
}
