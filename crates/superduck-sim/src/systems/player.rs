//! Player system: powerup decay, regeneration, fire cooldown and turning
//! the requested movement direction into a velocity.

use glam::DVec2;
use hecs::World;

use superduck_core::constants::*;
use superduck_core::enums::PowerupKind;
use superduck_core::types::Velocity;

use crate::components::{Body, CharacterState, PlayerState};

/// Scramble a movement direction according to the demented state.
pub fn garble_direction(dir: DVec2, demented_state: u8) -> DVec2 {
    match demented_state {
        0 => -dir,
        1 => DVec2::new(dir.y, dir.x),
        2 => DVec2::new(-dir.x, dir.y),
        _ => DVec2::new(dir.x, -dir.y),
    }
}

/// Movement speed for the player's current state.
pub fn player_speed(character: &CharacterState, player: &PlayerState) -> f64 {
    let mut speed = PLAYER_WALK_SPEED;
    if player.has_powerup(PowerupKind::SuperSpeed) {
        speed *= SUPER_SPEED_FACTOR;
    }
    if character.swimming {
        speed /= 2.0;
    }
    speed
}

pub fn run(world: &mut World, delta: f64) {
    for (_entity, (vel, body, character, player)) in
        world.query_mut::<(&mut Velocity, &Body, &mut CharacterState, &mut PlayerState)>()
    {
        if body.removed {
            continue;
        }

        player.decay_powerups(delta);
        player.fire_cooldown = (player.fire_cooldown - delta).max(0.0);

        if player.has_powerup(PowerupKind::Regeneration) {
            player.regeneration_clock += delta;
            while player.regeneration_clock >= REGENERATION_INTERVAL {
                player.regeneration_clock -= REGENERATION_INTERVAL;
                character.heal(1);
            }
        } else {
            player.regeneration_clock = 0.0;
        }

        let mut dir = player.move_dir;
        if character.is_demented() {
            dir = garble_direction(dir, character.demented_state);
        }
        let speed = player_speed(character, player);
        *vel = Velocity::new(dir.x * speed, dir.y * speed);
    }
}
