//! Melee and ranged attack resolution.

use hecs::{Entity, World};
use log::debug;

use superduck_core::enums::{PowerupKind, Side};
use superduck_core::types::{Position, Velocity};

use crate::components::*;
use crate::world_setup::ProjectileSpawn;

/// Deal damage to a character. The player ignores damage while
/// invulnerable. Returns whether the damage landed.
pub fn apply_damage(world: &World, target: Entity, damage: i32) -> bool {
    if let Ok(player) = world.get::<&PlayerState>(target) {
        if player.has_powerup(PowerupKind::Invulnerable) {
            return false;
        }
    }
    match world.get::<&mut CharacterState>(target) {
        Ok(mut character) => {
            character.damage(damage);
            true
        }
        Err(_) => false,
    }
}

/// Swing a melee attack from `attacker`.
///
/// A mob can only hit the player. Anyone else hits the single closest live
/// character in range that lies in the facing direction; on a distance tie
/// the first one found wins. Returns the entity that was hit.
pub fn melee(world: &World, attacker: Entity, range: f64, damage: i32) -> Option<Entity> {
    let (origin, facing, is_mob) = {
        let entity = world.entity(attacker).ok()?;
        let origin = *entity.get::<&Position>()?;
        let facing = entity.get::<&CharacterState>()?.facing;
        (origin, facing, entity.has::<MobState>())
    };

    let in_reach = |pos: &Position| origin.distance_to(pos) <= range && origin.direction_to(pos) == facing;

    let target = if is_mob {
        let mut query = world.query::<(&Position, &Body, &PlayerState)>();
        let player = query
            .iter()
            .find(|(_, (_, body, _))| !body.removed)
            .filter(|(_, (pos, _, _))| in_reach(pos))
            .map(|(entity, _)| entity);
        player
    } else {
        let mut closest: Option<(Entity, f64)> = None;
        let mut query = world.query::<(&Position, &Body, &CharacterState)>();
        for (entity, (pos, body, _)) in query.iter() {
            if entity == attacker || body.removed || !in_reach(pos) {
                continue;
            }
            let distance = origin.distance_to(pos);
            if closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((entity, distance));
            }
        }
        closest.map(|(entity, _)| entity)
    };

    let target = target?;
    if apply_damage(world, target, damage) {
        debug!("{attacker:?} hit {target:?} in melee for {damage}");
        Some(target)
    } else {
        None
    }
}

/// A shot from the centre of a character toward `target`, inheriting the
/// character's current velocity.
#[allow(clippy::too_many_arguments)]
pub fn fire_at(
    owner: Entity,
    side: Side,
    position: &Position,
    body: &Body,
    velocity: &Velocity,
    target: Position,
    speed: f64,
    damage: i32,
) -> ProjectileSpawn {
    ProjectileSpawn {
        origin: body.center(position),
        target,
        speed,
        base_velocity: *velocity,
        damage,
        owner,
        side,
    }
}
