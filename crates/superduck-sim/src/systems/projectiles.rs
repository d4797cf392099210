//! Projectile system: lifetime expiry and hits against characters.

use hecs::{Entity, World};

use superduck_core::enums::Side;
use superduck_core::types::{rects_intersect, Position};

use crate::combat;
use crate::components::{Body, CharacterState, MobState, Projectile};

struct Target {
    entity: Entity,
    position: Position,
    size: (f64, f64),
    side: Side,
}

pub fn run(world: &mut World, delta: f64) {
    for (_entity, (body, projectile)) in world.query_mut::<(&mut Body, &mut Projectile)>() {
        projectile.lifetime -= delta;
        if projectile.lifetime <= 0.0 {
            body.removed = true;
        }
    }

    let targets: Vec<Target> = {
        let mut query = world.query::<(&Position, &Body, &CharacterState, Option<&MobState>)>();
        let found = query
            .iter()
            .filter(|(_, (_, body, _, _))| !body.removed)
            .map(|(entity, (pos, body, _, mob))| Target {
                entity,
                position: *pos,
                size: body.size(),
                side: if mob.is_some() { Side::Mobs } else { Side::Player },
            })
            .collect();
        found
    };

    let mut hits: Vec<(Entity, i32)> = Vec::new();
    for (_entity, (pos, body, projectile)) in world.query_mut::<(&Position, &mut Body, &Projectile)>() {
        if body.removed {
            continue;
        }
        let hit = targets.iter().find(|t| {
            t.entity != projectile.owner
                && t.side != projectile.side
                && rects_intersect(*pos, body.size(), t.position, t.size)
        });
        if let Some(target) = hit {
            body.removed = true;
            hits.push((target.entity, projectile.damage));
        }
    }

    for (target, damage) in hits {
        combat::apply_damage(world, target, damage);
    }
}
