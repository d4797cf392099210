//! Mob system: AI steering, ranged and melee attacks, the explosion on
//! leaving demented mode, swim slowdown and death drops.

use hecs::{Entity, World};
use log::debug;
use rand::Rng;

use superduck_ai::{AiContext, MobSteering};
use superduck_core::constants::*;
use superduck_core::enums::{ItemKind, PowerupKind, Side};
use superduck_core::events::SimEvent;
use superduck_core::query::WorldQuery;
use superduck_core::types::{Position, Velocity};

use crate::combat;
use crate::components::*;
use crate::world_setup::SpawnRequest;

/// Per-round knobs for the mob system.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobRules {
    /// Roll the death drop separately instead of reusing the ranged roll.
    pub independent_drop_roll: bool,
    /// Kill score multiplier currently applied.
    pub score_factor: u64,
}

/// Map a uniform roll in [0, 1) onto the death drop table.
pub fn powerup_for_roll(roll: f64) -> Option<PowerupKind> {
    if roll < 0.0 {
        return None;
    }
    POWERUP_DROP_TABLE
        .iter()
        .find(|(_, upper)| roll < *upper)
        .map(|(kind, _)| *kind)
}

/// Position of the live player, if any.
pub fn player_position(world: &World) -> Option<Position> {
    let mut query = world.query::<(&Position, &Body, &PlayerState)>();
    let found = query
        .iter()
        .find(|(_, (_, body, _))| !body.removed)
        .map(|(_, (pos, _, _))| *pos);
    found
}

/// Run one frame for every mob. Returns the score earned from kills.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng>(
    world: &mut World,
    map: &dyn WorldQuery,
    rules: MobRules,
    delta: f64,
    rng: &mut R,
    spawns: &mut Vec<SpawnRequest>,
    events: &mut Vec<SimEvent>,
) -> u64 {
    let player = player_position(world);
    let ctx = AiContext { player, world: map };
    let mut swings: Vec<Entity> = Vec::new();
    let mut earned = 0;

    for (entity, (pos, vel, body, character, mob, brain)) in world.query_mut::<(
        &Position,
        &mut Velocity,
        &Body,
        &CharacterState,
        &mut MobState,
        &mut Brain,
    )>() {
        let mut steering = MobSteering {
            position: *pos,
            size: body.size(),
            velocity: *vel,
            speed: mob.speed,
            target: mob.target,
            ranged: mob.is_ranged(),
        };
        brain.0.update(&mut steering, &ctx, delta);
        *vel = steering.velocity;
        mob.target = steering.target;

        // Shared by the ranged check and, unless configured otherwise, the drop.
        let roll: f64 = rng.gen();

        if character.left_demented_mode() {
            let center = body.center(pos);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let aim = Position::new(center.x + f64::from(dx), center.y + f64::from(dy));
                    let shot = combat::fire_at(
                        entity,
                        Side::Mobs,
                        pos,
                        body,
                        vel,
                        aim,
                        MOB_PROJECTILE_SPEED,
                        MOB_PROJECTILE_DAMAGE,
                    );
                    events.push(SimEvent::ProjectileFired {
                        side: Side::Mobs,
                        origin: shot.origin,
                    });
                    spawns.push(SpawnRequest::Projectile(shot));
                }
            }
        }

        if roll < RANGED_FIRE_CHANCE && mob.is_ranged() && !character.swimming {
            let shot = combat::fire_at(
                entity,
                Side::Mobs,
                pos,
                body,
                vel,
                mob.target,
                MOB_PROJECTILE_SPEED,
                MOB_PROJECTILE_DAMAGE,
            );
            events.push(SimEvent::ProjectileFired {
                side: Side::Mobs,
                origin: shot.origin,
            });
            spawns.push(SpawnRequest::Projectile(shot));
        }

        mob.apply_swim_speed(character.swimming);

        mob.melee_cooldown = (mob.melee_cooldown - delta).max(0.0);
        if !mob.is_ranged() && !character.is_dead() && mob.melee_cooldown <= 0.0 {
            if let Some(player) = player {
                if pos.distance_to(&player) <= MOB_MELEE_RANGE {
                    swings.push(entity);
                    mob.melee_cooldown = MOB_MELEE_COOLDOWN;
                }
            }
        }

        if character.is_dead() {
            let base = if mob.is_boss() {
                BOSS_KILL_SCORE
            } else {
                MOB_KILL_SCORE
            };
            let score = base * rules.score_factor.max(1);
            earned += score;
            debug!("{entity:?} died at ({:.1}, {:.1})", pos.x, pos.y);
            events.push(SimEvent::MobKilled {
                position: *pos,
                boss: mob.is_boss(),
                score,
            });

            let drop_roll = if rules.independent_drop_roll {
                rng.gen()
            } else {
                roll
            };
            if let Some(kind) = powerup_for_roll(drop_roll) {
                debug!("{entity:?} dropped {kind:?}");
                spawns.push(SpawnRequest::Item {
                    position: *pos,
                    kind: ItemKind::Powerup(kind),
                });
                events.push(SimEvent::PowerupDropped {
                    position: *pos,
                    kind,
                });
            }
        }
    }

    for attacker in swings {
        combat::melee(world, attacker, MOB_MELEE_RANGE, MOB_MELEE_DAMAGE);
    }

    earned
}
