//! Entity spawn factories.
//!
//! Everything that creates an entity goes through here, either directly at
//! setup time or through a [`SpawnRequest`] buffered during a frame and
//! flushed once the frame's systems have run.

use glam::DVec2;
use hecs::{Entity, World};

use superduck_ai::AiStrategy;
use superduck_core::constants::*;
use superduck_core::enums::{ItemKind, Side};
use superduck_core::error::SimError;
use superduck_core::types::{Position, Velocity};

use crate::components::*;

/// Everything needed to put a mob into the world.
pub struct MobSpec {
    pub position: Position,
    pub health: i32,
    pub walk_speed: f64,
    pub ranged: bool,
    pub boss: bool,
    pub ai: Box<dyn AiStrategy>,
}

/// A projectile about to be created.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSpawn {
    /// Where it starts (centre of the firer).
    pub origin: Position,
    /// Where it is aimed.
    pub target: Position,
    pub speed: f64,
    /// Firer's velocity, added on top of the aimed velocity.
    pub base_velocity: Velocity,
    pub damage: i32,
    pub owner: Entity,
    pub side: Side,
}

/// Deferred entity creation.
#[derive(Debug, Clone, Copy)]
pub enum SpawnRequest {
    Projectile(ProjectileSpawn),
    Item { position: Position, kind: ItemKind },
}

pub fn spawn_player(world: &mut World, position: Position) -> Result<Entity, SimError> {
    let character = CharacterState::new(PLAYER_MAX_HEALTH)?;
    Ok(world.spawn((
        position,
        Velocity::ZERO,
        Body::new(CHARACTER_WIDTH, CHARACTER_HEIGHT),
        character,
        PlayerState::default(),
    )))
}

pub fn spawn_mob(world: &mut World, spec: MobSpec) -> Result<Entity, SimError> {
    let character = CharacterState::new(spec.health)?;
    let mob = MobState::new(spec.walk_speed, spec.ranged, spec.boss)?;
    let body = if spec.boss {
        Body::new(CHARACTER_WIDTH * 2.0, CHARACTER_HEIGHT * 2.0)
    } else {
        Body::new(CHARACTER_WIDTH, CHARACTER_HEIGHT)
    };
    Ok(world.spawn((
        spec.position,
        Velocity::ZERO,
        body,
        character,
        mob,
        Brain(spec.ai),
    )))
}

pub fn spawn_item(world: &mut World, position: Position, kind: ItemKind) -> Entity {
    world.spawn((position, Body::new(ITEM_WIDTH, ITEM_HEIGHT), Item { kind }))
}

/// Aim along `target - origin` at `speed`, plus the firer's own velocity.
/// A zero aim vector leaves only the base velocity.
pub fn projectile_velocity(shot: &ProjectileSpawn) -> Velocity {
    let aim = DVec2::new(shot.target.x - shot.origin.x, shot.target.y - shot.origin.y)
        .normalize_or_zero()
        * shot.speed;
    Velocity::new(aim.x + shot.base_velocity.x, aim.y + shot.base_velocity.y)
}

pub fn spawn_projectile(world: &mut World, shot: &ProjectileSpawn) -> Entity {
    let half = PROJECTILE_SIZE / 2.0;
    world.spawn((
        Position::new(shot.origin.x - half, shot.origin.y - half),
        projectile_velocity(shot),
        Body::new(PROJECTILE_SIZE, PROJECTILE_SIZE),
        Projectile {
            owner: shot.owner,
            side: shot.side,
            damage: shot.damage,
            speed: shot.speed,
            lifetime: PROJECTILE_LIFETIME,
        },
    ))
}

/// Create every buffered entity, in request order.
pub fn flush_spawns(world: &mut World, buffer: &mut Vec<SpawnRequest>) {
    for request in buffer.drain(..) {
        match request {
            SpawnRequest::Projectile(shot) => {
                spawn_projectile(world, &shot);
            }
            SpawnRequest::Item { position, kind } => {
                spawn_item(world, position, kind);
            }
        }
    }
}
