//! Snapshot system: reads the world into a `GameStateSnapshot`.

use hecs::World;

use superduck_core::enums::RoundPhase;
use superduck_core::events::SimEvent;
use superduck_core::state::*;
use superduck_core::types::{Position, SimTime, Velocity};

use crate::components::*;

/// Round-level values that live outside the ECS world.
pub struct RoundStatus {
    pub time: SimTime,
    pub phase: RoundPhase,
    pub score: u64,
    pub demented_mode: bool,
    pub cheats: CheatView,
}

fn character_view(pos: &Position, vel: &Velocity, character: &CharacterState) -> CharacterView {
    CharacterView {
        position: *pos,
        velocity: *vel,
        facing: character.facing,
        state_time: character.state_time,
        swimming: character.swimming,
        demented: character.is_demented(),
        demented_state: character.demented_state,
        current_health: character.current_health(),
        maximum_health: character.maximum_health(),
    }
}

pub fn build_snapshot(world: &World, status: RoundStatus, events: Vec<SimEvent>) -> GameStateSnapshot {
    let player = world
        .query::<(&Position, &Velocity, &CharacterState, &PlayerState)>()
        .iter()
        .next()
        .map(|(_, (pos, vel, character, player))| PlayerView {
            character: character_view(pos, vel, character),
            powerups: player.active_powerups(),
            upgrades: player.upgrades(),
        });

    let mobs = world
        .query::<(&Position, &Velocity, &CharacterState, &MobState, &Brain)>()
        .iter()
        .map(|(_, (pos, vel, character, mob, brain))| MobView {
            character: character_view(pos, vel, character),
            ai: brain.0.kind(),
            ranged: mob.is_ranged(),
            boss: mob.is_boss(),
            speed: mob.speed,
        })
        .collect();

    let items = world
        .query::<(&Position, &Item)>()
        .iter()
        .map(|(_, (pos, item))| ItemView {
            position: *pos,
            kind: item.kind,
        })
        .collect();

    let projectiles = world
        .query::<(&Position, &Velocity, &Projectile)>()
        .iter()
        .map(|(_, (pos, vel, projectile))| ProjectileView {
            position: *pos,
            velocity: *vel,
            side: projectile.side,
        })
        .collect();

    GameStateSnapshot {
        time: status.time,
        phase: status.phase,
        score: status.score,
        demented_mode: status.demented_mode,
        player,
        mobs,
        items,
        projectiles,
        cheats: status.cheats,
        events,
    }
}
