//! The built-in demo arena and its spawn markers.

use anyhow::{Context, Result};

use superduck_sim::ai::{ChaseAi, PatrolAi, RangedAi};
use superduck_sim::core::constants::DEFAULT_TILE_SIZE;
use superduck_sim::core::enums::{ItemKind, UpgradeKind};
use superduck_sim::core::types::Position;
use superduck_sim::world_setup::MobSpec;
use superduck_sim::{Round, SimConfig, TileMap};

/// `P` player, `M` mob, `B` boss. Everything else is terrain.
pub const ARENA: [&str; 9] = [
    "################",
    "#..............#",
    "#..M.......M...#",
    "#......~~~.....#",
    "#..o...~~~..B..#",
    "#......~~~.....#",
    "#.P.........M..#",
    "#..............#",
    "################",
];

const MOB_HEALTH: i32 = 3;
const MOB_WALK_SPEED: f64 = 60.0;
const BOSS_HEALTH: i32 = 12;
const BOSS_WALK_SPEED: f64 = 40.0;
const SIGHT_RANGE: f64 = 200.0;

/// Build a round from ASCII rows, spawning whatever the markers ask for.
///
/// Plain mobs cycle through chase, patrol and ranged brains in reading
/// order. The player starts standing on a gun.
pub fn build_round(config: SimConfig, rows: &[&str]) -> Result<Round> {
    let map = TileMap::from_ascii(rows, DEFAULT_TILE_SIZE).context("invalid arena layout")?;
    let mut round = Round::new(config, map);

    let height = rows.len();
    let mut mob_count = 0usize;
    for (row, line) in rows.iter().enumerate() {
        let grid_y = (height - 1 - row) as f64;
        for (col, glyph) in line.chars().enumerate() {
            let position = Position::new(col as f64 * DEFAULT_TILE_SIZE, grid_y * DEFAULT_TILE_SIZE);
            match glyph {
                'P' => {
                    round.spawn_player(position)?;
                    round.spawn_item(position, ItemKind::Upgrade(UpgradeKind::Gun));
                }
                'M' => {
                    round.spawn_mob(mob_at(position, mob_count))?;
                    mob_count += 1;
                }
                'B' => {
                    round.spawn_mob(MobSpec {
                        position,
                        health: BOSS_HEALTH,
                        walk_speed: BOSS_WALK_SPEED,
                        ranged: false,
                        boss: true,
                        ai: Box::new(ChaseAi::new(SIGHT_RANGE)),
                    })?;
                }
                _ => {}
            }
        }
    }
    Ok(round)
}

fn mob_at(position: Position, index: usize) -> MobSpec {
    let (ranged, ai): (bool, Box<dyn superduck_sim::ai::AiStrategy>) = match index % 3 {
        0 => (false, Box::new(ChaseAi::new(SIGHT_RANGE))),
        1 => {
            let far = Position::new(position.x, position.y - 3.0 * DEFAULT_TILE_SIZE);
            (false, Box::new(PatrolAi::new(position, far, SIGHT_RANGE)))
        }
        _ => (true, Box::new(RangedAi::new(120.0, SIGHT_RANGE))),
    };
    MobSpec {
        position,
        health: MOB_HEALTH,
        walk_speed: MOB_WALK_SPEED,
        ranged,
        boss: false,
        ai,
    }
}
