use superduck_sim::ai::{ChaseAi, DummyAi};
use superduck_sim::core::commands::PlayerCommand;
use superduck_sim::core::constants::*;
use superduck_sim::core::enums::*;
use superduck_sim::core::events::SimEvent;
use superduck_sim::core::state::GameStateSnapshot;
use superduck_sim::core::types::Position;
use superduck_sim::world_setup::MobSpec;
use superduck_sim::{Round, SimConfig, TileMap};

fn open_arena() -> TileMap {
    TileMap::from_ascii(
        &[
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
            "............",
        ],
        32.0,
    )
    .unwrap()
}

fn dummy(x: f64, y: f64, health: i32) -> MobSpec {
    MobSpec {
        position: Position::new(x, y),
        health,
        walk_speed: 60.0,
        ranged: false,
        boss: false,
        ai: Box::new(DummyAi),
    }
}

fn run_frames(round: &mut Round, frames: usize) -> GameStateSnapshot {
    let mut snap = round.tick(DT);
    for _ in 1..frames {
        snap = round.tick(DT);
    }
    snap
}

#[test]
fn melee_kill_wins_the_round() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(100.0, 100.0)).unwrap();
    // Directly below the player, who faces front by default
    round.spawn_mob(dummy(100.0, 75.0, 1)).unwrap();

    round.queue_command(PlayerCommand::Melee);
    let snap = round.tick(DT);

    assert!(snap.mobs.is_empty());
    assert_eq!(snap.phase, RoundPhase::Won);
    assert_eq!(snap.score, MOB_KILL_SCORE);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::MobKilled { score, .. } if *score == MOB_KILL_SCORE)));

    // A settled round no longer advances
    let frame = snap.time.frame;
    let snap = round.tick(DT);
    assert_eq!(snap.time.frame, frame);
}

#[test]
fn surrounding_mobs_kill_the_player() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(150.0, 120.0)).unwrap();
    // All above the player, so their default front facing points at it
    for (x, y) in [(150.0, 140.0), (140.0, 150.0), (160.0, 150.0)] {
        round.spawn_mob(dummy(x, y, 3)).unwrap();
    }

    let mut died = false;
    for _ in 0..(60 * 10) {
        let snap = round.tick(DT);
        if snap.events.contains(&SimEvent::PlayerDied) {
            died = true;
            assert!(snap.player.is_none());
            assert_eq!(snap.phase, RoundPhase::Lost);
            break;
        }
    }
    assert!(died, "three mobs in melee range should kill the player");
    assert_eq!(round.phase(), RoundPhase::Lost);
}

#[test]
fn chasing_mob_closes_in() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(300.0, 120.0)).unwrap();
    round
        .spawn_mob(MobSpec {
            position: Position::new(60.0, 120.0),
            health: 3,
            walk_speed: 60.0,
            ranged: false,
            boss: false,
            ai: Box::new(ChaseAi::new(500.0)),
        })
        .unwrap();

    let snap = run_frames(&mut round, 60);
    let mob = &snap.mobs[0].character;
    assert!((mob.position.x - 120.0).abs() < 1.5, "x = {}", mob.position.x);
    assert_eq!(mob.position.y, 120.0);
    assert_eq!(mob.facing, Facing::Right);
}

#[test]
fn powerup_pickup_shows_full_duration() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(100.0, 100.0)).unwrap();
    round.spawn_mob(dummy(300.0, 200.0, 3)).unwrap();
    round.spawn_item(
        Position::new(104.0, 104.0),
        ItemKind::Powerup(PowerupKind::Regeneration),
    );

    let snap = round.tick(DT);
    assert!(snap.items.is_empty());
    let player = snap.player.unwrap();
    assert_eq!(
        player.powerups,
        vec![(PowerupKind::Regeneration, PowerupKind::Regeneration.max_duration())]
    );
    assert!(snap.events.contains(&SimEvent::ItemCollected {
        item: ItemKind::Powerup(PowerupKind::Regeneration)
    }));

    let snap = run_frames(&mut round, 60);
    let remaining = snap.player.unwrap().powerups[0].1;
    assert!((remaining - (3.0 - 60.0 * DT)).abs() < 1e-9);
}

#[test]
fn noclip_cheat_walks_through_walls() {
    let map = TileMap::from_ascii(&["......", "..#...", "......"], 32.0).unwrap();

    let mut blocked = Round::new(SimConfig::default(), map.clone());
    blocked.spawn_player(Position::new(40.0, 40.0)).unwrap();
    blocked.spawn_mob(dummy(170.0, 70.0, 3)).unwrap();
    blocked.queue_command(PlayerCommand::Move { dir_x: 1.0, dir_y: 0.0 });
    let snap = run_frames(&mut blocked, 30);
    let x = snap.player.unwrap().character.position.x;
    assert!(x < 64.0, "wall should stop the player, got x = {x}");

    let mut ghost = Round::new(SimConfig::default(), map);
    ghost.spawn_player(Position::new(40.0, 40.0)).unwrap();
    ghost.spawn_mob(dummy(170.0, 70.0, 3)).unwrap();
    ghost.queue_commands(
        "mallard"
            .chars()
            .map(|c| PlayerCommand::KeyDown { key: Key::Char(c) }),
    );
    ghost.queue_command(PlayerCommand::Move { dir_x: 1.0, dir_y: 0.0 });
    let snap = run_frames(&mut ghost, 30);
    assert!(snap.cheats.noclip_active);
    let x = snap.player.unwrap().character.position.x;
    assert!(x > 96.0, "noclip player should pass the wall, got x = {x}");
}

#[test]
fn swimming_player_moves_at_half_speed() {
    let map = TileMap::from_ascii(&["~~~~", "~~~~", "...."], 32.0).unwrap();
    let mut round = Round::new(SimConfig::default(), map);
    round.spawn_player(Position::new(10.0, 70.0)).unwrap();
    round.spawn_mob(dummy(100.0, 5.0, 3)).unwrap();
    round.queue_command(PlayerCommand::Move { dir_x: 1.0, dir_y: 0.0 });

    let snap = round.tick(DT);
    let character = snap.player.unwrap().character;
    assert!(character.swimming);
    assert_eq!(character.velocity.x, PLAYER_WALK_SPEED / 2.0);

    let swimmer = &snap.mobs[0];
    assert!(!swimmer.character.swimming);
    assert_eq!(swimmer.speed, 60.0);
}

#[test]
fn commands_arrive_as_json() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(100.0, 100.0)).unwrap();
    round.spawn_mob(dummy(300.0, 200.0, 3)).unwrap();

    let commands: Vec<PlayerCommand> = serde_json::from_str(
        r#"[
            { "type": "SetDementedMode", "enabled": true },
            { "type": "Move", "dir_x": 0.0, "dir_y": 2.0 }
        ]"#,
    )
    .unwrap();
    round.queue_commands(commands);
    // Facing follows the previous frame's velocity
    let snap = run_frames(&mut round, 2);

    assert!(snap.demented_mode);
    assert!(round.config().demented_mode);
    let character = snap.player.unwrap().character;
    assert!(character.velocity.y > 0.0);
    assert_eq!(character.facing, Facing::Back);
}

#[test]
fn boss_fights_in_melee_only() {
    let mut round = Round::new(SimConfig::default(), open_arena());
    round.spawn_player(Position::new(100.0, 100.0)).unwrap();
    round
        .spawn_mob(MobSpec {
            position: Position::new(200.0, 100.0),
            health: 10,
            walk_speed: 40.0,
            ranged: true,
            boss: true,
            ai: Box::new(DummyAi),
        })
        .unwrap();

    let snap = run_frames(&mut round, 600);
    let boss = &snap.mobs[0];
    assert!(boss.boss);
    assert!(!boss.ranged);
    assert!(snap.projectiles.is_empty());
}
