//! Headless driver: runs a round of the demo arena with a simple autopilot
//! and prints the final snapshot as JSON.

mod logging;
mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use superduck_sim::core::commands::PlayerCommand;
use superduck_sim::core::constants::{DT, FRAME_RATE, PLAYER_MELEE_RANGE};
use superduck_sim::core::enums::RoundPhase;
use superduck_sim::core::state::GameStateSnapshot;
use superduck_sim::SimConfig;

/// Run a headless Super Duck round
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON round config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames to simulate (stops early when the round ends)
    #[arg(long, default_value_t = 60 * 60)]
    frames: u64,

    /// Overrides the config seed
    #[arg(long)]
    seed: Option<u64>,

    /// Turn demented mode on
    #[arg(long)]
    demented: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_json_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.demented {
        config.demented_mode = true;
    }
    Ok(config)
}

/// Walk at the nearest mob, shoot at it and swing when it is close.
fn autopilot(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let Some(player) = &snapshot.player else {
        return Vec::new();
    };
    let me = player.character.position;
    let nearest = snapshot
        .mobs
        .iter()
        .map(|mob| mob.character.position)
        .min_by(|a, b| me.distance_to(a).total_cmp(&me.distance_to(b)));
    let Some(target) = nearest else {
        return vec![PlayerCommand::Move {
            dir_x: 0.0,
            dir_y: 0.0,
        }];
    };

    let mut commands = vec![
        PlayerCommand::Move {
            dir_x: target.x - me.x,
            dir_y: target.y - me.y,
        },
        PlayerCommand::FireAt { target },
    ];
    if me.distance_to(&target) <= PLAYER_MELEE_RANGE {
        commands.push(PlayerCommand::Melee);
    }
    commands
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    let mut round = scenario::build_round(config, &scenario::ARENA)?;

    let mut snapshot = round.tick(0.0);
    for _ in 0..args.frames {
        round.queue_commands(autopilot(&snapshot));
        snapshot = round.tick(DT);
        if snapshot.phase != RoundPhase::Active {
            break;
        }
    }

    let seconds = snapshot.time.frame as f64 / f64::from(FRAME_RATE);
    info!(
        "round ended {:?} after {:.1}s with score {}",
        snapshot.phase, seconds, snapshot.score
    );
    let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}
