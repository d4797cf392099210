//! Round engine: the core of the game.
//!
//! `Round` owns the hecs ECS world, the tile map, the RNG and the cheat
//! matchers, processes player commands, runs all systems in a fixed order
//! and produces `GameStateSnapshot`s. Completely headless, so the same seed
//! and command stream always replay the same round.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use superduck_core::commands::PlayerCommand;
use superduck_core::constants::*;
use superduck_core::enums::*;
use superduck_core::error::{ConfigError, SimError};
use superduck_core::events::SimEvent;
use superduck_core::state::GameStateSnapshot;
use superduck_core::types::{Position, SimTime, Velocity};

use crate::cheats::CheatProcessor;
use crate::combat;
use crate::components::*;
use crate::map::TileMap;
use crate::systems;
use crate::systems::mob::MobRules;
use crate::systems::snapshot::RoundStatus;
use crate::world_setup::{self, MobSpec, SpawnRequest};

/// Configuration for starting a new round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same round.
    pub seed: u64,
    /// Whether characters can randomly turn demented.
    pub demented_mode: bool,
    /// Roll a mob's death drop separately from its ranged-fire roll.
    /// Off by default, which reuses the single per-frame roll for both.
    pub independent_drop_roll: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            demented_mode: false,
            independent_drop_roll: false,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A single round: one map, one player, any number of mobs.
pub struct Round {
    world: World,
    map: TileMap,
    config: SimConfig,
    time: SimTime,
    phase: RoundPhase,
    rng: ChaCha8Rng,
    cheats: CheatProcessor,
    player: Option<Entity>,
    score: u64,
    command_queue: VecDeque<PlayerCommand>,
    spawn_buffer: Vec<SpawnRequest>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
}

impl Round {
    pub fn new(config: SimConfig, map: TileMap) -> Self {
        info!(
            "starting round on {}x{} map (seed {}, demented mode {})",
            map.width(),
            map.height(),
            config.seed,
            config.demented_mode
        );
        Self {
            world: World::new(),
            map,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: RoundPhase::default(),
            cheats: CheatProcessor::default(),
            player: None,
            score: 0,
            command_queue: VecDeque::new(),
            spawn_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Put the player into the round. A round has exactly one player.
    pub fn spawn_player(&mut self, position: Position) -> Result<Entity, SimError> {
        if self.player.is_some() {
            return Err(SimError::PlayerExists);
        }
        let entity = world_setup::spawn_player(&mut self.world, position)?;
        self.player = Some(entity);
        Ok(entity)
    }

    pub fn spawn_mob(&mut self, spec: MobSpec) -> Result<Entity, SimError> {
        world_setup::spawn_mob(&mut self.world, spec)
    }

    pub fn spawn_item(&mut self, position: Position, kind: ItemKind) -> Entity {
        world_setup::spawn_item(&mut self.world, position, kind)
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the round by `delta` seconds and return the resulting snapshot.
    pub fn tick(&mut self, delta: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == RoundPhase::Active {
            self.run_systems(delta);
            self.time.advance(delta);
            self.update_phase();
        }

        self.snapshot()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn cheats(&self) -> &CheatProcessor {
        &self.cheats
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity, while it is alive.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let status = RoundStatus {
            time: self.time,
            phase: self.phase,
            score: self.score,
            demented_mode: self.config.demented_mode,
            cheats: self.cheats.view(),
        };
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, status, events)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetDementedMode { enabled } => {
                self.config.demented_mode = enabled;
            }
            PlayerCommand::KeyDown { key } => {
                for cheat in self.cheats.key_down(key) {
                    self.activate_cheat(cheat);
                }
            }
            PlayerCommand::Move { dir_x, dir_y } => {
                let Some(player) = self.player else {
                    warn!("move command with no live player");
                    return;
                };
                if let Ok(mut state) = self.world.get::<&mut PlayerState>(player) {
                    state.move_dir = DVec2::new(dir_x, dir_y).normalize_or_zero();
                }
            }
            PlayerCommand::Melee => {
                if let Some(player) = self.player {
                    combat::melee(&self.world, player, PLAYER_MELEE_RANGE, PLAYER_MELEE_DAMAGE);
                }
            }
            PlayerCommand::FireAt { target } => self.player_fire(target),
        }
    }

    fn activate_cheat(&mut self, cheat: CheatKind) {
        self.events.push(SimEvent::CheatActivated { cheat });
        if cheat != CheatKind::AllPowerups {
            return;
        }
        let Some(player) = self.player else {
            return;
        };
        if let Ok(mut state) = self.world.get::<&mut PlayerState>(player) {
            for kind in PowerupKind::ALL {
                state.set_powerup(kind, CHEAT_ACTIVATION_TIME);
            }
        }
    }

    fn player_fire(&mut self, target: Position) {
        let Some(player) = self.player else {
            return;
        };
        let shot = {
            let Ok(entity) = self.world.entity(player) else {
                return;
            };
            let (Some(pos), Some(vel), Some(body), Some(mut state)) = (
                entity.get::<&Position>(),
                entity.get::<&Velocity>(),
                entity.get::<&Body>(),
                entity.get::<&mut PlayerState>(),
            ) else {
                return;
            };
            if !state.has_upgrade(UpgradeKind::Gun) {
                warn!("fire command without the gun upgrade");
                return;
            }
            if state.fire_cooldown > 0.0 {
                return;
            }
            state.fire_cooldown = state.fire_interval();
            combat::fire_at(
                player,
                Side::Player,
                &pos,
                &body,
                &vel,
                target,
                PLAYER_PROJECTILE_SPEED,
                PLAYER_PROJECTILE_DAMAGE,
            )
        };
        self.events.push(SimEvent::ProjectileFired {
            side: Side::Player,
            origin: shot.origin,
        });
        self.spawn_buffer.push(SpawnRequest::Projectile(shot));
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta: f64) {
        // 1. Characters: swim state, demented timer, facing, death flag
        systems::character::run(
            &mut self.world,
            &self.map,
            self.config.demented_mode,
            delta,
            &mut self.rng,
            &mut self.events,
        );
        // 2. Mobs: AI, attacks, swim speed, death drops
        let rules = MobRules {
            independent_drop_roll: self.config.independent_drop_roll,
            score_factor: self.score_factor(),
        };
        self.score += systems::mob::run(
            &mut self.world,
            &self.map,
            rules,
            delta,
            &mut self.rng,
            &mut self.spawn_buffer,
            &mut self.events,
        );
        // 3. Player: powerup timers, regeneration, movement input
        systems::player::run(&mut self.world, delta);
        // 4. Item pickup
        systems::items::run(&mut self.world, &mut self.events);
        // 5. Projectile expiry and hits
        systems::projectiles::run(&mut self.world, delta);
        // 6. Movement integration
        systems::movement::run(
            &mut self.world,
            &self.map,
            self.cheats.is_noclip_active(),
            delta,
        );
        // 7. Cheat timers
        self.cheats.update(delta);
        // 8. Deferred spawns, then cleanup
        world_setup::flush_spawns(&mut self.world, &mut self.spawn_buffer);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn score_factor(&self) -> u64 {
        let multiplied = self
            .player
            .and_then(|p| self.world.get::<&PlayerState>(p).ok())
            .is_some_and(|state| state.has_powerup(PowerupKind::ScoreMultiplier));
        if multiplied {
            SCORE_MULTIPLIER_FACTOR
        } else {
            1
        }
    }

    /// Settle the round once the player or every mob is gone.
    fn update_phase(&mut self) {
        if let Some(player) = self.player {
            if !self.world.contains(player) {
                info!("player died after {:.1}s", self.time.elapsed_secs);
                self.player = None;
                self.phase = RoundPhase::Lost;
                self.events.push(SimEvent::PlayerDied);
                return;
            }
        }
        let mobs_left = self.world.query::<&MobState>().iter().count();
        if mobs_left == 0 && self.player.is_some() {
            info!("round won with score {}", self.score);
            self.phase = RoundPhase::Won;
        }
    }
}
