//! ECS components for hecs entities.
//!
//! The shared character fields live in [`CharacterState`]; the mob and
//! player roles add their own component next to it rather than extending it.

use std::collections::{HashMap, HashSet};

use glam::DVec2;
use hecs::Entity;

use superduck_ai::AiStrategy;
use superduck_core::constants::*;
use superduck_core::enums::*;
use superduck_core::error::SimError;
use superduck_core::types::Position;

/// Bounding box size and the removal flag every entity carries.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub width: f64,
    pub height: f64,
    /// Once set, cleanup despawns the entity at the end of the frame.
    pub removed: bool,
}

impl Body {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            removed: false,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Centre of the box anchored at `pos`.
    pub fn center(&self, pos: &Position) -> Position {
        Position::new(pos.x + self.width / 2.0, pos.y + self.height / 2.0)
    }
}

/// State shared by the player and mobs.
#[derive(Debug, Clone)]
pub struct CharacterState {
    current_health: i32,
    maximum_health: i32,
    pub facing: Facing,
    pub swimming: bool,
    /// Animation clock. Accumulates while moving, 0 while standing.
    pub state_time: f64,
    /// Negative while demented; counts up otherwise.
    pub demented_timer: f64,
    /// `demented_timer` as of the previous frame.
    pub last_demented_timer: f64,
    pub demented_state: u8,
}

impl CharacterState {
    /// A full-health character. Rejects non-positive maximum health.
    pub fn new(maximum_health: i32) -> Result<Self, SimError> {
        if maximum_health <= 0 {
            return Err(SimError::InvalidHealth(maximum_health));
        }
        Ok(Self {
            current_health: maximum_health,
            maximum_health,
            facing: Facing::default(),
            swimming: false,
            state_time: 0.0,
            demented_timer: 0.0,
            last_demented_timer: 0.0,
            demented_state: 0,
        })
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    pub fn maximum_health(&self) -> i32 {
        self.maximum_health
    }

    /// Restore health, never past the maximum.
    pub fn heal(&mut self, health: i32) {
        self.current_health = self.current_health.saturating_add(health).min(self.maximum_health);
    }

    /// Remove health. No floor: negative health is simply dead.
    pub fn damage(&mut self, health: i32) {
        self.current_health = self.current_health.saturating_sub(health);
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    pub fn is_demented(&self) -> bool {
        self.demented_timer < 0.0
    }

    /// Whether demented mode ended during the last timer advance.
    pub fn left_demented_mode(&self) -> bool {
        self.last_demented_timer < 0.0 && self.demented_timer > 0.0
    }
}

/// Mob-only state.
#[derive(Debug, Clone)]
pub struct MobState {
    walk_speed: f64,
    /// Effective speed; half of `walk_speed` while swimming.
    pub speed: f64,
    ranged: bool,
    boss: bool,
    /// Last known attack target.
    pub target: Position,
    /// Seconds until the next melee swing is allowed.
    pub melee_cooldown: f64,
}

impl MobState {
    /// Bosses are never ranged, whatever was requested.
    pub fn new(walk_speed: f64, ranged: bool, boss: bool) -> Result<Self, SimError> {
        if !walk_speed.is_finite() || walk_speed < 0.0 {
            return Err(SimError::InvalidSpeed(walk_speed));
        }
        Ok(Self {
            walk_speed,
            speed: walk_speed,
            ranged: ranged && !boss,
            boss,
            target: Position::default(),
            melee_cooldown: 0.0,
        })
    }

    pub fn walk_speed(&self) -> f64 {
        self.walk_speed
    }

    pub fn is_ranged(&self) -> bool {
        self.ranged
    }

    pub fn is_boss(&self) -> bool {
        self.boss
    }

    /// Recompute effective speed from the swim state.
    pub fn apply_swim_speed(&mut self, swimming: bool) {
        self.speed = if swimming {
            self.walk_speed / 2.0
        } else {
            self.walk_speed
        };
    }
}

/// The AI strategy bound to a mob for its whole life.
pub struct Brain(pub Box<dyn AiStrategy>);

/// Player-only state: powerups, upgrades and pending input.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    powerups: HashMap<PowerupKind, f64>,
    upgrades: HashSet<UpgradeKind>,
    /// Normalised movement direction requested by input.
    pub move_dir: DVec2,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f64,
    /// Time accumulated toward the next regeneration heal.
    pub regeneration_clock: f64,
}

impl PlayerState {
    /// Set the remaining duration of a powerup. Overwrites, never stacks.
    pub fn set_powerup(&mut self, kind: PowerupKind, duration: f64) {
        self.powerups.insert(kind, duration.max(0.0));
    }

    /// Remaining seconds of a powerup; 0 when inactive.
    pub fn powerup_time(&self, kind: PowerupKind) -> f64 {
        self.powerups.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn has_powerup(&self, kind: PowerupKind) -> bool {
        self.powerup_time(kind) > 0.0
    }

    /// Active powerups sorted by kind.
    pub fn active_powerups(&self) -> Vec<(PowerupKind, f64)> {
        let mut active: Vec<(PowerupKind, f64)> = self
            .powerups
            .iter()
            .filter(|(_, t)| **t > 0.0)
            .map(|(k, t)| (*k, *t))
            .collect();
        active.sort_by_key(|(k, _)| *k);
        active
    }

    /// Count every powerup down by `delta`, clamping at 0.
    pub fn decay_powerups(&mut self, delta: f64) {
        for remaining in self.powerups.values_mut() {
            if *remaining > 0.0 {
                *remaining = (*remaining - delta).max(0.0);
            }
        }
    }

    /// Grant a permanent upgrade. Idempotent.
    pub fn set_upgrade(&mut self, kind: UpgradeKind) {
        self.upgrades.insert(kind);
    }

    pub fn has_upgrade(&self, kind: UpgradeKind) -> bool {
        self.upgrades.contains(&kind)
    }

    /// Owned upgrades sorted by kind.
    pub fn upgrades(&self) -> Vec<UpgradeKind> {
        let mut owned: Vec<UpgradeKind> = self.upgrades.iter().copied().collect();
        owned.sort();
        owned
    }

    /// Current delay between shots.
    pub fn fire_interval(&self) -> f64 {
        if self.has_powerup(PowerupKind::RateOfFire) {
            PLAYER_FIRE_COOLDOWN / 2.0
        } else {
            PLAYER_FIRE_COOLDOWN
        }
    }
}

/// An item waiting on the floor to be picked up.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub kind: ItemKind,
}

impl Item {
    /// Apply the item's effect to the player.
    pub fn apply(&self, player: &mut PlayerState) {
        match self.kind {
            ItemKind::Powerup(kind) => player.set_powerup(kind, kind.max_duration()),
            ItemKind::Upgrade(kind) => player.set_upgrade(kind),
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Entity,
    pub side: Side,
    pub damage: i32,
    pub speed: f64,
    /// Seconds left before it expires.
    pub lifetime: f64,
}
