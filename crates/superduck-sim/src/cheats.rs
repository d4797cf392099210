//! Cheat code matching.
//!
//! Each code is an independent matcher: a key equal to the expected key
//! advances the index, any other key is ignored (progress is kept, not
//! reset). Completing the code rewinds the index and, unless the code is
//! still cooling down, starts its timer at activation + cooldown.

use log::info;

use superduck_core::constants::*;
use superduck_core::enums::{CheatKind, Key};
use superduck_core::state::CheatView;

/// Matcher for a single cheat code.
#[derive(Debug, Clone)]
pub struct CheatMatcher {
    kind: CheatKind,
    code: &'static [Key],
    index: usize,
    /// Counts down from activation + cooldown. Active while above cooldown.
    timer: f64,
}

impl CheatMatcher {
    pub fn new(kind: CheatKind, code: &'static [Key]) -> Self {
        Self {
            kind,
            code,
            index: 0,
            timer: 0.0,
        }
    }

    pub fn kind(&self) -> CheatKind {
        self.kind
    }

    /// Position of the next expected key.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Inside the activation window.
    pub fn is_active(&self) -> bool {
        self.timer > CHEAT_COOLDOWN_TIME
    }

    /// Feed one key press. Returns true when this press activated the cheat.
    pub fn key_down(&mut self, key: Key) -> bool {
        if self.code.get(self.index) != Some(&key) {
            return false;
        }
        self.index += 1;
        if self.index < self.code.len() {
            return false;
        }

        self.index = 0;
        if self.timer > 0.0 {
            return false;
        }
        self.timer = CHEAT_ACTIVATION_TIME + CHEAT_COOLDOWN_TIME;
        true
    }

    /// Count the timer down while it is positive.
    pub fn update(&mut self, delta: f64) {
        if self.timer > 0.0 {
            self.timer -= delta;
        }
    }
}

/// Both cheat codes, fed from the same key stream.
#[derive(Debug, Clone)]
pub struct CheatProcessor {
    powerups: CheatMatcher,
    noclip: CheatMatcher,
}

impl Default for CheatProcessor {
    fn default() -> Self {
        Self {
            powerups: CheatMatcher::new(CheatKind::AllPowerups, &CHEAT_CODE_POWERUP),
            noclip: CheatMatcher::new(CheatKind::Noclip, &CHEAT_CODE_NOCLIP),
        }
    }
}

impl CheatProcessor {
    /// Feed a key to every matcher; returns the cheats it activated.
    pub fn key_down(&mut self, key: Key) -> Vec<CheatKind> {
        let mut activated = Vec::new();
        for matcher in [&mut self.powerups, &mut self.noclip] {
            if matcher.key_down(key) {
                info!("cheat activated: {:?}", matcher.kind());
                activated.push(matcher.kind());
            }
        }
        activated
    }

    pub fn update(&mut self, delta: f64) {
        self.powerups.update(delta);
        self.noclip.update(delta);
    }

    pub fn is_noclip_active(&self) -> bool {
        self.noclip.is_active()
    }

    pub fn matcher(&self, kind: CheatKind) -> &CheatMatcher {
        match kind {
            CheatKind::AllPowerups => &self.powerups,
            CheatKind::Noclip => &self.noclip,
        }
    }

    pub fn view(&self) -> CheatView {
        CheatView {
            powerups_active: self.powerups.is_active(),
            noclip_active: self.noclip.is_active(),
            powerups_timer: self.powerups.timer(),
            noclip_timer: self.noclip.timer(),
        }
    }
}
