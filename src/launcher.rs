//! Barrier-mounted launchers and their damage state.
//!
//! A launcher starts active and healthy. Each player missile that lands on
//! it adds one hit; reaching the hit threshold destroys it (inactive,
//! damaged sprite). A destroyed launcher ignores further hits and stops
//! firing until its barrier wraps and [`Launcher::revive`] runs.

use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Facing, Side, SpriteId};
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LauncherHealth {
    Healthy,
    Damaged,
}

/// Result of a missile landing on a launcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The launcher was already destroyed; nothing changed.
    Ignored,
    /// The hit counted but the launcher is still active.
    Damaged { hits: u32 },
    /// This hit reached the threshold.
    Destroyed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Launcher {
    pub side: Side,
    pub facing: Facing,
    pub active: bool,
    pub hits: u32,
    pub health: LauncherHealth,
    pub rect: Rect,
}

impl Launcher {
    /// A fresh launcher glued to `barrier`.
    pub fn mounted(side: Side, barrier: &Rect, cfg: &GameConfig) -> Self {
        let mut launcher = Self {
            side,
            facing: side.facing(),
            active: true,
            hits: 0,
            health: LauncherHealth::Healthy,
            rect: Rect::new(0.0, 0.0, cfg.launcher_size.w, cfg.launcher_size.h),
        };
        launcher.attach(barrier);
        launcher
    }

    /// Recompute position from the barrier: on the end the launcher faces,
    /// vertically centred on the barrier's bottom edge.
    pub fn attach(&mut self, barrier: &Rect) {
        let x = match self.facing {
            Facing::Right => barrier.right() - self.rect.w,
            Facing::Left => barrier.x,
        };
        self.rect = self.rect.moved_to(x, barrier.y - self.rect.h / 2.0);
    }

    pub fn register_hit(&mut self, threshold: u32) -> HitOutcome {
        if !self.active {
            return HitOutcome::Ignored;
        }
        self.hits += 1;
        if self.hits >= threshold {
            self.active = false;
            self.health = LauncherHealth::Damaged;
            HitOutcome::Destroyed
        } else {
            HitOutcome::Damaged { hits: self.hits }
        }
    }

    /// Back to the initial state. Only a barrier wrap calls this.
    pub fn revive(&mut self, cfg: &GameConfig) {
        self.active = true;
        self.hits = 0;
        self.health = LauncherHealth::Healthy;
        self.rect.w = cfg.launcher_size.w;
        self.rect.h = cfg.launcher_size.h;
        debug!(side = ?self.side, "launcher revived");
    }

    /// Point bullets leave from: the edge the launcher faces, at its bottom.
    pub fn muzzle(&self) -> (f32, f32) {
        match self.facing {
            Facing::Right => (self.rect.right(), self.rect.y),
            Facing::Left => (self.rect.x, self.rect.y),
        }
    }

    /// Bullet rect and velocity for one shot, or `None` while destroyed.
    pub fn shot(&self, cfg: &GameConfig) -> Option<(Rect, Vec2)> {
        if !self.active {
            return None;
        }
        let (x, y) = self.muzzle();
        let speed = cfg.bullet_speed();
        Some((
            Rect::new(x, y, cfg.bullet_size.w, cfg.bullet_size.h),
            Vec2::new(speed * self.facing.sign(), -speed),
        ))
    }

    pub fn sprite(&self) -> SpriteId {
        match (self.side, self.health) {
            (Side::Left, LauncherHealth::Healthy) => SpriteId::LauncherLeftHealthy,
            (Side::Left, LauncherHealth::Damaged) => SpriteId::LauncherLeftDamaged,
            (Side::Right, LauncherHealth::Healthy) => SpriteId::LauncherRightHealthy,
            (Side::Right, LauncherHealth::Damaged) => SpriteId::LauncherRightDamaged,
        }
    }
}
