//! Game entity types — plain data, with only the logic that belongs to a
//! single entity.

use std::fmt;

use crate::geometry::{Rect, Vec2};
use crate::launcher::Launcher;

// ── Directions ────────────────────────────────────────────────────────────────

/// Fighter movement intent, held until the input adapter changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveDir {
    Left,
    #[default]
    Idle,
    Right,
}

impl MoveDir {
    pub fn sign(self) -> f32 {
        match self {
            MoveDir::Left => -1.0,
            MoveDir::Idle => 0.0,
            MoveDir::Right => 1.0,
        }
    }
}

/// Direction a launcher fires in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Which barrier lane an entity belongs to.
///
/// The left lane's barrier hugs the left wall and its launcher sits on the
/// barrier's right end, firing right. The right lane mirrors it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn facing(self) -> Facing {
        match self {
            Side::Left => Facing::Right,
            Side::Right => Facing::Left,
        }
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Opaque sprite identifiers handed to the render adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Fighter,
    LeftWall,
    RightWall,
    Barrier,
    Missile,
    LauncherLeftHealthy,
    LauncherLeftDamaged,
    LauncherRightHealthy,
    LauncherRightDamaged,
}

impl SpriteId {
    pub const ALL: [SpriteId; 9] = [
        SpriteId::Fighter,
        SpriteId::LeftWall,
        SpriteId::RightWall,
        SpriteId::Barrier,
        SpriteId::Missile,
        SpriteId::LauncherLeftHealthy,
        SpriteId::LauncherLeftDamaged,
        SpriteId::LauncherRightHealthy,
        SpriteId::LauncherRightDamaged,
    ];

    /// Image file for renderers that load bitmaps.
    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteId::Fighter => "./images/fighter.png",
            SpriteId::LeftWall => "./images/left.png",
            SpriteId::RightWall => "./images/right.png",
            SpriteId::Barrier => "./images/barier.png",
            SpriteId::Missile => "./images/missile.png",
            SpriteId::LauncherLeftHealthy => "./images/fire_left.png",
            SpriteId::LauncherLeftDamaged => "./images/fire_left_damaged.png",
            SpriteId::LauncherRightHealthy => "./images/fire_right.png",
            SpriteId::LauncherRightDamaged => "./images/fire_right_damaged.png",
        }
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileKind {
    PlayerMissile,
    EnemyBullet,
}

/// Handle to a live projectile. Ids are never reused within a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectileId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: ProjectileId,
    pub kind: ProjectileKind,
    pub rect: Rect,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn step(&mut self) {
        self.rect.translate(self.velocity);
    }
}

// ── Fighter & barriers ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Fighter {
    pub rect: Rect,
    pub direction: MoveDir,
}

/// A falling platform. It owns the launcher mounted on it for the whole
/// session.
#[derive(Clone, Debug, PartialEq)]
pub struct Barrier {
    pub side: Side,
    pub rect: Rect,
    pub launcher: Launcher,
}

// ── Score & status ────────────────────────────────────────────────────────────

/// Launchers destroyed this session. Only ever goes up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scores : {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}
