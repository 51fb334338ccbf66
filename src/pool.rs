//! Live projectile storage.
//!
//! One pool per projectile kind. Projectiles are addressed by
//! [`ProjectileId`]; despawning an id that is already gone is a no-op.

use crate::entities::{Projectile, ProjectileId, ProjectileKind};
use crate::geometry::{Rect, Vec2};

#[derive(Clone, Debug)]
pub struct ProjectilePool {
    kind: ProjectileKind,
    live: Vec<Projectile>,
    next_id: u64,
}

impl ProjectilePool {
    pub fn new(kind: ProjectileKind) -> Self {
        Self {
            kind,
            live: Vec::new(),
            next_id: 0,
        }
    }

    pub fn spawn(&mut self, rect: Rect, velocity: Vec2) -> ProjectileId {
        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.live.push(Projectile {
            id,
            kind: self.kind,
            rect,
            velocity,
        });
        id
    }

    /// Remove a projectile. Returns `false` if it was not live.
    pub fn despawn(&mut self, id: ProjectileId) -> bool {
        match self.live.iter().position(|p| p.id == id) {
            Some(index) => {
                // Spawn order is kept so collision scans stay stable.
                self.live.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.live.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Move every projectile by its own velocity.
    pub fn advance_all(&mut self) {
        for p in &mut self.live {
            p.step();
        }
    }

    /// Keep only projectiles matching `keep`; returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&Projectile) -> bool) -> usize {
        let before = self.live.len();
        self.live.retain(|p| keep(p));
        before - self.live.len()
    }
}
