//! The game world and its update loop.
//!
//! [`GameWorld`] owns every entity. The driver feeds it input events and
//! either calls [`GameWorld::tick`] / [`GameWorld::spawn_enemy_fire`]
//! directly or hands real elapsed time to [`GameWorld::advance`], which runs
//! both schedules off one clock. Nothing here blocks or touches I/O.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clock::{FixedStep, Periodic};
use crate::config::{FighterHitPolicy, GameConfig};
use crate::entities::{
    Barrier, Fighter, GameStatus, MoveDir, ProjectileId, ProjectileKind, Score, Side, SpriteId,
};
use crate::error::Result;
use crate::geometry::{Rect, Vec2};
use crate::input::InputEvent;
use crate::launcher::{HitOutcome, Launcher};
use crate::pool::ProjectilePool;
use crate::render::{Drawable, Scene, GAME_OVER_TEXT};

#[derive(Clone, Debug)]
pub struct GameWorld {
    config: GameConfig,
    pub fighter: Fighter,
    pub left_wall: Rect,
    pub right_wall: Rect,
    /// Left lane first. Each barrier carries its launcher.
    pub barriers: Vec<Barrier>,
    pub missiles: ProjectilePool,
    pub bullets: ProjectilePool,
    score: Score,
    status: GameStatus,
    ticks: u64,
    last_shot_tick: Option<u64>,
    tick_clock: FixedStep,
    fire_clock: Periodic,
}

// ── Construction ──────────────────────────────────────────────────────────────

impl GameWorld {
    /// Lay out the opening field. Fails only on an invalid config.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let (w, h) = (config.screen_width, config.screen_height);
        let wall = config.wall_width;
        let bs = config.barrier_size;
        let fs = config.fighter_size;

        let left_barrier = Rect::new(wall, h * config.left_barrier_start, bs.w, bs.h);
        let right_barrier = Rect::new(
            w - wall - bs.w,
            h * config.right_barrier_start,
            bs.w,
            bs.h,
        );

        let barriers = vec![
            Barrier {
                side: Side::Left,
                rect: left_barrier,
                launcher: Launcher::mounted(Side::Left, &left_barrier, &config),
            },
            Barrier {
                side: Side::Right,
                rect: right_barrier,
                launcher: Launcher::mounted(Side::Right, &right_barrier, &config),
            },
        ];

        let world = Self {
            fighter: Fighter {
                rect: Rect::new(w / 2.0 - fs.w / 2.0, config.fighter_y, fs.w, fs.h),
                direction: MoveDir::Idle,
            },
            left_wall: Rect::new(0.0, 0.0, wall, h),
            right_wall: Rect::new(w - wall, 0.0, wall, h),
            barriers,
            missiles: ProjectilePool::new(ProjectileKind::PlayerMissile),
            bullets: ProjectilePool::new(ProjectileKind::EnemyBullet),
            score: Score::default(),
            status: GameStatus::Playing,
            ticks: 0,
            last_shot_tick: None,
            tick_clock: FixedStep::new(config.tick_duration()),
            fire_clock: Periodic::new(config.fire_period_duration()),
            config,
        };
        info!(width = w, height = h, "new game");
        Ok(world)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn launchers(&self) -> impl Iterator<Item = &Launcher> {
        self.barriers.iter().map(|b| &b.launcher)
    }

    pub fn launcher_mut(&mut self, side: Side) -> Option<&mut Launcher> {
        self.barriers
            .iter_mut()
            .find(|b| b.side == side)
            .map(|b| &mut b.launcher)
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

impl GameWorld {
    /// Apply one input event. `Quit` belongs to the driver and is ignored.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::DirectionSet(dir) => self.set_direction(dir),
            InputEvent::DirectionClear => self.set_direction(MoveDir::Idle),
            InputEvent::Fire => {
                self.fire_missile();
            }
            InputEvent::EndGame => {
                self.game_over();
            }
            InputEvent::Quit => {}
        }
    }

    /// The direction persists until changed; ticks never reset it.
    pub fn set_direction(&mut self, dir: MoveDir) {
        self.fighter.direction = dir;
    }

    /// Launch a missile straight up from the fighter's nose.
    ///
    /// Returns `None` after Game Over or while the optional cooldown runs.
    pub fn fire_missile(&mut self) -> Option<ProjectileId> {
        if self.is_over() {
            return None;
        }
        let cooldown = u64::from(self.config.missile_cooldown_ticks);
        if let Some(last) = self.last_shot_tick {
            if cooldown > 0 && self.ticks - last < cooldown {
                return None;
            }
        }

        let size = self.config.missile_size;
        let f = &self.fighter.rect;
        let rect = Rect::new(f.center_x() - size.w / 2.0, f.top(), size.w, size.h);
        let id = self
            .missiles
            .spawn(rect, Vec2::new(0.0, self.config.missile_speed()));
        self.last_shot_tick = Some(self.ticks);
        debug!(?id, x = rect.x, y = rect.y, "missile fired");
        Some(id)
    }
}

// ── Per-tick update ───────────────────────────────────────────────────────────

impl GameWorld {
    /// Advance the simulation by one frame. No-op after Game Over.
    pub fn tick(&mut self) {
        if self.is_over() {
            return;
        }
        self.ticks += 1;

        self.move_fighter();
        self.move_barriers();
        self.update_missiles();
        self.update_bullets();
    }

    /// Whole-step only: a step that would cross a wall is not taken.
    fn move_fighter(&mut self) {
        let speed = self.config.fighter_speed;
        let wall = self.config.wall_width;
        let right_limit = self.config.screen_width - wall;
        let dx = self.fighter.direction.sign() * speed;
        let rect = &mut self.fighter.rect;

        let x = rect.x + dx;
        if dx != 0.0 && x >= wall && x + rect.w <= right_limit {
            rect.x = x;
        }
    }

    /// Drop each barrier, wrap it once it is fully below the screen, and
    /// keep its launcher glued to it.
    fn move_barriers(&mut self) {
        let speed = self.config.barrier_speed;
        let height = self.config.screen_height;

        for barrier in &mut self.barriers {
            barrier.rect.y -= speed;

            if barrier.rect.top() < 0.0 {
                barrier.rect.y = height;
                barrier.launcher.revive(&self.config);
                debug!(side = ?barrier.side, "barrier wrapped");
            }

            barrier.launcher.attach(&barrier.rect);
        }
    }

    fn update_missiles(&mut self) {
        let height = self.config.screen_height;
        let threshold = self.config.hit_threshold;

        self.missiles.advance_all();

        let mut spent = Vec::new();
        for missile in self.missiles.iter() {
            if missile.rect.y > height {
                spent.push(missile.id);
                continue;
            }

            // First active launcher hit wins; destroyed launchers are
            // transparent.
            for barrier in &mut self.barriers {
                let launcher = &mut barrier.launcher;
                if !launcher.active || !missile.rect.intersects(&launcher.rect) {
                    continue;
                }
                spent.push(missile.id);
                match launcher.register_hit(threshold) {
                    HitOutcome::Destroyed => {
                        self.score.increment();
                        info!(
                            side = ?launcher.side,
                            score = self.score.value(),
                            "launcher destroyed"
                        );
                    }
                    HitOutcome::Damaged { hits } => {
                        debug!(side = ?launcher.side, hits, "launcher hit");
                    }
                    HitOutcome::Ignored => {}
                }
                break;
            }
        }

        for id in spent {
            self.missiles.despawn(id);
        }
    }

    fn update_bullets(&mut self) {
        let width = self.config.screen_width;

        self.bullets.advance_all();
        self.bullets
            .retain(|b| !(b.rect.right() < 0.0 || b.rect.x > width || b.rect.top() < 0.0));

        if self.config.fighter_hit == FighterHitPolicy::EndGame {
            let fighter = self.fighter.rect;
            let hit = self
                .bullets
                .iter()
                .find(|b| b.rect.intersects(&fighter))
                .map(|b| b.id);
            if let Some(id) = hit {
                self.bullets.despawn(id);
                info!(?id, "fighter hit");
                self.game_over();
            }
        }
    }
}

// ── Enemy fire & scheduling ───────────────────────────────────────────────────

impl GameWorld {
    /// One volley: every active launcher fires a single bullet from its
    /// muzzle. Returns the number of bullets spawned.
    pub fn spawn_enemy_fire(&mut self) -> usize {
        if self.is_over() {
            return 0;
        }
        let mut spawned = 0;
        for barrier in &self.barriers {
            if let Some((rect, velocity)) = barrier.launcher.shot(&self.config) {
                self.bullets.spawn(rect, velocity);
                spawned += 1;
            }
        }
        debug!(spawned, "enemy volley");
        spawned
    }

    /// Feed real elapsed time: runs the ticks that are due, then at most one
    /// enemy volley. A long stall runs `max_catch_up_ticks` and drops the
    /// remainder.
    pub fn advance(&mut self, dt: Duration) {
        if self.is_over() {
            return;
        }

        let due = self.tick_clock.advance(dt);
        let limit = self.config.max_catch_up_ticks;
        if due > limit {
            warn!(due, limit, "simulation fell behind, dropping ticks");
        }
        for _ in 0..due.min(limit) {
            self.tick();
            if self.is_over() {
                return;
            }
        }

        if self.fire_clock.advance(dt) > 0 {
            self.spawn_enemy_fire();
        }
    }

    /// Stop both schedules for good. Returns `false` if already over.
    pub fn game_over(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.status = GameStatus::GameOver;
        self.tick_clock.reset();
        self.fire_clock.reset();
        info!(score = self.score.value(), "Game Over");
        true
    }
}

// ── Render view ───────────────────────────────────────────────────────────────

impl GameWorld {
    pub fn hud_text(&self) -> String {
        match self.status {
            GameStatus::Playing => self.score.to_string(),
            GameStatus::GameOver => GAME_OVER_TEXT.to_string(),
        }
    }

    /// Everything visible, back to front.
    pub fn scene(&self) -> Scene {
        let mut drawables = Vec::with_capacity(
            3 + self.barriers.len() * 2 + self.missiles.len() + self.bullets.len(),
        );
        drawables.push(Drawable {
            sprite: SpriteId::LeftWall,
            rect: self.left_wall,
        });
        drawables.push(Drawable {
            sprite: SpriteId::RightWall,
            rect: self.right_wall,
        });

        for barrier in &self.barriers {
            drawables.push(Drawable {
                sprite: SpriteId::Barrier,
                rect: barrier.rect,
            });
        }
        for launcher in self.launchers() {
            drawables.push(Drawable {
                sprite: launcher.sprite(),
                rect: launcher.rect,
            });
        }

        drawables.push(Drawable {
            sprite: SpriteId::Fighter,
            rect: self.fighter.rect,
        });

        // Both projectile kinds share the missile sprite.
        for p in self.missiles.iter().chain(self.bullets.iter()) {
            drawables.push(Drawable {
                sprite: SpriteId::Missile,
                rect: p.rect,
            });
        }

        Scene {
            drawables,
            hud: self.hud_text(),
            score: self.score.value(),
            status: self.status,
        }
    }
}
