//! Tunable constants for one game session.
//!
//! Everything the simulation needs at start-up lives in [`GameConfig`].
//! `Default` gives the reference layout (an 800x600 field); the binary
//! overrides individual values from the command line before handing the
//! config to [`GameWorld::new`](crate::compute::GameWorld::new), which
//! validates it once.

use std::time::Duration;

use crate::error::{ConfigError, Result};

/// What happens when an enemy bullet reaches the fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FighterHitPolicy {
    /// Bullets pass through the fighter. The player cannot lose.
    #[default]
    Ignore,
    /// The bullet is consumed and the game ends.
    EndGame,
}

/// Width/height pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub wall_width: f32,

    pub barrier_size: Size,
    pub launcher_size: Size,
    pub fighter_size: Size,
    pub missile_size: Size,
    pub bullet_size: Size,

    /// Horizontal distance the fighter covers per tick.
    pub fighter_speed: f32,
    /// Vertical distance the barriers fall per tick.
    pub barrier_speed: f32,

    /// Bottom edge of the fighter.
    pub fighter_y: f32,
    /// Starting heights of the left and right barriers as fractions of the
    /// screen height.
    pub left_barrier_start: f32,
    pub right_barrier_start: f32,

    /// Missile hits that destroy a launcher.
    pub hit_threshold: u32,
    /// Seconds between enemy volleys.
    pub fire_period: f32,
    /// Simulation ticks per second.
    pub tick_rate: f32,

    pub fighter_hit: FighterHitPolicy,
    /// Minimum ticks between accepted fire commands. 0 disables the limit.
    pub missile_cooldown_ticks: u32,
    /// Most ticks a single call to `advance` may run.
    pub max_catch_up_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            wall_width: 20.0,
            barrier_size: Size::new(184.0, 20.0),
            launcher_size: Size::new(34.0, 34.0),
            fighter_size: Size::new(64.0, 64.0),
            missile_size: Size::new(12.0, 12.0),
            bullet_size: Size::new(12.0, 12.0),
            fighter_speed: 10.0,
            barrier_speed: 4.0,
            fighter_y: 40.0,
            left_barrier_start: 0.75,
            right_barrier_start: 0.4,
            hit_threshold: 20,
            fire_period: 1.0,
            tick_rate: 60.0,
            fighter_hit: FighterHitPolicy::Ignore,
            missile_cooldown_ticks: 0,
            max_catch_up_ticks: 5,
        }
    }
}

impl GameConfig {
    /// Player missiles travel twice as fast as the fighter.
    pub fn missile_speed(&self) -> f32 {
        self.fighter_speed * 2.0
    }

    /// Enemy bullets move this far along each axis per tick.
    pub fn bullet_speed(&self) -> f32 {
        self.fighter_speed * 2.0
    }

    /// Rounded down to whole nanoseconds, so `tick_rate` ticks never take
    /// longer than one second.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos((1e9 / self.tick_rate as f64) as u64)
    }

    pub fn fire_period_duration(&self) -> Duration {
        Duration::from_nanos((self.fire_period as f64 * 1e9) as u64)
    }

    /// Free horizontal space between the two walls.
    pub fn playfield_width(&self) -> f32 {
        self.screen_width - 2.0 * self.wall_width
    }

    /// Reject anything the tick loop could not run with.
    pub fn validate(&self) -> Result<()> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::ScreenSize {
                width: w,
                height: h,
            });
        }

        non_negative("wall_width", self.wall_width)?;
        for (name, size) in [
            ("barrier", self.barrier_size),
            ("launcher", self.launcher_size),
            ("fighter", self.fighter_size),
            ("missile", self.missile_size),
            ("bullet", self.bullet_size),
        ] {
            positive(name, size.w)?;
            positive(name, size.h)?;
        }

        for (name, speed) in [
            ("fighter_speed", self.fighter_speed),
            ("barrier_speed", self.barrier_speed),
        ] {
            if !(speed.is_finite() && speed >= 0.0) {
                return Err(ConfigError::NegativeSpeed {
                    field: name,
                    value: speed,
                });
            }
        }

        non_negative("fighter_y", self.fighter_y)?;

        for (name, start) in [
            ("left_barrier_start", self.left_barrier_start),
            ("right_barrier_start", self.right_barrier_start),
        ] {
            if !(start.is_finite() && (0.0..=1.0).contains(&start)) {
                return Err(ConfigError::BarrierStart {
                    field: name,
                    value: start,
                });
            }
        }

        if self.hit_threshold == 0 {
            return Err(ConfigError::ZeroHitThreshold);
        }
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0)
            || self.tick_duration().is_zero()
        {
            return Err(ConfigError::TickRate(self.tick_rate));
        }
        if !(self.fire_period.is_finite() && self.fire_period > 0.0)
            || self.fire_period_duration().is_zero()
        {
            return Err(ConfigError::FirePeriod(self.fire_period));
        }
        if self.max_catch_up_ticks == 0 {
            return Err(ConfigError::ZeroCatchUp);
        }

        let room = self.playfield_width();
        for (entity, width) in [
            ("fighter", self.fighter_size.w),
            ("barrier", self.barrier_size.w),
        ] {
            if width > room {
                return Err(ConfigError::NoRoom { entity, width, room });
            }
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeSize { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(ConfigError::EmptySize { field, value });
    }
    Ok(())
}
