use std::time::Duration;

use battlefield::config::{FighterHitPolicy, GameConfig, Size};
use battlefield::error::ConfigError;

#[test]
fn default_config_is_reference_layout() {
    let c = GameConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!((c.screen_width, c.screen_height), (800.0, 600.0));
    assert_eq!(c.hit_threshold, 20);
    assert_eq!(c.fighter_hit, FighterHitPolicy::Ignore);
    assert_eq!(c.missile_cooldown_ticks, 0);
}

#[test]
fn projectile_speeds_are_twice_fighter_speed() {
    let c = GameConfig {
        fighter_speed: 7.0,
        ..GameConfig::default()
    };
    assert_eq!(c.missile_speed(), 14.0);
    assert_eq!(c.bullet_speed(), 14.0);
}

#[test]
fn durations() {
    let c = GameConfig::default();
    assert_eq!(c.fire_period_duration(), Duration::from_secs(1));
    // Sixty ticks never overrun a second
    assert!(c.tick_duration() * 60 <= Duration::from_secs(1));
    assert!(c.tick_duration() * 61 > Duration::from_secs(1));
}

#[test]
fn rejects_bad_screen() {
    let c = GameConfig {
        screen_width: 0.0,
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(ConfigError::ScreenSize { .. })));

    let c = GameConfig {
        screen_height: f32::NAN,
        ..GameConfig::default()
    };
    assert!(matches!(c.validate(), Err(ConfigError::ScreenSize { .. })));
}

#[test]
fn rejects_negative_and_empty_sizes() {
    let c = GameConfig {
        wall_width: -1.0,
        ..GameConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NegativeSize { field: "wall_width", .. })
    ));

    let c = GameConfig {
        missile_size: Size::new(0.0, 12.0),
        ..GameConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::EmptySize { field: "missile", .. })
    ));
}

#[test]
fn rejects_negative_speed() {
    let c = GameConfig {
        barrier_speed: -4.0,
        ..GameConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::NegativeSpeed {
            field: "barrier_speed",
            value: -4.0
        })
    );
}

#[test]
fn zero_speeds_are_allowed() {
    let c = GameConfig {
        barrier_speed: 0.0,
        fighter_speed: 0.0,
        ..GameConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn rejects_bad_timing() {
    let c = GameConfig {
        hit_threshold: 0,
        ..GameConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::ZeroHitThreshold));

    let c = GameConfig {
        tick_rate: 0.0,
        ..GameConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::TickRate(0.0)));

    let c = GameConfig {
        fire_period: -1.0,
        ..GameConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::FirePeriod(-1.0)));

    let c = GameConfig {
        max_catch_up_ticks: 0,
        ..GameConfig::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::ZeroCatchUp));
}

#[test]
fn rejects_non_finite_barrier_start() {
    let c = GameConfig {
        left_barrier_start: f32::NAN,
        ..GameConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::BarrierStart {
            field: "left_barrier_start",
            ..
        })
    ));

    let c = GameConfig {
        right_barrier_start: f32::INFINITY,
        ..GameConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::BarrierStart {
            field: "right_barrier_start",
            value: f32::INFINITY
        })
    );

    let c = GameConfig {
        right_barrier_start: -0.5,
        ..GameConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn barrier_start_accepts_screen_edges() {
    for start in [0.0, 1.0] {
        let c = GameConfig {
            left_barrier_start: start,
            right_barrier_start: start,
            ..GameConfig::default()
        };
        assert!(c.validate().is_ok());
    }
}

#[test]
fn rejects_field_too_narrow() {
    let c = GameConfig {
        screen_width: 200.0,
        ..GameConfig::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::NoRoom {
            entity: "barrier",
            width: 184.0,
            room: 160.0
        })
    );
}

#[test]
fn error_messages_name_the_field() {
    let err = GameConfig {
        fighter_speed: -2.0,
        ..GameConfig::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "fighter_speed must be a non-negative speed, got -2");
}
