//! Error types.
//!
//! The simulation itself cannot fail once it is running; the only errors
//! are bad configuration (caught before the first tick) and terminal I/O in
//! the binary driver.

use thiserror::Error;

/// A configuration value that the simulation refuses to start with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Screen width or height is zero, negative, or not finite
    #[error("screen size must be positive, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },

    /// A size field is negative or not finite
    #[error("{field} must be a non-negative size, got {value}")]
    NegativeSize { field: &'static str, value: f32 },

    /// A sprite dimension that must be strictly positive is zero
    #[error("{field} must be positive, got {value}")]
    EmptySize { field: &'static str, value: f32 },

    /// A speed is negative or not finite
    #[error("{field} must be a non-negative speed, got {value}")]
    NegativeSpeed { field: &'static str, value: f32 },

    /// A barrier start height is not a fraction of the screen height in `0..=1`
    #[error("{field} must be a fraction between 0 and 1, got {value}")]
    BarrierStart { field: &'static str, value: f32 },

    /// Hits needed to destroy a launcher must be at least one
    #[error("hit threshold must be at least 1")]
    ZeroHitThreshold,

    /// Tick rate must be a positive, finite frequency
    #[error("tick rate must be positive, got {0} Hz")]
    TickRate(f32),

    /// Enemy fire period must be a positive, finite duration
    #[error("enemy fire period must be positive, got {0}s")]
    FirePeriod(f32),

    /// `advance` must be allowed to run at least one tick
    #[error("max catch-up ticks must be at least 1")]
    ZeroCatchUp,

    /// The walls leave no room for an entity of the given width
    #[error("{entity} ({width} wide) does not fit between the walls ({room} free)")]
    NoRoom {
        entity: &'static str,
        width: f32,
        room: f32,
    },
}

/// Top-level error for the terminal driver.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for configuration checks
pub type Result<T> = std::result::Result<T, ConfigError>;
