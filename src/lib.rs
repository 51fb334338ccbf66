//! Core of a single-screen shooter: a fighter at the bottom of the field
//! shoots at launchers riding two falling, wrapping barriers.
//!
//! Everything in this crate is pure in-memory simulation. Terminal I/O lives
//! in the binary.

pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod launcher;
pub mod pool;
pub mod render;

pub use compute::GameWorld;
pub use config::{FighterHitPolicy, GameConfig};
pub use error::{ConfigError, GameError};
