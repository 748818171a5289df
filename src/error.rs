//! Error types for map generation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("hill_size must be a finite positive number, got {0}")]
    InvalidHillSize(f64),

    #[error("max_spawn_attempts must be at least 1")]
    InvalidSpawnAttempts,

    #[error("no fair spawn pair found after {attempts} attempts on a {width}x{height} map")]
    SpawnAttemptsExhausted {
        attempts: u32,
        width: u32,
        height: u32,
    },
}
