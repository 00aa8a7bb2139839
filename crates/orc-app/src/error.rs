//! Error types for the orc-app service layer.

use orc_cycle::CycleError;
use orc_fluids::{FluidError, UnitError};
use std::path::PathBuf;

/// Application error type wrapping the lower-level crates.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unsupported config version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid value for {field}: {source}")]
    Unit {
        field: &'static str,
        source: UnitError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fluid property error: {0}")]
    Fluid(#[from] FluidError),

    #[error("Cycle evaluation failed: {0}")]
    Cycle(#[from] CycleError),
}

/// Result type for orc-app operations.
pub type AppResult<T> = Result<T, AppError>;
