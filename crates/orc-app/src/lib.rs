//! Shared application service layer for the ORC cycle evaluator.
//!
//! Centralizes config file handling, property backend selection, cycle
//! runs and console reporting so frontends stay thin.

pub mod config;
pub mod error;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use config::{
    Backend, CONFIG_VERSION, CycleConfig, DEFAULT_RUN_NAME, InputValue, default_config,
    load_config, save_config,
};
pub use error::{AppError, AppResult};
pub use run_service::{FluidSummary, RunResponse, build_fluid_model, list_fluids, run};
