//! Simulation error handling

use thiserror::Error;

/// Errors raised while configuring or loading a simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting: {0}")]
    Core(#[from] core_kernel::CoreError),

    #[error("Scenario parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
