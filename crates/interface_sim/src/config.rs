//! Simulation configuration

use serde::Deserialize;

use core_kernel::{BlockHeight, CoreError, Principal};
use domain_ubi::RegistrySettings;

use crate::error::SimError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimConfig {
    /// Admin principal
    pub admin: String,
    /// Treasury principal
    pub treasury: String,
    /// Starting block height
    pub start_block: u64,
    /// Log level
    pub log_level: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            admin: "STADMIN111".to_string(),
            treasury: "STTREASURY1".to_string(),
            start_block: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from `UBI_*` environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env() -> Result<Self, SimError> {
        Self::from_environment(config::Environment::with_prefix("UBI"))
    }

    /// Loads configuration from the given environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, SimError> {
        let defaults = Self::default();
        let config: SimConfig = config::Config::builder()
            .set_default("admin", defaults.admin)?
            .set_default("treasury", defaults.treasury)?
            .set_default("start_block", defaults.start_block as i64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects log levels the subscriber would not understand
    pub fn validate(&self) -> Result<(), CoreError> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::configuration(format!(
                "unknown log level '{}', expected one of {:?}",
                self.log_level, LOG_LEVELS
            )));
        }
        Ok(())
    }

    /// Genesis settings for a fresh registry
    pub fn settings(&self) -> RegistrySettings {
        RegistrySettings::default()
            .with_admin(Principal::new(self.admin.clone()))
            .with_treasury(Principal::new(self.treasury.clone()))
            .with_start_block(BlockHeight::new(self.start_block))
    }
}
