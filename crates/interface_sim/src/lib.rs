//! Simulation Surface
//!
//! This crate drives a `ClaimRegistry` from the outside: it loads genesis
//! configuration from the environment and replays scripted scenarios,
//! reporting each call in the registry's tagged `{value}` / `{error}` form.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_sim::{config::SimConfig, scenario::Scenario};
//!
//! let config = SimConfig::from_env()?;
//! let mut registry = ClaimRegistry::new(&config.settings());
//! let reports = Scenario::reference().run(&mut registry);
//! ```

pub mod config;
pub mod error;
pub mod scenario;

pub use config::SimConfig;
pub use error::SimError;
pub use scenario::{Scenario, Step, StepReport};
