//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! UBI claim registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Well-known principals and heights
//! - `builders`: Builder for registries in a given starting state
//! - `logging`: One-time tracing setup for tests
//! - `assertions`: Assertion helpers for results and outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod logging;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use logging::*;
pub use assertions::*;
pub use generators::*;
