//! Core Kernel - Foundational types for the UBI claim registry
//!
//! This crate provides the value objects shared by every other crate:
//! - Principals: opaque account identifiers
//! - Block heights: simulated chain time
//! - Event identifiers and the kernel error type

pub mod identifiers;
pub mod height;
pub mod error;

pub use identifiers::{Principal, RegistryEventId};
pub use height::BlockHeight;
pub use error::CoreError;
