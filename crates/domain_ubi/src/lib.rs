//! UBI Claim Domain
//!
//! This crate implements a universal basic income claim registry. Principals
//! register once and may then claim a fixed amount every `CLAIM_INTERVAL`
//! blocks. An admin principal and a treasury principal are recorded but not
//! otherwise enforced.
//!
//! # Principal Lifecycle
//!
//! ```text
//! Unregistered -> (register) -> Registered -> (interval elapses) -> Claimable
//!                                    ^                                  |
//!                                    +------------- (claim) ------------+
//! ```
//!
//! Registration is permanent. Claims are rejected while the registry is
//! paused.

pub mod constants;
pub mod error;
pub mod outcome;
pub mod settings;
pub mod state;
pub mod events;
pub mod registry;

pub use constants::{CLAIM_AMOUNT, CLAIM_INTERVAL};
pub use error::UbiError;
pub use outcome::CallOutcome;
pub use settings::RegistrySettings;
pub use state::RegistryState;
pub use events::{RecordedEvent, RegistryEvent};
pub use registry::ClaimRegistry;
