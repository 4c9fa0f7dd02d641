//! Genesis settings for a registry

use serde::{Deserialize, Serialize};

use core_kernel::{BlockHeight, Principal};

/// Initial values for the registry scalars
///
/// The claim interval and amount are fixed constants and deliberately not
/// part of these settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Principal reported by `is_admin`
    pub admin: Principal,
    /// Funding principal, stored only
    pub treasury: Principal,
    /// Block height the registry starts at
    pub start_block: BlockHeight,
    /// Whether claims start paused
    pub paused: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            admin: Principal::from("STADMIN111"),
            treasury: Principal::from("STTREASURY1"),
            start_block: BlockHeight::new(1000),
            paused: false,
        }
    }
}

impl RegistrySettings {
    /// Sets the admin principal
    pub fn with_admin(mut self, admin: impl Into<Principal>) -> Self {
        self.admin = admin.into();
        self
    }

    /// Sets the treasury principal
    pub fn with_treasury(mut self, treasury: impl Into<Principal>) -> Self {
        self.treasury = treasury.into();
        self
    }

    /// Sets the starting block height
    pub fn with_start_block(mut self, height: impl Into<BlockHeight>) -> Self {
        self.start_block = height.into();
        self
    }

    /// Sets whether claims start paused
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }
}
