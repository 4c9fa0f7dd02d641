//! Registry state

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use core_kernel::{BlockHeight, Principal};
use crate::settings::RegistrySettings;

/// The flat state behind a claim registry
///
/// `registered_users` maps each principal to the height of its last claim,
/// or of its registration if it never claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    pub admin: Principal,
    pub paused: bool,
    pub treasury: Principal,
    pub registered_users: HashMap<Principal, BlockHeight>,
    pub current_block: BlockHeight,
}

impl RegistryState {
    /// Creates a fresh state with no registered users
    pub fn new(settings: &RegistrySettings) -> Self {
        Self {
            admin: settings.admin.clone(),
            paused: settings.paused,
            treasury: settings.treasury.clone(),
            registered_users: HashMap::new(),
            current_block: settings.start_block,
        }
    }

    /// Restores every field to the given settings and forgets all users
    pub fn reset(&mut self, settings: &RegistrySettings) {
        *self = Self::new(settings);
    }

    /// Height recorded for `principal`, if registered
    pub fn last_height(&self, principal: &Principal) -> Option<BlockHeight> {
        self.registered_users.get(principal).copied()
    }

    /// Blocks elapsed since `principal`'s recorded height
    ///
    /// `None` when unregistered or when the chain has been rewound below
    /// the recorded height.
    pub fn blocks_since_last(&self, principal: &Principal) -> Option<u64> {
        self.last_height(principal)
            .and_then(|last| self.current_block.elapsed_since(last))
    }
}

impl Default for RegistryState {
    fn default() -> Self {
        Self::new(&RegistrySettings::default())
    }
}
