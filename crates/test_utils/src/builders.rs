//! Test Data Builders
//!
//! Provides a builder for registries in a known starting state. Tests
//! specify only the parts they care about and take defaults for the rest.

use core_kernel::{BlockHeight, Principal};
use domain_ubi::{ClaimRegistry, RegistrySettings};

use crate::fixtures::SettingsFixtures;

/// Builder for constructing test registries
///
/// Principals are registered at the starting block, then the chain is
/// advanced, then the pause flag is applied.
pub struct TestRegistryBuilder {
    settings: RegistrySettings,
    registered: Vec<Principal>,
    advance_by: u64,
    paused: bool,
}

impl Default for TestRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistryBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            settings: SettingsFixtures::standard(),
            registered: Vec::new(),
            advance_by: 0,
            paused: false,
        }
    }

    /// Sets the admin principal
    pub fn with_admin(mut self, admin: impl Into<Principal>) -> Self {
        self.settings = self.settings.with_admin(admin);
        self
    }

    /// Sets the treasury principal
    pub fn with_treasury(mut self, treasury: impl Into<Principal>) -> Self {
        self.settings = self.settings.with_treasury(treasury);
        self
    }

    /// Sets the starting block
    pub fn with_start_block(mut self, height: impl Into<BlockHeight>) -> Self {
        self.settings = self.settings.with_start_block(height);
        self
    }

    /// Registers a principal at the starting block
    pub fn with_registered(mut self, principal: impl Into<Principal>) -> Self {
        self.registered.push(principal.into());
        self
    }

    /// Advances the chain after registration
    pub fn advanced_by(mut self, blocks: u64) -> Self {
        self.advance_by = blocks;
        self
    }

    /// Pauses claims once everything else is set up
    pub fn paused(mut self) -> Self {
        self.paused = true;
        self
    }

    /// Builds the registry
    ///
    /// # Panics
    ///
    /// Panics if the same principal was added twice.
    pub fn build(self) -> ClaimRegistry {
        let mut registry = ClaimRegistry::new(&self.settings);
        for principal in &self.registered {
            registry
                .register(principal)
                .unwrap_or_else(|e| panic!("failed to register {}: {}", principal, e));
        }
        registry.advance_blocks(self.advance_by);
        registry.set_paused(self.paused);
        registry
    }
}
