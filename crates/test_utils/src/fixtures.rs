//! Pre-built Test Fixtures
//!
//! Provides the principals and heights used throughout the claim scenarios.
//! These fixtures are consistent and predictable for unit tests.

use core_kernel::{BlockHeight, Principal};
use domain_ubi::{RegistrySettings, CLAIM_INTERVAL};
use fake::faker::lorem::en::Word;
use fake::Fake;

/// Fixture for principals
pub struct PrincipalFixtures;

impl PrincipalFixtures {
    /// The default admin principal
    pub fn admin() -> Principal {
        Principal::from("STADMIN111")
    }

    /// The default treasury principal
    pub fn treasury() -> Principal {
        Principal::from("STTREASURY1")
    }

    /// The primary test claimant
    pub fn user1() -> Principal {
        Principal::from("STUSER1")
    }

    /// A second claimant
    pub fn user2() -> Principal {
        Principal::from("STUSER2")
    }

    /// A principal that never registers
    pub fn guest() -> Principal {
        Principal::from("STGUEST")
    }

    /// A random `ST`-prefixed principal
    pub fn random() -> Principal {
        let word: String = Word().fake();
        Principal::new(format!("ST{}", word.to_uppercase()))
    }
}

/// Fixture for block heights
pub struct HeightFixtures;

impl HeightFixtures {
    /// Default starting block
    pub fn start() -> BlockHeight {
        BlockHeight::new(1000)
    }

    /// First height at which a principal registered at `start` may claim
    pub fn first_eligible() -> BlockHeight {
        Self::start().advance(CLAIM_INTERVAL)
    }

    /// One block before `first_eligible`
    pub fn just_before_eligible() -> BlockHeight {
        Self::first_eligible().rewind(1)
    }
}

/// Fixture for genesis settings
pub struct SettingsFixtures;

impl SettingsFixtures {
    /// The settings every scenario resets to
    pub fn standard() -> RegistrySettings {
        RegistrySettings::default()
    }

    /// Standard settings with claims paused from the start
    pub fn paused() -> RegistrySettings {
        RegistrySettings::default().with_paused(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_settings_match_fixtures() {
        let settings = SettingsFixtures::standard();
        assert_eq!(settings.admin, PrincipalFixtures::admin());
        assert_eq!(settings.treasury, PrincipalFixtures::treasury());
        assert_eq!(settings.start_block, HeightFixtures::start());
    }

    #[test]
    fn test_random_principal_prefix() {
        assert!(PrincipalFixtures::random().as_str().starts_with("ST"));
    }

    #[test]
    fn test_eligible_heights() {
        assert_eq!(HeightFixtures::first_eligible().value(), 1144);
        assert_eq!(HeightFixtures::just_before_eligible().value(), 1143);
    }
}
