//! Claim registry
//!
//! `ClaimRegistry` owns a `RegistryState` and applies the four claim
//! operations to it. Each operation either applies its single mutation or
//! none at all.

use tracing::{debug, info};

use core_kernel::{BlockHeight, Principal};
use crate::constants::{CLAIM_AMOUNT, CLAIM_INTERVAL};
use crate::error::UbiError;
use crate::events::{RecordedEvent, RegistryEvent};
use crate::settings::RegistrySettings;
use crate::state::RegistryState;

/// Single-owner registry of UBI claimants
#[derive(Debug, Clone, Default)]
pub struct ClaimRegistry {
    state: RegistryState,
    events: Vec<RecordedEvent>,
}

impl ClaimRegistry {
    /// Creates an empty registry from genesis settings
    pub fn new(settings: &RegistrySettings) -> Self {
        Self {
            state: RegistryState::new(settings),
            events: Vec::new(),
        }
    }

    /// Wraps an existing state
    pub fn from_state(state: RegistryState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    /// Registers `caller` at the current block height
    pub fn register(&mut self, caller: &Principal) -> Result<bool, UbiError> {
        if self.state.registered_users.contains_key(caller) {
            debug!(
                principal = %caller,
                code = UbiError::AlreadyRegistered.code(),
                "Registration rejected"
            );
            return Err(UbiError::AlreadyRegistered);
        }

        let height = self.state.current_block;
        self.state.registered_users.insert(caller.clone(), height);
        debug!(principal = %caller, %height, "Principal registered");
        self.record(RegistryEvent::Registered {
            principal: caller.clone(),
            height,
        });
        Ok(true)
    }

    /// Whether `caller` could claim right now, ignoring the pause flag
    ///
    /// Never fails: an unregistered caller simply cannot claim.
    pub fn can_claim(&self, caller: &Principal) -> Result<bool, UbiError> {
        if !self.state.registered_users.contains_key(caller) {
            return Ok(false);
        }
        Ok(self.interval_elapsed(caller))
    }

    /// Pays `CLAIM_AMOUNT` to `caller` and restarts its interval
    ///
    /// Checks run in order: paused, registered, interval elapsed.
    pub fn claim(&mut self, caller: &Principal) -> Result<u64, UbiError> {
        if let Err(e) = self.check_claim(caller) {
            debug!(principal = %caller, code = e.code(), "Claim rejected");
            return Err(e);
        }

        let height = self.state.current_block;
        self.state.registered_users.insert(caller.clone(), height);
        info!(principal = %caller, %height, amount = CLAIM_AMOUNT, "Claim paid");
        self.record(RegistryEvent::Claimed {
            principal: caller.clone(),
            height,
            amount: CLAIM_AMOUNT,
        });
        Ok(CLAIM_AMOUNT)
    }

    /// Whether `caller` is the admin principal
    pub fn is_admin(&self, caller: &Principal) -> bool {
        *caller == self.state.admin
    }

    fn check_claim(&self, caller: &Principal) -> Result<(), UbiError> {
        if self.state.paused {
            return Err(UbiError::Paused);
        }
        if !self.state.registered_users.contains_key(caller) {
            return Err(UbiError::NotRegistered);
        }
        if !self.interval_elapsed(caller) {
            return Err(UbiError::IntervalNotElapsed);
        }
        Ok(())
    }

    fn interval_elapsed(&self, caller: &Principal) -> bool {
        self.state
            .blocks_since_last(caller)
            .is_some_and(|elapsed| elapsed >= CLAIM_INTERVAL)
    }

    fn record(&mut self, event: RegistryEvent) {
        self.events.push(RecordedEvent::new(event));
    }

    // ------------------------------------------------------------------
    // Direct state mutation. None of these consult `is_admin`.
    // ------------------------------------------------------------------

    /// Pauses or resumes claims
    pub fn set_paused(&mut self, paused: bool) {
        if self.state.paused == paused {
            return;
        }
        self.state.paused = paused;
        info!(paused, "Claim pause flag changed");
        self.record(RegistryEvent::PauseChanged { paused });
    }

    /// Replaces the admin principal
    pub fn set_admin(&mut self, admin: impl Into<Principal>) {
        let admin = admin.into();
        if self.state.admin == admin {
            return;
        }
        debug!(%admin, "Admin changed");
        self.state.admin = admin.clone();
        self.record(RegistryEvent::AdminChanged { admin });
    }

    /// Replaces the treasury principal
    pub fn set_treasury(&mut self, treasury: impl Into<Principal>) {
        let treasury = treasury.into();
        if self.state.treasury == treasury {
            return;
        }
        debug!(%treasury, "Treasury changed");
        self.state.treasury = treasury.clone();
        self.record(RegistryEvent::TreasuryChanged { treasury });
    }

    /// Moves the simulated chain to `height`, forwards or backwards
    pub fn set_current_block(&mut self, height: impl Into<BlockHeight>) {
        let to = height.into();
        let from = self.state.current_block;
        if from == to {
            return;
        }
        self.state.current_block = to;
        debug!(%from, %to, "Block height moved");
        self.record(RegistryEvent::BlockMoved { from, to });
    }

    /// Advances the simulated chain by `blocks`
    pub fn advance_blocks(&mut self, blocks: u64) {
        let next = self.state.current_block.advance(blocks);
        self.set_current_block(next);
    }

    /// Restores genesis settings, forgetting all users and events
    pub fn reset(&mut self, settings: &RegistrySettings) {
        self.state.reset(settings);
        self.events.clear();
        debug!(start_block = %settings.start_block, "Registry reset");
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> &RegistryState {
        &self.state
    }

    pub fn admin(&self) -> &Principal {
        &self.state.admin
    }

    pub fn treasury(&self) -> &Principal {
        &self.state.treasury
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn current_block(&self) -> BlockHeight {
        self.state.current_block
    }

    /// Height of the last claim, or of registration if never claimed
    pub fn last_claim_height(&self, caller: &Principal) -> Option<BlockHeight> {
        self.state.last_height(caller)
    }

    pub fn is_registered(&self, caller: &Principal) -> bool {
        self.state.registered_users.contains_key(caller)
    }

    pub fn registered_count(&self) -> usize {
        self.state.registered_users.len()
    }

    /// Blocks remaining before `caller` may claim
    ///
    /// `None` when unregistered, `Some(0)` when claimable now. If the chain
    /// was rewound below the recorded height, the count runs up to the
    /// recorded height plus the interval.
    pub fn blocks_until_claimable(&self, caller: &Principal) -> Option<u64> {
        let last = self.state.last_height(caller)?;
        let eligible_at = last.advance(CLAIM_INTERVAL);
        Some(
            eligible_at
                .elapsed_since(self.state.current_block)
                .unwrap_or(0),
        )
    }

    /// Accepted state changes, oldest first
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ClaimRegistry {
        ClaimRegistry::new(&RegistrySettings::default())
    }

    #[test]
    fn test_pause_wins_over_missing_registration() {
        let mut registry = registry();
        registry.set_paused(true);
        assert_eq!(registry.claim(&Principal::from("STGUEST")), Err(UbiError::Paused));
    }

    #[test]
    fn test_rewind_below_baseline_blocks_claim() {
        let mut registry = registry();
        let user = Principal::from("STUSER1");
        registry.register(&user).unwrap();
        registry.set_current_block(900u64);

        assert_eq!(registry.can_claim(&user), Ok(false));
        assert_eq!(registry.claim(&user), Err(UbiError::IntervalNotElapsed));
        assert_eq!(registry.blocks_until_claimable(&user), Some(244));
    }

    #[test]
    fn test_from_state_keeps_existing_users() {
        let mut state = RegistryState::default();
        state
            .registered_users
            .insert(Principal::from("STUSER1"), BlockHeight::new(856));

        let mut registry = ClaimRegistry::from_state(state);
        assert_eq!(registry.claim(&Principal::from("STUSER1")), Ok(CLAIM_AMOUNT));
        assert_eq!(registry.events().len(), 1);
    }

    #[test]
    fn test_setting_same_pause_flag_records_nothing() {
        let mut registry = registry();
        registry.set_paused(false);
        assert!(registry.events().is_empty());
    }

    #[test]
    fn test_setting_same_admin_or_treasury_records_nothing() {
        let mut registry = registry();
        let settings = RegistrySettings::default();
        registry.set_admin(settings.admin.clone());
        registry.set_treasury(settings.treasury.clone());
        assert!(registry.events().is_empty());

        registry.set_admin("STBOSS");
        registry.set_admin("STBOSS");
        assert_eq!(registry.events().len(), 1);
    }
}
