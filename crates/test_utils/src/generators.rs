//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating registry inputs.

use core_kernel::{BlockHeight, Principal};
use domain_ubi::CLAIM_INTERVAL;
use proptest::prelude::*;

/// Strategy for `ST`-prefixed principals
pub fn principal_strategy() -> impl Strategy<Value = Principal> {
    "ST[A-Z0-9]{1,12}".prop_map(Principal::new)
}

/// Strategy for arbitrary principals, including empty and non-ASCII strings
pub fn any_principal_strategy() -> impl Strategy<Value = Principal> {
    any::<String>().prop_map(Principal::new)
}

/// Strategy for starting heights with room to advance
pub fn start_height_strategy() -> impl Strategy<Value = BlockHeight> {
    (0u64..10_000_000u64).prop_map(BlockHeight::new)
}

/// Strategy for waits shorter than the claim interval
pub fn short_wait_strategy() -> impl Strategy<Value = u64> {
    0..CLAIM_INTERVAL
}

/// Strategy for waits at least as long as the claim interval
pub fn long_wait_strategy() -> impl Strategy<Value = u64> {
    CLAIM_INTERVAL..CLAIM_INTERVAL * 100
}

/// Strategy for any wait, short or long
pub fn wait_strategy() -> impl Strategy<Value = u64> {
    prop_oneof![short_wait_strategy(), long_wait_strategy()]
}
