//! Fixed claim parameters

/// Minimum number of blocks between two claims by the same principal
pub const CLAIM_INTERVAL: u64 = 144;

/// Units paid out by every successful claim
pub const CLAIM_AMOUNT: u64 = 100_000;
