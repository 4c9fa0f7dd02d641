//! Simulated chain time
//!
//! A `BlockHeight` is a plain counter. Nothing here enforces that it only
//! moves forward; callers may rewind it, and `elapsed_since` reports that
//! case as `None` instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A block height on the simulated chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Height zero
    pub const GENESIS: BlockHeight = BlockHeight(0);

    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Returns the raw height
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns the height `blocks` later, saturating at `u64::MAX`
    pub fn advance(&self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }

    /// Returns the height `blocks` earlier, saturating at zero
    pub fn rewind(&self, blocks: u64) -> Self {
        Self(self.0.saturating_sub(blocks))
    }

    /// Number of blocks between `earlier` and `self`
    ///
    /// Returns `None` when `earlier` is actually ahead of `self`.
    pub fn elapsed_since(&self, earlier: BlockHeight) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockHeight {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| CoreError::validation(format!("invalid block height '{}': {}", s, e)))
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl From<BlockHeight> for u64 {
    fn from(height: BlockHeight) -> u64 {
        height.0
    }
}
