//! UBI domain errors
//!
//! Every rejection carries a stable numeric code. The codes are part of the
//! external contract and must not be renumbered.

use thiserror::Error;

/// Errors that can occur in the UBI claim domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UbiError {
    #[error("Principal is not registered")]
    NotRegistered,

    #[error("Principal is already registered")]
    AlreadyRegistered,

    #[error("Claim interval has not elapsed")]
    IntervalNotElapsed,

    #[error("Claims are paused")]
    Paused,

    /// A code that does not map to any known rejection
    #[error("Unknown error code {0}")]
    Unknown(u32),
}

impl UbiError {
    /// Returns the numeric error code
    pub fn code(&self) -> u32 {
        match self {
            UbiError::NotRegistered => 101,
            UbiError::AlreadyRegistered => 102,
            UbiError::IntervalNotElapsed => 103,
            UbiError::Paused => 104,
            UbiError::Unknown(code) => *code,
        }
    }

    /// Maps a numeric code back to a known rejection
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            101 => Some(UbiError::NotRegistered),
            102 => Some(UbiError::AlreadyRegistered),
            103 => Some(UbiError::IntervalNotElapsed),
            104 => Some(UbiError::Paused),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in 101..=104 {
            let error = UbiError::from_code(code).unwrap();
            assert_eq!(error.code(), code);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(UbiError::from_code(7), None);
        assert_eq!(UbiError::Unknown(7).code(), 7);
    }
}
