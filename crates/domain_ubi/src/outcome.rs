//! Tagged call outcomes
//!
//! Registry operations return `Result<T, UbiError>` internally. At the
//! boundary they are rendered as `{"value": ...}` on success or
//! `{"error": <code>}` on failure.

use serde::{Deserialize, Serialize};

use crate::error::UbiError;

/// Success-with-value or failure-with-code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallOutcome<T> {
    #[serde(rename = "value")]
    Value(T),
    #[serde(rename = "error")]
    Error(u32),
}

impl<T> CallOutcome<T> {
    /// Returns true on success
    pub fn is_value(&self) -> bool {
        matches!(self, CallOutcome::Value(_))
    }

    /// Returns the success value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            CallOutcome::Value(v) => Some(v),
            CallOutcome::Error(_) => None,
        }
    }

    /// Returns the error code, if any
    pub fn error_code(&self) -> Option<u32> {
        match self {
            CallOutcome::Value(_) => None,
            CallOutcome::Error(code) => Some(*code),
        }
    }

    /// Maps the success value, leaving error codes untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> CallOutcome<U> {
        match self {
            CallOutcome::Value(v) => CallOutcome::Value(f(v)),
            CallOutcome::Error(code) => CallOutcome::Error(code),
        }
    }

    /// Converts back into a `Result`
    ///
    /// Codes outside the known set become `UbiError::Unknown`.
    pub fn into_result(self) -> Result<T, UbiError> {
        match self {
            CallOutcome::Value(v) => Ok(v),
            CallOutcome::Error(code) => {
                Err(UbiError::from_code(code).unwrap_or(UbiError::Unknown(code)))
            }
        }
    }
}

impl<T> From<Result<T, UbiError>> for CallOutcome<T> {
    fn from(result: Result<T, UbiError>) -> Self {
        match result {
            Ok(v) => CallOutcome::Value(v),
            Err(e) => CallOutcome::Error(e.code()),
        }
    }
}
