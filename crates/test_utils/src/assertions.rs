//! Custom Test Assertions
//!
//! Provides assertion helpers for registry results that give more
//! meaningful failure messages than plain `assert_eq!`.

use std::fmt::Debug;

use domain_ubi::{CallOutcome, UbiError};
use serde::Serialize;

/// Asserts that a registry call failed with the given numeric code
///
/// # Panics
///
/// Panics if the call succeeded or failed with a different code
pub fn assert_error_code<T: Debug>(result: Result<T, UbiError>, code: u32) {
    match result {
        Ok(value) => panic!("Expected error {}, got value {:?}", code, value),
        Err(e) => assert_eq!(
            e.code(),
            code,
            "Expected error {}, got {} ({})",
            code,
            e.code(),
            e
        ),
    }
}

/// Asserts that a registry call succeeded with the given value
pub fn assert_value<T: Debug + PartialEq>(result: Result<T, UbiError>, expected: T) {
    match result {
        Ok(value) => assert_eq!(value, expected, "Unexpected success value"),
        Err(e) => panic!("Expected value {:?}, got error {} ({})", expected, e.code(), e),
    }
}

/// Asserts that an outcome serializes to exactly the given JSON text
pub fn assert_outcome_json<T: Serialize>(outcome: &CallOutcome<T>, expected: &str) {
    let actual = serde_json::to_string(outcome).expect("outcome should serialize");
    assert_eq!(actual, expected, "Outcome JSON mismatch");
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}
