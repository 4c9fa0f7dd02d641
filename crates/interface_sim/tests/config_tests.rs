//! Tests for simulation configuration

use std::collections::HashMap;

use core_kernel::{BlockHeight, Principal};
use interface_sim::{SimConfig, SimError};
use test_utils::{HeightFixtures, SettingsFixtures};

fn environment(vars: &[(&str, &str)]) -> config::Environment {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    config::Environment::with_prefix("UBI").source(Some(map))
}

#[test]
fn test_defaults_when_nothing_set() {
    let config = SimConfig::from_environment(environment(&[])).unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn test_default_settings_match_standard_fixture() {
    let settings = SimConfig::default().settings();
    assert_eq!(settings, SettingsFixtures::standard());
    assert_eq!(settings.start_block, HeightFixtures::start());
}

#[test]
fn test_environment_overrides() {
    let config = SimConfig::from_environment(environment(&[
        ("UBI_ADMIN", "STBOSS"),
        ("UBI_START_BLOCK", "5000"),
        ("UBI_LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(config.admin, "STBOSS");
    assert_eq!(config.treasury, "STTREASURY1");

    let settings = config.settings();
    assert_eq!(settings.admin, Principal::from("STBOSS"));
    assert_eq!(settings.start_block, BlockHeight::new(5000));
}

#[test]
fn test_bad_log_level_rejected() {
    let error =
        SimConfig::from_environment(environment(&[("UBI_LOG_LEVEL", "chatty")])).unwrap_err();
    assert!(matches!(error, SimError::Core(_)));
}

#[test]
fn test_log_level_case_insensitive() {
    let config = SimConfig {
        log_level: "WARN".to_string(),
        ..SimConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_non_numeric_start_block_rejected() {
    let result = SimConfig::from_environment(environment(&[("UBI_START_BLOCK", "soon")]));
    assert!(matches!(result, Err(SimError::Config(_))));
}

#[test]
fn test_numeric_looking_principals_kept_verbatim() {
    let config = SimConfig::from_environment(environment(&[
        ("UBI_ADMIN", "007"),
        ("UBI_TREASURY", "TRUE"),
    ]))
    .unwrap();

    assert_eq!(config.admin, "007");
    assert_eq!(config.treasury, "TRUE");
    assert_eq!(config.settings().admin, Principal::from("007"));
}

#[test]
fn test_exponent_like_admin_not_normalized() {
    let config = SimConfig::from_environment(environment(&[("UBI_ADMIN", "1e3")])).unwrap();
    assert_eq!(config.admin, "1e3");
}
