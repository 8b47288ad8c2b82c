// Rust guideline compliant 2026-10-15

//! Tests for configuration loading and persistence.

use std::fs;
use tempfile::TempDir;
use tennisfinder_core::{Config, Environment, Error, Role};

#[test]
fn test_missing_file_loads() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(Config::load_file(&temp_dir.path().join("absent.toml")).is_ok());
}

#[test]
fn test_defaults() {
    let defaults = Config::default();
    assert!(defaults.list_all_requires_admin);
    assert_eq!(defaults.default_role, Role::Player);
    assert_eq!(defaults.log_level, "info");
    assert_eq!(defaults.environment, Environment::Development);
    assert!(defaults.allows_seeding());
}

#[test]
fn test_save_then_load_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        environment: Environment::Test,
        list_all_requires_admin: false,
        default_role: Role::CourtOwner,
        log_level: "debug".to_string(),
    };

    config.save(temp_dir.path()).expect("save");
    let content = fs::read_to_string(temp_dir.path().join("config.toml")).expect("read");
    let parsed: Config = toml::from_str(&content).expect("parse");

    assert_eq!(parsed, config);
    assert!(content.contains("default_role = \"COURT_OWNER\""));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let parsed: Config = toml::from_str("environment = \"production\"\n").expect("parse");
    assert_eq!(parsed.environment, Environment::Production);
    assert!(parsed.list_all_requires_admin);
    assert!(!parsed.allows_seeding());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "environment = [").expect("write");

    assert!(matches!(
        Config::load_file(&path),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_unknown_environment_override_rejected() {
    let mut config = Config::default();
    let result = config.apply_overrides(|key| {
        (key == "TENNISFINDER_ENV").then(|| "staging".to_string())
    });
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_environment_parse_accepts_short_names() {
    assert_eq!(Environment::parse("prod").ok(), Some(Environment::Production));
    assert_eq!(Environment::parse("DEV").ok(), Some(Environment::Development));
}
