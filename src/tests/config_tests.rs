// Copyright (c) 2025 Trietree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for configuration loading, validation, and usage.

use std::path::PathBuf;

use super::TestFixture;
use crate::config::{ConfigLoader, TrieTreeAppConfig, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = TrieTreeAppConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = TrieTreeAppConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "info".to_string();
    config.words.comment_prefix = Some(String::new());
    assert!(config.validate().is_err());

    config.words.comment_prefix = Some("#".to_string());
    assert!(config.validate().is_ok());
}

/// Test that loading without a file yields the defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<PathBuf>, "TRIETREE_TEST_NOFILE");
    assert_eq!(loader.load().unwrap(), TrieTreeAppConfig::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config.toml",
            r##"
    [log]
    level = "debug"

    [words]
    source = "/srv/words.txt"
    comment_prefix = "#"

    [completion]
    max_results = 10
    "##,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.log.level, "debug");
    assert_eq!(config.words.source, Some(PathBuf::from("/srv/words.txt")));
    assert_eq!(config.words.comment_prefix.as_deref(), Some("#"));
    assert_eq!(config.completion.max_results, 10);

    // Other values should be defaults
    assert!(config.words.trim);
    assert!(config.completion.include_prefix);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config.json",
            r#"{ "completion": { "include_prefix": false } }"#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_JSON")
        .load()
        .unwrap();
    assert!(!config.completion.include_prefix);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.toml", "[completion]\nmax_results = 10\n")
        .unwrap();

    fixture.set_env("TRIETREE_TEST_ENV__COMPLETION__MAX_RESULTS", "3");
    fixture.set_env("TRIETREE_TEST_ENV__LOG__LEVEL", "error");

    let config = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.completion.max_results, 3);
    assert_eq!(config.log.level, "error");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/no/such/trietree.toml"), "TRIETREE_TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that an unsupported extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "level=info").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_INI");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[log\nlevel = info\"")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that values failing validation are rejected at load time.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_BAD_LEVEL");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&TrieTreeAppConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TRIETREE_TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, TrieTreeAppConfig::default());
}

