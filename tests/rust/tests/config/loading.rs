//! Settings files → LogConfig → dispatcher

use logmodule_core::domain::config::env_keys;
use logmodule_core::{ConfigError, LogConfig, DEFAULT_COMPONENT_WIDTH};
use logmodule_tracing::{build_dispatcher, load_config, LogFileLocation};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_settings(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("appsettings.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn load_config_reads_the_log_config_section() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(
        &dir,
        r#"{
            "Logging": { "LogLevel": { "Default": "Information" } },
            "LogConfig": {
                "LogServiceFilePath": "/var/log/payments/service.log",
                "AddSerilog": true,
                "FixedLengthForComponentName": 12
            }
        }"#,
    );

    let config = load_config(&path).unwrap();
    assert_eq!(
        config.file_path(),
        Some(PathBuf::from("/var/log/payments/service.log"))
    );
    assert!(config.add_structured);
    assert_eq!(config.fixed_length_for_component_name, 12);

    let dispatcher = build_dispatcher(&config);
    assert!(dispatcher.is_structured());
    assert_eq!(dispatcher.enricher().width(), 12);

    let location = LogFileLocation::for_config(&config);
    assert_eq!(location.directory, PathBuf::from("/var/log/payments"));
    assert_eq!(location.prefix, "service");
    assert_eq!(location.suffix, "log");
}

#[test]
fn settings_without_the_section_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, r#"{ "ConnectionStrings": { "Default": "x" } }"#);

    let config = load_config(&path).unwrap();
    assert_eq!(config, LogConfig::default());

    let dispatcher = build_dispatcher(&config);
    assert!(!dispatcher.is_structured());
    assert_eq!(dispatcher.enricher().width(), DEFAULT_COMPONENT_WIDTH);
}

#[test]
fn malformed_settings_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, r#"{ "LogConfig": { "AddSerilog": "#);

    let err = LogConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to load LogConfig"));
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let err = LogConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn overrides_take_precedence_over_the_file() {
    let dir = TempDir::new().unwrap();
    let logs_dir = dir.path().join("logs");
    let path = write_settings(
        &dir,
        r#"{ "LogConfig": { "AddSerilog": false, "FixedLengthForComponentName": 30 } }"#,
    );
    let logs_dir_str = format!("{}/", logs_dir.display());
    let vars: HashMap<&str, &str> = [
        (env_keys::FILE_PATH, logs_dir_str.as_str()),
        (env_keys::ADD_SERILOG, "yes"),
        (env_keys::FIXED_LENGTH, "6"),
    ]
    .into_iter()
    .collect();

    let config = LogConfig::load(&path)
        .unwrap()
        .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
        .unwrap();
    assert!(config.add_structured);
    assert_eq!(config.fixed_length_for_component_name, 6);

    let location = LogFileLocation::for_config(&config);
    assert_eq!(location.directory, logs_dir);
    assert_eq!(location.prefix, "logmodule");
}

#[test]
fn invalid_override_names_the_key() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, r#"{ "LogConfig": {} }"#);

    let err = LogConfig::load(&path)
        .unwrap()
        .apply_overrides(|key| (key == env_keys::FIXED_LENGTH).then(|| "wide".to_string()))
        .unwrap_err();
    match err {
        ConfigError::InvalidValue { key, value } => {
            assert_eq!(key, env_keys::FIXED_LENGTH);
            assert_eq!(value, "wide");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn unset_overrides_leave_the_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_settings(&dir, r#"{ "LogConfig": { "FixedLengthForComponentName": 9 } }"#);

    let config = LogConfig::load(Path::new(&path))
        .unwrap()
        .apply_overrides(|_| None)
        .unwrap();
    assert_eq!(config.fixed_length_for_component_name, 9);
    assert!(!config.add_structured);
}
