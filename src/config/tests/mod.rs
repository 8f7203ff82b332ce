//! Unit tests for config module
//!
//! Tests configuration types, defaults, serialization and file loading.

#![allow(clippy::panic)]

use std::path::PathBuf;

use tempfile::TempDir;

use crate::{
    NetDialogsError,
    config::{Config, LogLevel},
    settings::PppSection,
};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.keygen.wg_binary, PathBuf::from("/usr/bin/wg"));
    assert_eq!(config.pppoe.lcp_echo_failure, 5);
    assert_eq!(config.pppoe.lcp_echo_interval, 30);
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[keygen]"));
    assert!(toml_str.contains("[pppoe]"));
}

#[test]
fn config_deserialize_partial_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [pppoe]
        lcp_echo_failure = 8
    "#;

    let config = Config::from_toml(toml_str, None).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.pppoe.lcp_echo_failure, 8);
    assert_eq!(config.pppoe.lcp_echo_interval, 30);
    assert_eq!(config.keygen, Default::default());
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = Config::from_toml(&toml_str, None).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    assert_eq!(Config::from_toml("", None).unwrap(), Config::default());
}

#[test]
fn invalid_log_level_is_a_parse_error() {
    let err = Config::from_toml("[general]\nlog_level = \"loud\"", None).unwrap_err();

    assert!(matches!(
        err,
        NetDialogsError::TomlParseError { location, .. } if location == "string"
    ));
}

#[test]
fn relative_wg_binary_fails_validation() {
    let config = Config::from_toml("[keygen]\nwg_binary = \"wg\"", None).unwrap();

    let err = config.validate().unwrap_err();

    assert!(matches!(
        err,
        NetDialogsError::ConfigValidation { component, .. } if component == "keygen.wg_binary"
    ));
}

#[test]
fn pppoe_defaults_feed_factory_counters() {
    let config = Config::from_toml("[pppoe]\nlcp_echo_interval = 12", None).unwrap();

    let ppp = PppSection::from(config.pppoe);

    assert_eq!(ppp.lcp_echo_failure, 5);
    assert_eq!(ppp.lcp_echo_interval, 12);
}

#[test]
fn load_creates_missing_file_with_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/config.toml");

    let config = Config::load(&path).unwrap();

    assert_eq!(config, Config::default());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# netdialogs configuration file"));
}

#[test]
fn load_reads_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[keygen]\nwg_binary = \"/opt/wg/bin/wg\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.keygen.wg_binary, PathBuf::from("/opt/wg/bin/wg"));
}

#[test]
fn log_level_display_matches_serde() {
    for level in [LogLevel::Error, LogLevel::Warn, LogLevel::Trace] {
        let rendered = toml::Value::try_from(level).unwrap();
        assert_eq!(rendered.as_str(), Some(level.as_directive()));
        assert_eq!(level.to_string(), level.as_directive());
    }
}
