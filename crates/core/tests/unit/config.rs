//! Configuration Tests.

use std::io::Write;

use pipe8_core::Config;
use pipe8_core::common::ConfigError;
use pretty_assertions::assert_eq;

#[test]
fn defaults_are_quiet_and_bounded() {
    let config = Config::default();
    assert!(!config.trace);
    assert_eq!(config.max_cycles, 10_000);
    assert_eq!(config.input_port, 0);
}

#[test]
fn json_overrides_merge_over_defaults() {
    let config = Config::from_json(r#"{ "trace": true, "input_port": 66 }"#).unwrap();
    assert!(config.trace);
    assert_eq!(config.input_port, 66);
    assert_eq!(config.max_cycles, 10_000, "unset fields keep their defaults");
}

#[test]
fn an_empty_object_is_the_default_config() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.max_cycles, Config::default().max_cycles);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Config::from_json("{ trace: yes }").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_file_reads_and_parses() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "max_cycles": 500 }}"#).unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.max_cycles, 500);
}

#[test]
fn a_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
