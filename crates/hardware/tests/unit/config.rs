//! # Configuration Tests
//!
//! Defaults, JSON deserialization, file loading, and validation.

use std::io::Write;

use rstest::rstest;
use twelvebit_core::common::ConfigError;
use twelvebit_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.machine.word_bits, 12);
    assert_eq!(config.machine.ram_words, 64);
    assert!(!config.general.step_when_halted);
    assert_eq!(config.general.seed, None);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.driver.fast_target_hz, 1_000_000);
    assert_eq!(config.driver.max_ticks_per_frame, 16_666);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_gives_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.machine.word_bits, 12);
    assert_eq!(config.machine.ram_words, 64);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "machine": { "ram_words": 128 } }"#).unwrap();
    assert_eq!(config.machine.word_bits, 12);
    assert_eq!(config.machine.ram_words, 128);
    assert_eq!(config.driver.fast_target_hz, 1_000_000);
}

#[rstest]
#[case(0)]
#[case(17)]
#[case(64)]
fn test_invalid_word_width(#[case] bits: u32) {
    let json = format!(r#"{{ "machine": {{ "word_bits": {bits} }} }}"#);
    match Config::from_json_str(&json) {
        Err(ConfigError::InvalidWordWidth(b)) => assert_eq!(b, bits),
        other => panic!("expected InvalidWordWidth, got {other:?}"),
    }
}

#[rstest]
#[case(0)]
#[case(65_537)]
fn test_invalid_ram_size(#[case] words: usize) {
    let json = format!(r#"{{ "machine": {{ "ram_words": {words} }} }}"#);
    assert!(matches!(
        Config::from_json_str(&json),
        Err(ConfigError::InvalidRamSize(n)) if n == words
    ));
}

#[test]
fn test_zero_driver_rate_rejected() {
    let result = Config::from_json_str(r#"{ "driver": { "max_ticks_per_frame": 0 } }"#);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidDriverRate {
            max_ticks_per_frame: 0,
            ..
        })
    ));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Config::from_json_str("{ machine: }"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "seed": 42, "step_when_halted": true }} }}"#
    )
    .unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.general.seed, Some(42));
    assert!(config.general.step_when_halted);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_error_messages_name_the_value() {
    let msg = ConfigError::InvalidWordWidth(20).to_string();
    assert!(msg.contains("20"));
    assert!(msg.contains("16"));
}
