mod common;

use common::temp_file;
use feedback_survey::config::{Config, ConfigError};
use std::path::PathBuf;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.latency.get_all_ms, 300);
    assert_eq!(config.latency.get_by_id_ms, 200);
    assert_eq!(config.latency.create_ms, 400);
    assert_eq!(config.latency.update_ms, 350);
    assert_eq!(config.latency.delete_ms, 250);

    assert_eq!(config.survey.countdown_seconds, 5);
    assert_eq!(config.survey.toast_seconds, 3);
    assert_eq!(config.survey.tick_rate_ms, 250);

    assert!(config.seed.path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("feedback-survey/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = PathBuf::from("/nonexistent/feedback-survey/config.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[latency]
create_ms = 50

[survey]
countdown_seconds = 10

[seed]
path = "/data/feedback.json"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.latency.create_ms, 50);
    assert_eq!(config.latency.get_all_ms, 300);
    assert_eq!(config.survey.countdown_seconds, 10);
    assert_eq!(config.survey.toast_seconds, 3);
    assert_eq!(
        config.seed.path,
        Some(PathBuf::from("/data/feedback.json"))
    );
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[latency\ncreate_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_zero_latency_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[latency]\nupdate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("latency.update_ms"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_zero_countdown_fails_validation() {
    let mut config = Config::default();
    config.survey.countdown_seconds = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let mut config = Config::default();
    config.survey.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}
