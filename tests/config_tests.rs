use std::{env, fs, path::PathBuf};

use barmenu::{ConfigError, DecodeOptions, LogFormat, LoggingConfig, LoggingError, Settings};
use serial_test::serial;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "BARMENU_DECODE__MAX_DEPTH",
    "BARMENU_DECODE__MAX_INPUT_LEN",
    "BARMENU_LOG_LEVEL",
    "BARMENU_LOG_FORMAT",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn write_config(
    dir: &TempDir,
    contents: &str,
) -> PathBuf {
    let path = dir.path().join("barmenu.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_load_from_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[decode]
max_depth = 8
accept_degenerate_empty_array = false
accept_empty_tag = false

[logging]
level = "debug"
format = "json"
directives = ["barmenu::codec=trace"]
"#,
    );

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.decode.max_depth, 8);
    assert_eq!(
        settings.decode.max_input_len,
        DecodeOptions::default().max_input_len
    );
    assert!(!settings.decode.accept_degenerate_empty_array);
    assert!(!settings.decode.accept_empty_tag);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, LogFormat::Json);
    assert_eq!(
        settings.logging.build_filter_directive(),
        "debug,barmenu::codec=trace"
    );
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[decode]\nmax_depth = 8\n");

    env::set_var("BARMENU_DECODE__MAX_DEPTH", "16");
    let result = Settings::load_from(&path);
    clear_env();

    assert_eq!(result.unwrap().decode.max_depth, 16);
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let result = Settings::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "[decode]\nmax_depth = 0\n");
    assert!(matches!(
        Settings::load_from(&path),
        Err(ConfigError::Invalid {
            field: "decode.max_depth",
            ..
        })
    ));

    let path = write_config(&dir, "[logging]\nlevel = \"chatty\"\n");
    assert!(matches!(
        Settings::load_from(&path),
        Err(ConfigError::Invalid {
            field: "logging",
            ..
        })
    ));
}

#[test]
#[serial]
fn test_logging_env_overrides() {
    clear_env();
    env::set_var("BARMENU_LOG_LEVEL", " WARN ");
    env::set_var("BARMENU_LOG_FORMAT", "compact");

    let mut config = LoggingConfig::default();
    let result = config.apply_env_overrides();
    clear_env();

    assert!(result.is_ok());
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_logging_env_rejects_unknown_format() {
    clear_env();
    env::set_var("BARMENU_LOG_FORMAT", "xml");

    let mut config = LoggingConfig::default();
    let result = config.apply_env_overrides();
    clear_env();

    assert!(matches!(result, Err(LoggingError::InvalidFormat(f)) if f == "xml"));
    assert_eq!(config.format, LogFormat::Pretty);
}
