use counter::config::{Config, ConfigError, ReactorConfig, UiConfig, MAX_DELAY_MS};
use counter::store::DispatchOrder;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.reactor.delay_ms, 1000);
    assert_eq!(config.reactor.delay(), Duration::from_secs(1));
    assert_eq!(config.reactor.ordering, DispatchOrder::Merge);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(100));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("counter/config.toml"));
}

#[test]
fn test_load_from_full_file() {
    let (_dir, path) = write_config(
        r#"[reactor]
delay_ms = 250
ordering = "serial"

[ui]
tick_rate_ms = 40
"#,
    );

    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(
        config,
        Config {
            reactor: ReactorConfig {
                delay_ms: 250,
                ordering: DispatchOrder::Serial,
            },
            ui: UiConfig { tick_rate_ms: 40 },
        }
    );
}

#[test]
fn test_load_from_missing_file_is_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_reports_path() {
    let (_dir, path) = write_config("[reactor\ndelay_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[reactor]\ndelay_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_validation_rejects_huge_delay() {
    let mut config = Config::default();
    config.reactor.delay_ms = MAX_DELAY_MS + 1;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("reactor.delay_ms"));

    config.reactor.delay_ms = MAX_DELAY_MS;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_on_load() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_delay_is_allowed() {
    let (_dir, path) = write_config("[reactor]\ndelay_ms = 0\n");
    let config = Config::load_from(&path).expect("config should load");
    assert_eq!(config.reactor.delay(), Duration::ZERO);
}
