//! StaticConfig loading tests

use gamehub::config::StaticConfig;
use gamehub::errors::GameHubError;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("gamehub.toml");
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_load_from_file_keeps_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[server]
port = 9100
api_prefix = "/v2"

[database]
database_url = "sqlite://catalog.db?mode=rwc"
"#,
    );

    let config = StaticConfig::load(Some(&path)).unwrap();
    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.api_prefix, "/v2");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.database.database_url, "sqlite://catalog.db?mode=rwc");
    assert_eq!(config.database.pool_size, 10);
    assert_eq!(config.logging.format, "text");
    assert!(config.cors.enabled);
    assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let result = StaticConfig::load(Some(path.to_string_lossy().as_ref()));
    assert!(matches!(result, Err(GameHubError::Config(_))));
}

#[test]
fn test_invalid_values_fail_validation() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "[server]\napi_prefix = \"api\"\n");
    assert!(StaticConfig::load(Some(&path)).is_err());

    let path = write_config(&dir, "[logging]\nformat = \"xml\"\n");
    assert!(StaticConfig::load(Some(&path)).is_err());

    let path = write_config(&dir, "[database]\ndatabase_url = \"  \"\n");
    assert!(StaticConfig::load(Some(&path)).is_err());
}

#[test]
fn test_sample_config_roundtrips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.toml");

    StaticConfig::default().save_to_file(&path).unwrap();
    let loaded = StaticConfig::load(Some(path.to_string_lossy().as_ref())).unwrap();

    let defaults = StaticConfig::default();
    assert_eq!(loaded.server.port, defaults.server.port);
    assert_eq!(loaded.database.database_url, defaults.database.database_url);
    assert_eq!(loaded.cors.max_age, defaults.cors.max_age);

    let sample = StaticConfig::generate_sample_config();
    assert!(sample.contains("[database]"));
}
