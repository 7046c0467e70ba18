//! Unit tests for configuration files on disk

use cyberport::config::loader::{ConfigLoader, LoadOptions};
use cyberport::config::{Config, ThemeMode};
use cyberport::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_with_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.toml");
    fs::write(
        &path,
        r#"
        [reveal]
        boot_interval_ms = 20

        [contact]
        prompt = "visitor@cyberport:~$"

        [ui]
        theme = "light"
        animate = false
        "#,
    )
    .unwrap();

    let config = cyberport::init_with_config(&path).unwrap();
    assert_eq!(config.reveal.boot_interval_ms, 20);
    assert_eq!(config.reveal.title_interval_ms, 100);
    assert_eq!(config.contact.prompt, "visitor@cyberport:~$");
    assert_eq!(config.ui.theme, ThemeMode::Light);
    assert!(!config.ui.animate);
}

#[test]
fn test_init_with_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("portfolio.json");
    fs::write(&path, r#"{ "scene": { "node_count": 3, "seed": 9 } }"#).unwrap();

    let config = cyberport::init_with_config(&path).unwrap();
    assert_eq!(config.scene.node_count, 3);
    assert_eq!(config.scene.seed, Some(9));
}

#[test]
fn test_invalid_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[contact]\nemail_uri = \"file:///etc/passwd\"\n").unwrap();

    let err = cyberport::init_with_config(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigValidationFailed { .. }));
    assert!(cyberport::handle_startup_error(&err).contains("contact.email_uri"));
}

#[test]
fn test_parse_error_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[reveal\n").unwrap();

    let err = cyberport::init_with_config(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParseFailed { .. }));
}

#[test]
fn test_json_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut loader = ConfigLoader::new();
    loader.set_search_path(dir.path().to_path_buf());

    let mut config = Config::default();
    config.ui.color = false;
    loader
        .save_to_path(&config, &dir.path().join("config.json"))
        .unwrap();

    let loaded = loader.load_with(LoadOptions::default()).unwrap();
    assert_eq!(loaded, config);
}
