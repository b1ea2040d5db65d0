//! Tests for the configuration system.

use lumina_library::{LuminaConfig, LuminaConfigBuilder};
use std::io::Write;
use std::path::PathBuf;
use tempfile::Builder;

#[test]
fn test_config_from_file() {
    // Create a temporary config file with .toml extension
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
model = "gemini-2.5-flash"
temperature = 0.4
max_tokens = 128
data_dir = "/tmp/lumina-test"
tick_rate_ms = 100
"#
    )
    .unwrap();

    let config = LuminaConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.model(), "gemini-2.5-flash");
    assert_eq!(*config.temperature(), Some(0.4));
    assert_eq!(*config.max_tokens(), Some(128));
    assert_eq!(*config.tick_rate_ms(), 100);
    assert_eq!(
        config.data_dir().as_deref(),
        Some(PathBuf::from("/tmp/lumina-test").as_path())
    );
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, r#"temperature = 0.9"#).unwrap();

    let config = LuminaConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.model(), "gemini-2.0-flash-lite");
    assert_eq!(*config.temperature(), Some(0.9));
    assert_eq!(*config.max_tokens(), None);
    assert_eq!(*config.tick_rate_ms(), 250);
}

#[test]
fn test_invalid_config_file_is_an_error() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "model = [this is not toml").unwrap();

    assert!(LuminaConfig::from_file(temp_file.path()).is_err());
}

#[test]
fn test_missing_config_file_is_an_error() {
    assert!(LuminaConfig::from_file("/nonexistent/lumina.toml").is_err());
}

#[test]
fn test_builder_defaults() {
    let config = LuminaConfigBuilder::default().build().unwrap();

    assert_eq!(config.model(), "gemini-2.0-flash-lite");
    assert_eq!(*config.temperature(), None);
    assert_eq!(*config.tick_rate_ms(), 250);
}

#[test]
fn test_builder_overrides() {
    let config = LuminaConfigBuilder::default()
        .model("gemini-2.5-pro")
        .temperature(0.2f32)
        .data_dir(PathBuf::from("/tmp/elsewhere"))
        .build()
        .unwrap();

    assert_eq!(config.model(), "gemini-2.5-pro");
    assert_eq!(*config.temperature(), Some(0.2));
    assert_eq!(
        config.shelf_path().unwrap(),
        PathBuf::from("/tmp/elsewhere/books.json")
    );
}

#[test]
fn test_shelf_path_prefers_configured_data_dir() {
    let config = LuminaConfigBuilder::default()
        .data_dir(PathBuf::from("/var/lib/lumina"))
        .build()
        .unwrap();

    assert_eq!(
        config.shelf_path().unwrap(),
        PathBuf::from("/var/lib/lumina/books.json")
    );
}
