//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the engine through its public trait interface,
//! validating default loading, file round-trips, and reset behavior.

use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webshell::types::settings::{ShellSettings, DEFAULT_CONTENT_URL};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` must return the built-in
/// defaults so the shell can start without prior configuration: all three
/// WebView flags on, content URL at its fixed default.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
    assert!(settings.webview.javascript_enabled);
    assert!(settings.webview.dom_storage_enabled);
    assert!(settings.webview.database_enabled);
    assert_eq!(settings.webview.content_url, DEFAULT_CONTENT_URL);
}

/// A config file written to disk must round-trip: a fresh engine reading the
/// same path sees the customized values, not the defaults.
#[test]
fn test_load_reads_customized_config_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut custom = ShellSettings::default();
    custom.window.title = "kiosk".to_string();
    custom.webview.javascript_enabled = false;
    custom.webview.content_url = "/pages/start.html".to_string();
    std::fs::write(&path, serde_json::to_string_pretty(&custom).unwrap()).unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let loaded = engine.load().unwrap();

    assert_eq!(loaded, custom);
}

/// `reset()` must restore factory defaults in memory and persist them, so a
/// completely new engine instance reads defaults back from the same file.
#[test]
fn test_reset_restores_and_persists_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut custom = ShellSettings::default();
    custom.webview.database_enabled = false;
    std::fs::write(&path, serde_json::to_string_pretty(&custom).unwrap()).unwrap();

    {
        let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
        engine.load().unwrap();
        assert!(!engine.get_settings().webview.database_enabled);

        engine.reset().unwrap();
        assert_eq!(*engine.get_settings(), ShellSettings::default());
    }

    {
        let mut engine2 = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
        let loaded = engine2.load().unwrap();
        assert_eq!(
            loaded,
            ShellSettings::default(),
            "Reset must persist defaults to disk so a new engine reads them back"
        );
    }
}

/// A malformed config file is a serialization error, not a silent fallback.
#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    let err = engine.load().unwrap_err();

    assert!(err.to_string().contains("parse"), "unexpected error: {}", err);
}

/// `save()` creates missing parent directories instead of failing.
#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("settings.json");

    let engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.save().unwrap();

    assert!(path.exists());
}
