//! Settings persistence against the real filesystem

use rustview_core::config::{ConfigError, ConfigManager, WindowSettings};
use rustview_core::window::{MAX_ZOOM_LEVEL, NORMAL_ZOOM_LEVEL};

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ConfigManager::with_path(dir.path().join("settings.toml"));

    let settings = manager.load().expect("load");
    assert_eq!(settings, WindowSettings::default());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    // The parent directory does not exist yet; save must create it.
    let manager = ConfigManager::with_path(dir.path().join("rustview").join("settings.toml"));

    let mut settings = WindowSettings {
        zoom_level: 150,
        fullscreen: true,
        ..WindowSettings::default()
    };
    settings
        .keybindings
        .overrides
        .insert("win.zoom-in".into(), "<Control>equal".into());

    manager.save(&settings).expect("save");
    let loaded = manager.load().expect("load");
    assert_eq!(loaded, settings);
}

#[test]
fn out_of_range_zoom_is_clamped_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "zoom_level = 9000\n").expect("write");

    let manager = ConfigManager::with_path(path);
    let settings = manager.load().expect("load");
    assert_eq!(settings.zoom_level, MAX_ZOOM_LEVEL);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "fullscreen = true\n").expect("write");

    let manager = ConfigManager::with_path(path);
    let settings = manager.load().expect("load");
    assert!(settings.fullscreen);
    assert_eq!(settings.zoom_level, NORMAL_ZOOM_LEVEL);
    assert!(!settings.kiosk);
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "zoom_level = \"not a number\"\n").expect("write");

    let manager = ConfigManager::with_path(path.clone());
    match manager.load() {
        Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}
