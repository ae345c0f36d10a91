//! Integration tests for settings persistence
//!
//! Round-trips [`ViewerSettings`] through real files in a per-test temp
//! directory and checks the fallback paths.

use chess_rules::RuleSet;
use chessview::core::{load_settings, read_settings, save_settings, CoreError, ViewerSettings};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(name: &str) -> PathBuf {
    let base = std::env::temp_dir().join("chessview_tests").join(name);
    let _ = fs::create_dir_all(&base);

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    for i in 0..1000u32 {
        let p = base.join(format!("{pid}-{nanos}-{i}"));
        if fs::create_dir(&p).is_ok() {
            return p;
        }
    }

    panic!("failed to create a unique temp dir under {}", base.display());
}

#[test]
fn test_save_then_load_preserves_settings() {
    //! Saving creates missing directories; loading returns the same values
    let dir = unique_temp_dir("roundtrip");
    let path = dir.join("nested").join("settings.json");

    let mut settings = ViewerSettings::default();
    settings.rules = RuleSet::basic();
    settings.show_hints = false;
    settings.capture_pile.spacing = 0.75;
    settings.camera.polar = 1.0;

    save_settings(&settings, &path).unwrap();

    assert!(path.exists());
    assert_eq!(read_settings(&path).unwrap(), settings);
    assert_eq!(load_settings(&path), settings);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = unique_temp_dir("missing");
    let loaded = load_settings(&dir.join("does-not-exist.json"));
    assert_eq!(loaded, ViewerSettings::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = unique_temp_dir("corrupt");
    let path = dir.join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        read_settings(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(load_settings(&path), ViewerSettings::default());
}

#[test]
fn test_invalid_values_fall_back_to_defaults() {
    //! Well-formed JSON with an unusable value is rejected, not half-applied
    let dir = unique_temp_dir("invalid");
    let path = dir.join("settings.json");
    fs::write(&path, r#"{ "show_hints": false, "capture_pile": { "spacing": -1.0 } }"#).unwrap();

    assert!(matches!(
        read_settings(&path),
        Err(CoreError::InvalidSetting { .. })
    ));
    assert_eq!(load_settings(&path), ViewerSettings::default());
}

#[test]
fn test_save_refuses_invalid_settings() {
    let dir = unique_temp_dir("save_invalid");
    let path = dir.join("settings.json");
    let mut settings = ViewerSettings::default();
    settings.capture_pile.spacing = f32::NAN;

    assert!(save_settings(&settings, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = unique_temp_dir("read_missing");
    assert!(matches!(
        read_settings(&dir.join("absent.json")),
        Err(CoreError::SettingsIo(_))
    ));
}
