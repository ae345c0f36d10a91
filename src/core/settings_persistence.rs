//! Settings persistence
//!
//! Saves and loads [`ViewerSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/chessview/settings.json` on Linux. Falls back to a local
//! `settings.json` if the system config dir cannot be found. The binary's
//! `--settings` flag overrides both.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing, unreadable, unparsable or
//!   invalid file falls back to defaults with a warning
//! - [`read_settings`] and [`save_settings`] report [`CoreError`]

use crate::core::error::CoreResult;
use crate::core::settings::ViewerSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Default location of the settings file
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chessview") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read, parse and validate the settings at `path`
///
/// # Errors
///
/// [`crate::core::CoreError`] on I/O, JSON or validation failure.
pub fn read_settings(path: &Path) -> CoreResult<ViewerSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: ViewerSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings for startup, falling back to defaults
pub fn load_settings(path: &Path) -> ViewerSettings {
    if !path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            path
        );
        return ViewerSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            ViewerSettings::default()
        }
    }
}

/// Write `settings` to `path` as pretty JSON, creating the directory if needed
///
/// # Errors
///
/// [`crate::core::CoreError`] when the settings are invalid or the file cannot
/// be written.
pub fn save_settings(settings: &ViewerSettings, path: &Path) -> CoreResult<()> {
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
