//! Settings file discovery, loading and saving.
//!
//! The settings file is looked up in this order:
//!
//! 1. `$XDG_CONFIG_HOME/gdswitch/settings.toml`
//! 2. `~/.config/gdswitch/settings.toml`
//! 3. Platform default (e.g., `~/Library/Application Support` on macOS)
//!
//! Loading never fails. A missing or unreadable file gives the defaults.

use crate::config::Settings;
use crate::error::{Result, SwitchError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "gdswitch";
const SETTINGS_FILE: &str = "settings.toml";

/// Determine the settings file path.
///
/// Prefers an existing file in `$XDG_CONFIG_HOME` or `~/.config`. If none
/// exists yet, returns the first candidate that can be determined, which is
/// where [`save_settings`] will create it.
///
/// # Errors
///
/// Returns [`SwitchError::NoConfigDir`] if no config directory can be determined.
pub fn default_settings_path() -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = [
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::home_dir().map(|home| home.join(".config")),
        dirs::config_dir(),
    ]
    .into_iter()
    .flatten()
    .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    .collect();

    if let Some(existing) = candidates.iter().find(|path| path.exists()) {
        return Ok(existing.clone());
    }

    candidates.into_iter().next().ok_or(SwitchError::NoConfigDir)
}

/// Load settings from the given path.
///
/// Falls back to [`Settings::default`] if the file is absent or unreadable.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => Settings::from_toml(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot read settings, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from the default path.
pub fn load_default_settings() -> Settings {
    match default_settings_path() {
        Ok(path) => load_settings(&path),
        Err(e) => {
            warn!(error = %e, "Using default settings");
            Settings::default()
        }
    }
}

/// Write settings to the given path, creating parent directories.
///
/// # Errors
///
/// - [`SwitchError::IoError`] if the directory or file cannot be written
/// - [`SwitchError::SerializeError`] if serialization fails
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, settings.to_toml()?)?;
    debug!(path = %path.display(), "Saved settings");
    Ok(())
}

/// Write settings to the default path.
pub fn save_default_settings(settings: &Settings) -> Result<PathBuf> {
    let path = default_settings_path()?;
    save_settings(&path, settings)?;
    Ok(path)
}
