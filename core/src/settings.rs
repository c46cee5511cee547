//! Launcher settings (~/.config/Hearth/settings.toml)
//!
//! Handles loading, saving, and providing defaults for launcher settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.toml";

/// Launcher settings.
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Content-addressed file store
    #[serde(default)]
    pub content: ContentSettings,
    /// Emulator backend executables
    #[serde(default)]
    pub emulators: EmulatorSettings,
}

/// Location of the content-addressed file store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Root directory of the store (default: `<data dir>/content`)
    #[serde(default = "default_store")]
    pub store: PathBuf,
}

/// Emulator backend executables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmulatorSettings {
    /// VICE C64 emulator (default: `x64sc`, looked up on PATH)
    #[serde(default = "default_vice")]
    pub vice: PathBuf,
}

fn default_store() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("content"))
        .unwrap_or_else(|| PathBuf::from("content"))
}
fn default_vice() -> PathBuf {
    PathBuf::from("x64sc")
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            store: default_store(),
        }
    }
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            vice: default_vice(),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.hearth", "", "Hearth")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the platform-specific data directory.
///
/// Returns `None` if the home directory cannot be determined.
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.hearth", "", "Hearth")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Loads the settings from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Settings {
    let Some(path) = config_dir().map(|dir| dir.join(SETTINGS_FILE)) else {
        return Settings::default();
    };
    if !path.exists() {
        return Settings::default();
    }
    match load_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings file: {:#}", e);
            Settings::default()
        }
    }
}

/// Loads settings from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Saves settings to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.emulators.vice, PathBuf::from("x64sc"));
        assert!(settings.content.store.ends_with("content"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let settings: Settings = toml::from_str("[content]\n").unwrap();
        assert_eq!(settings.content, ContentSettings::default());
    }

    #[test]
    fn test_parse_overrides() {
        let settings: Settings = toml::from_str(
            r#"
            [content]
            store = "/srv/hearth/content"

            [emulators]
            vice = "/usr/bin/x64"
            "#,
        )
        .unwrap();
        assert_eq!(settings.content.store, PathBuf::from("/srv/hearth/content"));
        assert_eq!(settings.emulators.vice, PathBuf::from("/usr/bin/x64"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.emulators.vice = PathBuf::from("/opt/vice/x64sc");
        save_to(&settings, &path).unwrap();

        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_save_to_reports_path_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = save_to(&Settings::default(), &blocker.join("settings.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create"), "{err:#}");
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "content = [").unwrap();
        assert!(load_from(&path).is_err());
        assert!(load_from(&dir.path().join("missing.toml")).is_err());
    }
}
