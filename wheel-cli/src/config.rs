//! Settings file
//!
//! YAML at `~/.config/cipher-wheel/config.yaml` (or wherever `--config`
//! points). A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use wheel_core::{Mode, Shift};
use wheel_geometry::WheelConfig;

/// Starting state and wheel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub wheel: WheelConfig,
    pub shift: Shift,
    pub mode: Mode,
    pub text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            shift: Shift::new(3),
            mode: Mode::Encrypt,
            text: "HELLO WORLD".to_string(),
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the default location (~/.config/cipher-wheel/config.yaml)
    pub fn default_location() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cipher-wheel");

        Self {
            path: config_dir.join("config.yaml"),
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        settings
            .wheel
            .validate()
            .with_context(|| format!("checking {}", self.path.display()))?;

        tracing::info!(path = %self.path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings.wheel.validate()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(settings)?;

        // Write to temp file first, then rename (atomic)
        let temp_path = self.path.with_extension("yaml.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("writing {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        tracing::info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::at_path(dir.path().join("config.yaml"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::at_path(dir.path().join("nested").join("config.yaml"));

        let settings = Settings {
            shift: Shift::new(7),
            mode: Mode::Decrypt,
            text: "attack at dawn".to_string(),
            ..Default::default()
        };
        store.save(&settings).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "shift: 30\nwheel:\n  outer_radius: 200.0\n").unwrap();

        let settings = SettingsStore::at_path(&path).load().unwrap();
        assert_eq!(settings.shift, Shift::new(4));
        assert_eq!(settings.mode, Mode::Encrypt);
        assert_eq!(settings.wheel.outer_radius, 200.0);
        assert_eq!(settings.wheel.inner_radius, 120.0);
        assert_eq!(settings.text, "HELLO WORLD");
    }

    #[test]
    fn test_invalid_wheel_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "wheel:\n  outer_radius: 10.0\n").unwrap();

        assert!(SettingsStore::at_path(&path).load().is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "mode: sideways\n").unwrap();

        assert!(SettingsStore::at_path(&path).load().is_err());
    }
}
