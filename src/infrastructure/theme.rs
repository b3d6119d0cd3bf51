use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemePreference {
    /// None until the user has toggled at least once.
    mode: Option<ThemeMode>,
}

/// Persists the dark-mode choice under the app data dir. A stored choice wins;
/// before the first toggle the OS preference decides.
pub struct ThemeService {
    path: PathBuf,
    preference: ThemePreference,
}

impl ThemeService {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let path = data_dir.join("theme.json");
        let preference = Self::load(&path)?;
        Ok(Self { path, preference })
    }

    fn load(path: &PathBuf) -> Result<ThemePreference> {
        if !path.exists() {
            return Ok(ThemePreference::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|err| AppError::IoError(format!("Failed to read theme preference: {}", err)))?;
        serde_json::from_str(&content)
            .map_err(|err| AppError::Internal(format!("Failed to parse theme preference: {}", err)))
    }

    fn save(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.preference)
            .map_err(|err| AppError::Internal(format!("Failed to serialize theme preference: {}", err)))?;
        fs::write(&self.path, serialized)
            .map_err(|err| AppError::IoError(format!("Failed to save theme preference: {}", err)))
    }

    pub fn current(&self, system_prefers_dark: bool) -> ThemeMode {
        match self.preference.mode {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }

    pub fn toggle(&mut self, system_prefers_dark: bool) -> Result<ThemeMode> {
        let next = match self.current(system_prefers_dark) {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.preference.mode = Some(next);
        self.save()?;
        info!(mode = next.label(), "Theme toggled");
        Ok(next)
    }
}
