//! Persisted user preferences (theme and language).
//!
//! Web stores a JSON record in `localStorage`; native builds write
//! `settings.json` into the platform config directory. A missing record is not
//! an error and loads as [`Settings::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theme::{Theme, ThemeRoot};

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "darsak.settings";

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no settings storage is available on this platform")]
    Unavailable,
    #[error("settings storage rejected the operation")]
    Storage,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_flag(self.dark_mode)
    }

    /// Load the stored record, falling back to defaults (with a warning) when
    /// it cannot be read.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(%err, "could not load settings; using defaults");
                Self::default()
            }
        }
    }

    /// Read-modify-write helper used by the navbar.
    pub fn update(change: impl FnOnce(&mut Settings)) {
        let mut settings = Self::load_or_default();
        change(&mut settings);
        if let Err(err) = settings.save() {
            tracing::warn!(%err, "could not persist settings");
        }
    }

    /// Push the stored preferences into the running app: theme marker on
    /// `root` and the selected language.
    pub fn apply(&self, root: &ThemeRoot) {
        root.set_theme(self.theme());
        if let Some(lang) = self.language.as_deref() {
            if let Err(err) = crate::i18n::set_language(lang) {
                tracing::warn!(%err, lang, "stored language could not be selected");
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, SettingsError> {
        let storage = local_storage()?;
        match storage.get_item(STORAGE_KEY).map_err(|_| SettingsError::Storage)? {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), SettingsError> {
        let raw = self.to_json()?;
        local_storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|_| SettingsError::Storage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path()?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&settings_path()?)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_json(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, SettingsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SettingsError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<std::path::PathBuf, SettingsError> {
    directories::ProjectDirs::from("org", "Darsak", "darsak")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .ok_or(SettingsError::Unavailable)
}
