//! Settings storage
//!
//! Manages persistence of user preferences and application settings.

use crate::storage::{get_data_dir, StorageError};
use crate::types::category::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_TITLE: &str = "Folio";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory holding the stored record lists
    #[serde(default = "default_content_directory")]
    pub content_directory: PathBuf,
    /// Portfolio filter selected on startup: "All" or a category label
    #[serde(default = "default_filter")]
    pub default_filter: String,
    /// Seed empty stores with the built-in records
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
    /// Desktop window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_content_directory() -> PathBuf {
    get_data_dir()
        .ok()
        .map(|d| d.join("content"))
        .unwrap_or_else(|| PathBuf::from("./content"))
}

fn default_filter() -> String {
    CategoryFilter::ALL_LABEL.to_string()
}

fn default_seed() -> bool {
    true
}

fn default_window_title() -> String {
    DEFAULT_WINDOW_TITLE.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            content_directory: default_content_directory(),
            default_filter: default_filter(),
            seed_defaults: default_seed(),
            window_title: default_window_title(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Resets anything the app cannot use back to its default.
    pub fn validate(&mut self) {
        if CategoryFilter::from_label(&self.default_filter).is_none() {
            tracing::warn!(
                "Unknown default filter {:?}, using {}",
                self.default_filter,
                CategoryFilter::ALL_LABEL
            );
            self.default_filter = default_filter();
        }

        if self.window_title.trim().is_empty() {
            self.window_title = default_window_title();
        }

        if self.content_directory.as_os_str().is_empty() {
            self.content_directory = default_content_directory();
        }
    }

    /// The startup portfolio filter, already validated
    pub fn initial_filter(&self) -> CategoryFilter {
        CategoryFilter::from_label(&self.default_filter).unwrap_or_default()
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load settings from a specific file, with error propagation
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    save_settings_to(settings, &get_settings_path()?)
}

/// Save settings to a specific file
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::category::Category;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_filter, "All");
        assert!(settings.seed_defaults);
        assert_eq!(settings.window_title, "Folio");
        assert!(settings.content_directory.ends_with("content"));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.default_filter = "Sculpture".to_string();
        settings.window_title = "   ".to_string();
        settings.content_directory = PathBuf::new();
        settings.validate();

        assert_eq!(settings.default_filter, "All");
        assert_eq!(settings.window_title, "Folio");
        assert!(!settings.content_directory.as_os_str().is_empty());

        settings.default_filter = "Photography".to_string();
        settings.validate();
        assert_eq!(settings.initial_filter(), CategoryFilter::Only(Category::Photography));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"seed_defaults": false}"#).unwrap();
        assert!(!settings.seed_defaults);
        assert_eq!(settings.default_filter, "All");
        assert_eq!(settings.window_title, "Folio");
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        assert_eq!(load_settings_from(&path).unwrap(), AppSettings::default());

        let mut settings = AppSettings::default();
        settings.default_filter = "Branding".to_string();
        settings.content_directory = dir.path().join("records");
        save_settings_to(&settings, &path).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_corrupted_settings_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            load_settings_from(&path),
            Err(StorageError::Serialization(_))
        ));
    }
}
