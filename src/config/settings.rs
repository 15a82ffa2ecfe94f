//! User settings for the contact book
//!
//! Stored as pretty-printed JSON in `<base>/config.json`. Missing fields
//! fall back to their defaults, so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether changes are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether the menu clears the screen between screens
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Filename suggested by the export prompt, without extension
    #[serde(default = "default_export_name")]
    pub default_export_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_export_name() -> String {
    "contacts".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: true,
            clear_screen: true,
            default_export_name: default_export_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        read_json(paths.settings_file()).map_err(|e| {
            ContactError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.audit_enabled);
        assert!(settings.clear_screen);
        assert_eq!(settings.default_export_name, "contacts");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            clear_screen: false,
            default_export_name: "backup".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.audit_enabled);
        assert!(loaded.clear_screen);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(ContactError::Config(_))
        ));
    }
}
