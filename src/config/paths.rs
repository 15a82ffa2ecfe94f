//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `CONTACT_BOOK_DIR` environment variable (if set)
//! 3. The platform config directory, e.g. `~/.config/contact-book` on Linux
//!
//! Every import and export is confined to `<base>/data`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ContactError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "CONTACT_BOOK_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory when given, else resolve as in [`ContactPaths::new`]
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ContactError> {
        match explicit {
            Some(base_dir) => Ok(Self::with_base_dir(base_dir)),
            None => Self::new(),
        }
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory all imports and exports are resolved under
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path of `filename` inside the data directory
    ///
    /// The caller is responsible for having checked that `filename` is a
    /// single plain path component.
    pub fn data_file(&self, filename: &str) -> PathBuf {
        self.data_dir().join(filename)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Ensure the data directory exists
    pub fn ensure_data_dir(&self) -> Result<PathBuf, ContactError> {
        let dir = self.data_dir();
        crate::storage::file_io::ensure_directory(&dir)?;
        Ok(dir)
    }
}

fn resolve_default_path() -> Result<PathBuf, ContactError> {
    ProjectDirs::from("", "", "contact-book")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ContactError::Config("Could not determine home directory".into()))
}
