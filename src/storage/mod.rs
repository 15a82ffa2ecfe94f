//! Storage layer for the contact book
//!
//! Holds the in-memory contact repository together with the resolved paths
//! and the audit logger that records every change made through the service
//! layer.

pub mod contacts;
pub mod file_io;

pub use contacts::ContactRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::config::settings::Settings;
use crate::error::ContactError;
use crate::models::Contact;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with an empty contact collection
    pub fn new(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactError> {
        let audit = if settings.audit_enabled {
            paths.ensure_directories()?;
            Some(AuditLogger::new(paths.audit_log()))
        } else {
            None
        };

        Ok(Self {
            paths,
            contacts: ContactRepository::new(),
            audit,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a newly created contact
    pub fn log_create(&self, contact: &Contact) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(contact)),
            None => Ok(()),
        }
    }

    /// Record an edit with its before/after diff
    pub fn log_update(&self, before: &Contact, after: &Contact) -> Result<(), ContactError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let diff = generate_diff(&serde_json::to_value(before)?, &serde_json::to_value(after)?);
        logger.log(&AuditEntry::update(before, after, diff))
    }

    /// Record a deleted contact
    pub fn log_delete(&self, contact: &Contact) -> Result<(), ContactError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(contact)),
            None => Ok(()),
        }
    }

    /// Record contacts added by an import in one batch
    pub fn log_import(&self, contacts: &[Contact]) -> Result<(), ContactError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let entries: Vec<_> = contacts.iter().map(AuditEntry::import).collect();
        logger.log_batch(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewContact;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(storage.audit().is_some());
        assert_eq!(storage.contacts.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_disabled_logs_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths.clone(), &settings).unwrap();

        let contact = storage
            .contacts
            .save(NewContact::new("Alice", "alice@example.com", ""))
            .unwrap();
        storage.log_create(&contact).unwrap();

        assert!(storage.audit().is_none());
        assert!(!paths.audit_log().exists());
    }
}
