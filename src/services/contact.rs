//! Contact service
//!
//! Business rules on top of the contact repository: trimming and validation
//! of input, email uniqueness, the "nothing matched" outcome for listings
//! and searches, and the filename policy that keeps imports and exports
//! inside the data directory.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BulkFailure, ContactError, ContactResult};
use crate::models::{Contact, ContactId, NewContact};
use crate::storage::Storage;

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a contact after validating it
    pub fn add_contact(&self, name: &str, email: &str, phone: &str) -> ContactResult<Contact> {
        let input = NewContact::new(name, email, phone).normalized();
        input.validate()?;

        if self.storage.contacts.get_by_email(&input.email)?.is_some() {
            return Err(ContactError::email_already_exists(input.email));
        }

        let contact = self.storage.contacts.save(input)?;
        self.record_audit(self.storage.log_create(&contact));

        Ok(contact)
    }

    /// Add several contacts, keeping the ones that pass
    ///
    /// Every rejected entry is reported in a single `BulkAdd` error; the
    /// accepted ones are not rolled back.
    pub fn add_multiple_contacts(&self, contacts: Vec<NewContact>) -> ContactResult<Vec<Contact>> {
        let mut added = Vec::with_capacity(contacts.len());
        let mut failed = Vec::new();

        for new in contacts {
            match self.add_contact(&new.name, &new.email, &new.phone) {
                Ok(contact) => added.push(contact),
                Err(e) => failed.push(BulkFailure {
                    name: new.name,
                    email: new.email,
                    cause: e.to_string(),
                }),
            }
        }

        if !failed.is_empty() {
            warn!(
                added = added.len(),
                failed = failed.len(),
                "bulk add partially failed"
            );
            return Err(ContactError::BulkAdd(failed));
        }

        Ok(added)
    }

    /// Replace name, email and phone of an existing contact
    ///
    /// All three fields are replaced; callers wanting to keep a value pass
    /// the current one (see [`crate::models::ContactPatch`]).
    pub fn edit_contact(
        &self,
        id: ContactId,
        name: &str,
        email: &str,
        phone: &str,
    ) -> ContactResult<Contact> {
        let current = self
            .storage
            .contacts
            .get_by_id(id)?
            .ok_or_else(|| ContactError::contact_not_found(id.to_string()))?;

        let input = NewContact::new(name, email, phone).normalized();
        input.validate()?;

        if input.email != current.email {
            if let Some(owner) = self.storage.contacts.get_by_email(&input.email)? {
                if owner.id != id {
                    return Err(ContactError::email_already_exists(input.email));
                }
            }
        }

        let updated = Contact::from_new(id, input);
        self.storage.contacts.update(updated.clone())?;
        self.record_audit(self.storage.log_update(&current, &updated));

        Ok(updated)
    }

    /// Delete a contact
    pub fn delete_contact(&self, id: ContactId) -> ContactResult<Contact> {
        let removed = self.storage.contacts.delete(id)?;
        self.record_audit(self.storage.log_delete(&removed));
        Ok(removed)
    }

    /// List all contacts; an empty book is `NoContacts`
    pub fn get_all_contacts(&self) -> ContactResult<Vec<Contact>> {
        let contacts = self.storage.contacts.get_all()?;
        if contacts.is_empty() {
            return Err(ContactError::NoContacts);
        }
        Ok(contacts)
    }

    /// Find a contact by ID
    pub fn search_by_id(&self, id: ContactId) -> ContactResult<Contact> {
        self.storage
            .contacts
            .get_by_id(id)?
            .ok_or(ContactError::NoContacts)
    }

    /// Find every contact with exactly this name
    pub fn search_by_name(&self, name: &str) -> ContactResult<Vec<Contact>> {
        let contacts = self.storage.contacts.get_by_name(name)?;
        if contacts.is_empty() {
            return Err(ContactError::NoContacts);
        }
        Ok(contacts)
    }

    /// Find the contact with exactly this email
    pub fn search_by_email(&self, email: &str) -> ContactResult<Contact> {
        self.storage
            .contacts
            .get_by_email(email)?
            .ok_or(ContactError::NoContacts)
    }

    /// Export all contacts as JSON into the data directory
    pub fn export_to_json(&self, filename: &str) -> ContactResult<PathBuf> {
        let path = self.export_path(filename)?;
        self.storage.contacts.export_to_json(&path)?;
        info!(path = %path.display(), "exported contacts to JSON");
        Ok(path)
    }

    /// Export all contacts as CSV into the data directory
    pub fn export_to_csv(&self, filename: &str) -> ContactResult<PathBuf> {
        let path = self.export_path(filename)?;
        self.storage.contacts.export_to_csv(&path)?;
        info!(path = %path.display(), "exported contacts to CSV");
        Ok(path)
    }

    /// Import a `.json` file from the data directory
    pub fn import_from_json(&self, filename: &str) -> ContactResult<Vec<Contact>> {
        let path = self.import_path(filename, ".json")?;
        let imported = self.storage.contacts.import_from_json(&path)?;
        self.after_import(&path, &imported)?;
        Ok(imported)
    }

    /// Import a `.csv` file from the data directory
    pub fn import_from_csv(&self, filename: &str) -> ContactResult<Vec<Contact>> {
        let path = self.import_path(filename, ".csv")?;
        let imported = self.storage.contacts.import_from_csv(&path)?;
        self.after_import(&path, &imported)?;
        Ok(imported)
    }

    /// The change is already committed; a failed audit write is only logged
    fn record_audit(&self, outcome: ContactResult<()>) {
        if let Err(e) = outcome {
            warn!(error = %e, "failed to write audit entry");
        }
    }

    fn export_path(&self, filename: &str) -> ContactResult<PathBuf> {
        let name = checked_filename(filename, None)
            .ok_or_else(|| ContactError::InvalidExportFilename(filename.to_string()))?;

        self.storage.paths().ensure_data_dir()?;
        Ok(self.storage.paths().data_file(name))
    }

    fn import_path(&self, filename: &str, extension: &str) -> ContactResult<PathBuf> {
        let name = checked_filename(filename, Some(extension))
            .ok_or_else(|| ContactError::InvalidImportFilename(filename.to_string()))?;

        Ok(self.storage.paths().data_file(name))
    }

    fn after_import(&self, path: &Path, imported: &[Contact]) -> ContactResult<()> {
        self.record_audit(self.storage.log_import(imported));
        info!(path = %path.display(), count = imported.len(), "imported contacts");

        // Imports are merged as-is; flag addresses that are now shared
        let mut seen = HashSet::new();
        for contact in self.storage.contacts.get_all()? {
            if !seen.insert(contact.email.clone()) {
                warn!(id = %contact.id, email = %contact.email, "imported contact shares an email");
            }
        }

        Ok(())
    }
}

/// Apply the filename policy, returning the trimmed name when it passes
///
/// The name must be non-empty, contain no `..`, be a single plain path
/// component and, when `extension` is given, end with it.
fn checked_filename<'n>(filename: &'n str, extension: Option<&str>) -> Option<&'n str> {
    let name = filename.trim();

    if name.is_empty() || name.contains("..") || name.contains(&['/', '\\'][..]) {
        return None;
    }

    let mut components = Path::new(name).components();
    if !matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) {
        return None;
    }

    match extension {
        Some(ext) if !name.ends_with(ext) => None,
        _ => Some(name),
    }
}
