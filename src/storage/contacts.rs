//! Contact repository
//!
//! Owns the in-memory contact collection and the identifier counter, and
//! moves the whole collection to and from JSON or CSV files.

use std::io::Write;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{ContactError, ContactResult};
use crate::export::{write_contacts_csv, write_contacts_json};
use crate::import::{read_contacts_csv, read_contacts_json};
use crate::models::{Contact, ContactId, NewContact};

use super::file_io::{create_writer, open_reader};

/// Collection and counter live behind one lock so they always move together
#[derive(Debug)]
struct ContactData {
    contacts: Vec<Contact>,
    next_id: Option<ContactId>,
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: Some(ContactId::FIRST),
        }
    }
}

impl ContactData {
    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }
}

/// Repository for contacts
///
/// Identifiers increase monotonically and are never reissued, even after
/// the contact holding one is deleted.
#[derive(Debug, Default)]
pub struct ContactRepository {
    data: RwLock<ContactData>,
}

impl ContactRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ContactResult<RwLockReadGuard<'_, ContactData>> {
        self.data.read().map_err(|e| {
            ContactError::Storage(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> ContactResult<RwLockWriteGuard<'_, ContactData>> {
        self.data.write().map_err(|e| {
            ContactError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }

    /// Get all contacts in insertion order
    pub fn get_all(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.read()?.contacts.clone())
    }

    /// Get a contact by ID
    pub fn get_by_id(&self, id: ContactId) -> ContactResult<Option<Contact>> {
        let data = self.read()?;
        Ok(data.contacts.iter().find(|c| c.id == id).cloned())
    }

    /// Get every contact whose name equals `name` exactly
    pub fn get_by_name(&self, name: &str) -> ContactResult<Vec<Contact>> {
        let data = self.read()?;
        Ok(data
            .contacts
            .iter()
            .filter(|c| c.name == name)
            .cloned()
            .collect())
    }

    /// Get the contact with this exact (case-sensitive) email
    pub fn get_by_email(&self, email: &str) -> ContactResult<Option<Contact>> {
        let data = self.read()?;
        Ok(data.contacts.iter().find(|c| c.email == email).cloned())
    }

    /// Count contacts
    pub fn count(&self) -> ContactResult<usize> {
        Ok(self.read()?.contacts.len())
    }

    /// Store a new contact under the next identifier
    pub fn save(&self, new: NewContact) -> ContactResult<Contact> {
        let mut data = self.write()?;
        Self::save_locked(&mut data, new)
    }

    fn save_locked(data: &mut ContactData, new: NewContact) -> ContactResult<Contact> {
        let id = data.next_id.ok_or_else(|| {
            ContactError::Storage("Contact identifier space exhausted".into())
        })?;

        let contact = Contact::from_new(id, new);
        data.contacts.push(contact.clone());
        data.next_id = id.next();

        debug!(id = %contact.id, name = %contact.name, "saved contact");
        Ok(contact)
    }

    /// Store each contact in order
    ///
    /// Stops at the first failure and reports which entry failed. Contacts
    /// saved before it stay in the collection.
    pub fn save_all(&self, contacts: Vec<NewContact>) -> ContactResult<Vec<Contact>> {
        let mut data = self.write()?;
        let mut saved = Vec::with_capacity(contacts.len());

        for (index, new) in contacts.into_iter().enumerate() {
            let name = new.name.clone();
            let contact =
                Self::save_locked(&mut data, new).map_err(|e| ContactError::SaveAll {
                    index,
                    name,
                    source: Box::new(e),
                })?;
            saved.push(contact);
        }

        Ok(saved)
    }

    /// Replace the stored contact that has `contact.id`
    pub fn update(&self, contact: Contact) -> ContactResult<()> {
        let mut data = self.write()?;
        let idx = data
            .position(contact.id)
            .ok_or_else(|| ContactError::contact_not_found(contact.id.to_string()))?;

        debug!(id = %contact.id, "updated contact");
        data.contacts[idx] = contact;
        Ok(())
    }

    /// Remove a contact, keeping the order of the others
    pub fn delete(&self, id: ContactId) -> ContactResult<Contact> {
        let mut data = self.write()?;
        let idx = data
            .position(id)
            .ok_or_else(|| ContactError::contact_not_found(id.to_string()))?;

        debug!(%id, "deleted contact");
        Ok(data.contacts.remove(idx))
    }

    /// Write the whole collection to `path` as JSON, overwriting it
    pub fn export_to_json(&self, path: &Path) -> ContactResult<()> {
        let contacts = self.get_all()?;
        let mut writer = create_writer(path)?;

        write_contacts_json(&contacts, &mut writer)
            .map_err(|e| write_error(path, e.to_string()))?;
        writer.flush().map_err(|e| write_error(path, e.to_string()))?;

        debug!(path = %path.display(), count = contacts.len(), "exported contacts to JSON");
        Ok(())
    }

    /// Write the whole collection to `path` as CSV, overwriting it
    pub fn export_to_csv(&self, path: &Path) -> ContactResult<()> {
        let contacts = self.get_all()?;
        let writer = create_writer(path)?;

        write_contacts_csv(&contacts, writer).map_err(|e| write_error(path, e.to_string()))?;

        debug!(path = %path.display(), count = contacts.len(), "exported contacts to CSV");
        Ok(())
    }

    /// Add every contact in a JSON file under fresh identifiers
    pub fn import_from_json(&self, path: &Path) -> ContactResult<Vec<Contact>> {
        let reader = open_reader(path)?;
        let parsed = read_contacts_json(reader).map_err(|e| decode_error(path, e.to_string()))?;

        let saved = self.save_all(parsed)?;
        debug!(path = %path.display(), count = saved.len(), "imported contacts from JSON");
        Ok(saved)
    }

    /// Add every data row of a CSV file under fresh identifiers
    pub fn import_from_csv(&self, path: &Path) -> ContactResult<Vec<Contact>> {
        let reader = open_reader(path)?;
        let parsed = read_contacts_csv(reader).map_err(|e| decode_error(path, e))?;

        let saved = self.save_all(parsed)?;
        debug!(path = %path.display(), count = saved.len(), "imported contacts from CSV");
        Ok(saved)
    }
}

fn write_error(path: &Path, message: String) -> ContactError {
    ContactError::Write {
        path: path.to_path_buf(),
        message,
    }
}

fn decode_error(path: &Path, message: String) -> ContactError {
    ContactError::Decode {
        path: path.to_path_buf(),
        message,
    }
}
