//! Contact model
//!
//! A contact is a name, an email address and an optional phone number,
//! identified by a repository-assigned [`ContactId`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ContactId;
use crate::error::{ContactError, ContactResult};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Check an address against the `local@domain.tld` pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A stored contact
///
/// Field names serialize as `ID`, `Name`, `Email`, `Phone`, which is the
/// shape of both the JSON and the CSV exchange formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned by the repository
    #[serde(rename = "ID")]
    pub id: ContactId,

    /// Display name
    #[serde(rename = "Name")]
    pub name: String,

    /// Email address, unique across live contacts
    #[serde(rename = "Email")]
    pub email: String,

    /// Phone number; empty when the contact has none
    #[serde(rename = "Phone", default)]
    pub phone: String,
}

impl Contact {
    /// Build a stored contact from its identifier and fields
    pub fn from_new(id: ContactId, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
        }
    }

    /// Whether a phone number was recorded
    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.name, self.email)
    }
}

/// Contact fields without an identifier
///
/// This is the input of add operations and the decoded shape of imported
/// records; an `ID` present in an imported file is ignored. `Name` and
/// `Email` must be present in decoded records, `Phone` may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Phone", default)]
    pub phone: String,
}

impl NewContact {
    /// Create a new contact input
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Trim surrounding whitespace from name and email; phone is kept as given
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone,
        }
    }

    /// Validate required fields and the email format
    pub fn validate(&self) -> ContactResult<()> {
        if self.name.trim().is_empty() {
            return Err(ContactError::NameRequired);
        }

        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        }
    }
}

/// Per-field edit request
///
/// `None` keeps the current value. Resolving the patch against the stored
/// contact produces the full replacement that the service expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactPatch {
    /// Build a patch from prompt answers, where a blank answer means "keep"
    pub fn from_answers(name: &str, email: &str, phone: &str) -> Self {
        fn present(answer: &str) -> Option<String> {
            let answer = answer.trim();
            (!answer.is_empty()).then(|| answer.to_string())
        }

        Self {
            name: present(name),
            email: present(email),
            phone: present(phone),
        }
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Fill absent fields from `current`
    pub fn resolve(self, current: &Contact) -> NewContact {
        NewContact {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
        }
    }
}
