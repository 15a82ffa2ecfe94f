//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Contact, ContactId};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created through an add
    Create,
    /// Contact was edited
    Update,
    /// Contact was deleted
    Delete,
    /// Contact was created by a file import
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Identifier of the affected contact
    pub contact_id: ContactId,

    /// Name of the contact at the time of the operation
    pub contact_name: String,

    /// Contact before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Contact after the operation (creates, imports and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, contact: &Contact) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            contact_id: contact.id,
            contact_name: contact.name.clone(),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a contact added through the service
    pub fn create(contact: &Contact) -> Self {
        Self {
            after: serde_json::to_value(contact).ok(),
            ..Self::new(Operation::Create, contact)
        }
    }

    /// Entry for a contact added by an import
    pub fn import(contact: &Contact) -> Self {
        Self {
            after: serde_json::to_value(contact).ok(),
            ..Self::new(Operation::Import, contact)
        }
    }

    /// Entry for an edit
    pub fn update(before: &Contact, after: &Contact, diff_summary: Option<String>) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::new(Operation::Update, after)
        }
    }

    /// Entry for a deletion
    pub fn delete(contact: &Contact) -> Self {
        Self {
            before: serde_json::to_value(contact).ok(),
            ..Self::new(Operation::Delete, contact)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Contact {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.contact_id,
            self.contact_name
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
