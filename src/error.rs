//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One entry rejected by a bulk add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkFailure {
    pub name: String,
    pub email: String,
    pub cause: String,
}

impl fmt::Display for BulkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.email, self.cause)
    }
}

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O errors not tied to an import/export path
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors not tied to a file
    #[error("JSON error: {0}")]
    Json(String),

    /// A required name was empty after trimming
    #[error("name is required")]
    NameRequired,

    /// Email does not match the address pattern
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A listing or search matched nothing
    #[error("no contacts found")]
    NoContacts,

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export filename rejected by the filename policy
    #[error("invalid export filename: {0:?}")]
    InvalidExportFilename(String),

    /// Import filename rejected by the filename policy
    #[error("invalid import filename: {0:?}")]
    InvalidImportFilename(String),

    /// A file could not be opened or read
    #[error("failed to read {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// A file was read but its contents could not be decoded
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// A file could not be created or written
    #[error("failed to write {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    /// One or more entries of a bulk add were rejected
    #[error("some contacts failed to add:\n{}", format_failures(.0))]
    BulkAdd(Vec<BulkFailure>),

    /// A batch save stopped at the given entry
    #[error("failed to save contact #{index} ({name}): {source}")]
    SaveAll {
        index: usize,
        name: String,
        #[source]
        source: Box<ContactError>,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn format_failures(failures: &[BulkFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for an email already in use
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Email",
            identifier: email.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NoContacts)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NameRequired | Self::InvalidEmail(_) | Self::Duplicate { .. }
        )
    }

    /// Check if this is a filename policy rejection
    pub fn is_filename_policy(&self) -> bool {
        matches!(
            self,
            Self::InvalidExportFilename(_) | Self::InvalidImportFilename(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
