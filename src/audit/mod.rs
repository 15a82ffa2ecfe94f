//! Audit logging for the contact book
//!
//! Records every create, update, delete and import with before/after values
//! in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, the contact's
//!   identifier and name, and optional before/after snapshots.
//! - `AuditLogger`: appends entries to the log file as line-delimited JSON.
//! - `generate_diff`: a one-line summary of the fields an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(&contact))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
