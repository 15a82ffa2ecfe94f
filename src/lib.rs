//! Contact Book - in-memory contact management from the terminal
//!
//! This library provides the core functionality for the contact book: a
//! session-scoped collection of contacts with validation, search, and
//! JSON/CSV import and export confined to a data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Contact records and identifiers
//! - `storage`: In-memory repository and file helpers
//! - `export` / `import`: JSON and CSV codecs
//! - `services`: Business rules (validation, uniqueness, filename policy)
//! - `audit`: Audit logging of changes
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{ContactPaths, Settings};
//! use contact_book::services::ContactService;
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let service = ContactService::new(&storage);
//! service.add_contact("Alice", "alice@example.com", "555-0100")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ContactError;
