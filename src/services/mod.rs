//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, uniqueness rules and the filename policy for
//! imports and exports.

pub mod contact;

pub use contact::ContactService;
