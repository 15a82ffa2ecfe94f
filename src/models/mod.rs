//! Core data models for the contact book
//!
//! This module contains the data structures that represent the contact
//! domain: the stored contact record, its identifier, and the input shapes
//! used to create or edit one.

pub mod contact;
pub mod ids;

pub use contact::{Contact, ContactPatch, NewContact};
pub use ids::ContactId;
