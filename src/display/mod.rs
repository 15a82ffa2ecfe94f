//! Display formatting for terminal output
//!
//! Renders contacts as tables for the interactive menu.

pub mod contact;

pub use contact::{format_contact_details, format_contact_list};
