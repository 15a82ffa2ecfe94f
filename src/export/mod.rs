//! Export module for the contact book
//!
//! Writes the contact collection in the two exchange formats:
//! - JSON: an array of contact objects, pretty-printed
//! - CSV: a `ID,Name,Email,Phone` header followed by one row per contact

pub mod csv;
pub mod json;

pub use self::csv::{write_contacts_csv, CSV_HEADER};
pub use self::json::write_contacts_json;
