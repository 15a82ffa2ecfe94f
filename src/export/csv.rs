//! CSV Export functionality
//!
//! Exports contacts with a fixed header row. Quoting of embedded commas,
//! quotes and newlines is left to the csv writer.

use std::io::Write;

use crate::models::Contact;

/// Header row of every exported CSV file
pub const CSV_HEADER: [&str; 4] = ["ID", "Name", "Email", "Phone"];

/// Write `contacts` to `writer` as CSV, header first
pub fn write_contacts_csv<W: Write>(contacts: &[Contact], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for contact in contacts {
        csv_writer.write_record([
            contact.id.to_string().as_str(),
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
