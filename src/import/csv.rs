//! CSV Import functionality
//!
//! The first row is always treated as a header and dropped without being
//! checked. Remaining rows are read positionally as ID, Name, Email, Phone;
//! the ID column is ignored and the Phone column may be missing.

use std::io::Read;

use csv::StringRecord;

use crate::models::NewContact;

const NAME_COLUMN: usize = 1;
const EMAIL_COLUMN: usize = 2;
const PHONE_COLUMN: usize = 3;

/// Decode contacts from CSV, skipping row 0
pub fn read_contacts_csv<R: Read>(reader: R) -> Result<Vec<NewContact>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut contacts = Vec::new();
    // Row 0 is dropped before it is decoded, so a malformed header never fails
    for (idx, result) in csv_reader.records().enumerate() {
        if idx == 0 {
            continue;
        }
        let record = result.map_err(|e| format!("Error reading CSV record: {}", e))?;

        contacts.push(parse_record(&record, idx)?);
    }

    Ok(contacts)
}

/// Parse a single data row
fn parse_record(record: &StringRecord, row_number: usize) -> Result<NewContact, String> {
    let field = |column: usize, label: &str| {
        record
            .get(column)
            .map(str::to_string)
            .ok_or_else(|| format!("Row {}: missing {} column", row_number, label))
    };

    Ok(NewContact {
        name: field(NAME_COLUMN, "Name")?,
        email: field(EMAIL_COLUMN, "Email")?,
        phone: record.get(PHONE_COLUMN).unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_two_rows() {
        let csv_data = "ID,Name,Email,Phone\n\
                        7,Alice,alice@example.com,555\n\
                        8,\"Smith, Bob\",bob@example.com,\n";

        let contacts = read_contacts_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0], NewContact::new("Alice", "alice@example.com", "555"));
        assert_eq!(contacts[1], NewContact::new("Smith, Bob", "bob@example.com", ""));
    }

    #[test]
    fn test_first_row_dropped_even_without_header() {
        let csv_data = "1,Alice,alice@example.com,555\n2,Bob,bob@example.com,556\n";

        let contacts = read_contacts_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].name, "Bob");
    }

    #[test]
    fn test_undecodable_header_is_still_dropped() {
        let mut csv_data = b"ID,Nom,Pr\xe9nom,T\xe9l\n".to_vec();
        csv_data.extend_from_slice(b"1,Alice,alice@example.com,555\n2,Bob,bob@example.com,\n");

        let contacts = read_contacts_csv(csv_data.as_slice()).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1], NewContact::new("Bob", "bob@example.com", ""));
    }

    #[test]
    fn test_missing_phone_column_is_allowed() {
        let csv_data = "ID,Name,Email\n1,Alice,alice@example.com\n";

        let contacts = read_contacts_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(contacts[0].phone, "");
    }

    #[test]
    fn test_short_row_is_an_error() {
        let csv_data = "ID,Name,Email,Phone\n1,Alice\n";

        let err = read_contacts_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.contains("Row 1"));
        assert!(err.contains("Email"));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(read_contacts_csv("".as_bytes()).unwrap().is_empty());
    }
}
