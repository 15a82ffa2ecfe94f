//! JSON Export functionality
//!
//! Serializes contacts as a JSON array with two-space indentation.

use std::io::Write;

use crate::models::Contact;

/// Write `contacts` to `writer` as a pretty-printed JSON array
pub fn write_contacts_json<W: Write>(
    contacts: &[Contact],
    writer: &mut W,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *writer, contacts)?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactId, NewContact};

    #[test]
    fn test_export_json_shape() {
        let contacts = vec![Contact::from_new(
            ContactId::new(1),
            NewContact::new("Alice", "alice@example.com", "555"),
        )];

        let mut output = Vec::new();
        write_contacts_json(&contacts, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("[\n  {\n    \"ID\": 1,"));
        assert!(text.contains("\"Name\": \"Alice\""));
        assert!(text.contains("\"Phone\": \"555\""));
    }

    #[test]
    fn test_export_empty_collection() {
        let mut output = Vec::new();
        write_contacts_json(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[]\n");
    }
}
