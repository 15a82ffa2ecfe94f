//! JSON Import functionality

use std::io::Read;

use crate::models::NewContact;

/// Decode a JSON array of contacts, ignoring any `ID` fields
pub fn read_contacts_json<R: Read>(reader: R) -> Result<Vec<NewContact>, serde_json::Error> {
    serde_json::from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_contacts_json() {
        let data = r#"[
            {"ID": 10, "Name": "Alice", "Email": "alice@example.com", "Phone": "555"},
            {"ID": 10, "Name": "Bob", "Email": "bob@example.com", "Phone": ""}
        ]"#;

        let contacts = read_contacts_json(data.as_bytes()).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0], NewContact::new("Alice", "alice@example.com", "555"));
        assert_eq!(contacts[1].name, "Bob");
    }

    #[test]
    fn test_missing_phone_defaults_to_empty() {
        let data = r#"[{"Name": "Alice", "Email": "alice@example.com"}]"#;

        let contacts = read_contacts_json(data.as_bytes()).unwrap();
        assert_eq!(contacts[0].phone, "");
    }

    #[test]
    fn test_missing_name_or_email_fails() {
        let no_name = r#"[{"Email": "alice@example.com", "Phone": "555"}]"#;
        let no_email = r#"[{"Name": "Alice"}]"#;

        let err = read_contacts_json(no_name.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing field `Name`"));
        assert!(read_contacts_json(no_email.as_bytes()).is_err());
        assert!(read_contacts_json("[{}]".as_bytes()).is_err());
    }

    #[test]
    fn test_read_empty_input_fails() {
        assert!(read_contacts_json("".as_bytes()).is_err());
    }

    #[test]
    fn test_read_non_array_fails() {
        assert!(read_contacts_json(r#"{"Name": "Alice"}"#.as_bytes()).is_err());
    }
}
