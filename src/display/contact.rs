//! Contact display formatting
//!
//! Formats contacts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Contact;

const NO_PHONE: &str = "-";

#[derive(Tabled)]
struct ContactRow<'a> {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
}

impl<'a> From<&'a Contact> for ContactRow<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            id: contact.id.value(),
            name: &contact.name,
            email: &contact.email,
            phone: if contact.has_phone() {
                &contact.phone
            } else {
                NO_PHONE
            },
        }
    }
}

/// Format a list of contacts as a table
pub fn format_contact_list(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<ContactRow<'_>> = contacts.iter().map(ContactRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());

    format!("{}\nTotal: {} contact(s)", table, contacts.len())
}

/// Format a single contact as labelled lines
pub fn format_contact_details(contact: &Contact) -> String {
    let phone = if contact.has_phone() {
        contact.phone.as_str()
    } else {
        NO_PHONE
    };

    format!(
        "ID:    {}\nName:  {}\nEmail: {}\nPhone: {}",
        contact.id, contact.name, contact.email, phone
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactId, NewContact};

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::from_new(
                ContactId::new(1),
                NewContact::new("Alice", "alice@example.com", "555-0100"),
            ),
            Contact::from_new(
                ContactId::new(2),
                NewContact::new("Bob", "bob@example.com", ""),
            ),
        ]
    }

    #[test]
    fn test_format_contact_list() {
        let output = format_contact_list(&contacts());

        assert!(output.contains("ID"));
        assert!(output.contains("Email"));
        assert!(output.contains("alice@example.com"));
        assert!(output.contains("555-0100"));
        assert!(output.contains("Total: 2 contact(s)"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_contact_list(&[]), "No contacts found.");
    }

    #[test]
    fn test_format_details_without_phone() {
        let output = format_contact_details(&contacts()[1]);
        assert!(output.contains("Name:  Bob"));
        assert!(output.ends_with("Phone: -"));
    }
}
