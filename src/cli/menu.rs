//! Interactive menu
//!
//! A numbered text menu over the contact service. Input and output are
//! generic so the whole loop can be driven from a script in tests. Every
//! service failure is rendered and the loop continues; end of input ends
//! the session.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::display::{format_contact_details, format_contact_list};
use crate::error::ContactError;
use crate::models::{ContactId, ContactPatch, NewContact};
use crate::services::ContactService;

/// Menu entries, numbered from 1
pub const MENU_ITEMS: [&str; 8] = [
    "Add Contact",
    "Add Multiple Contact",
    "Edit Contact",
    "Delete Contact",
    "Show List Contact",
    "Search Contact",
    "Export Contacts",
    "Import Contacts",
];

/// Presentation options for the menu
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Clear the terminal after each selection
    pub clear_screen: bool,
    /// Color responses with ANSI escapes
    pub styled: bool,
    /// Filename used when the export prompt is left blank
    pub default_export_name: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            clear_screen: false,
            styled: false,
            default_export_name: "contacts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Response {
    Success,
    Error,
    Info,
}

/// The interactive menu loop
pub struct Menu<'a, R, W> {
    service: ContactService<'a>,
    input: R,
    output: W,
    options: MenuOptions,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub fn new(service: ContactService<'a>, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            service,
            input,
            output,
            options,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => break,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting application...")?;
        self.output.flush()
    }

    /// Show the menu and handle one selection; `false` means exit
    fn step(&mut self) -> io::Result<bool> {
        self.print_menu()?;
        let choice = self.prompt("\nSelect option")?;
        self.clear_screen()?;

        match choice.as_str() {
            "1" => self.handle_add_contact()?,
            "2" => self.handle_add_multiple_contacts()?,
            "3" => self.handle_edit_contact()?,
            "4" => self.handle_delete_contact()?,
            "5" => self.handle_list_contacts()?,
            "6" => self.handle_search_contact()?,
            "7" => self.handle_export_contacts()?,
            "8" => self.handle_import_contacts()?,
            "0" => return Ok(false),
            _ => self.respond(
                Response::Error,
                "Invalid input, please enter a number between 0-8",
            )?,
        }

        Ok(true)
    }

    fn handle_add_contact(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[0])?;

        let name = self.prompt_required("Name")?;
        let email = self.prompt_required("Email")?;
        let phone = self.prompt("Phone")?;

        match self.service.add_contact(&name, &email, &phone) {
            Ok(contact) => self.respond(
                Response::Success,
                &format!("Successfully added new contact (ID {})", contact.id),
            ),
            Err(e) => self.report(&e),
        }
    }

    fn handle_add_multiple_contacts(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[1])?;

        let count = loop {
            let answer = self.prompt("How many contacts to add")?;
            match answer.parse::<usize>() {
                Ok(n) if n > 0 => break n,
                _ => self.respond(Response::Error, "invalid input, please try it again")?,
            }
        };

        let mut contacts = Vec::with_capacity(count);
        for i in 1..=count {
            writeln!(self.output, "\n---- New Contact {} ----", i)?;
            let name = self.prompt_required("Name")?;
            let email = self.prompt_required("Email")?;
            let phone = self.prompt("Phone")?;
            contacts.push(NewContact::new(name, email, phone));
        }

        match self.service.add_multiple_contacts(contacts) {
            Ok(added) => self.respond(
                Response::Success,
                &format!("Successfully added all {} contacts", added.len()),
            ),
            Err(e) => self.report(&e),
        }
    }

    fn handle_edit_contact(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[2])?;

        let Some(id) = self.prompt_id("Enter contact ID to edit")? else {
            return Ok(());
        };

        let contact = match self.service.search_by_id(id) {
            Ok(contact) => contact,
            Err(ContactError::NoContacts) => {
                return self.respond(Response::Error, "Contact not found");
            }
            Err(e) => return self.report(&e),
        };

        writeln!(self.output, "\n-- Editing Contact --")?;
        writeln!(self.output, "(leave empty to keep current)")?;

        writeln!(self.output, "\nCurrent Name: {}", contact.name)?;
        let name = self.prompt("New Name")?;
        writeln!(self.output, "Current Email: {}", contact.email)?;
        let email = self.prompt("New Email")?;
        writeln!(self.output, "Current Phone: {}", contact.phone)?;
        let phone = self.prompt("New Phone")?;

        let patch = ContactPatch::from_answers(&name, &email, &phone);
        if patch.is_empty() {
            return self.respond(Response::Info, "No changes made");
        }

        let resolved = patch.resolve(&contact);
        match self
            .service
            .edit_contact(id, &resolved.name, &resolved.email, &resolved.phone)
        {
            Ok(_) => self.respond(Response::Success, "Contact updated successfully"),
            Err(e) => self.report(&e),
        }
    }

    fn handle_delete_contact(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[3])?;

        let contacts = match self.service.get_all_contacts() {
            Ok(contacts) => contacts,
            Err(ContactError::NoContacts) => {
                return self.respond(Response::Info, "No contacts available to delete");
            }
            Err(e) => return self.report(&e),
        };
        writeln!(self.output, "{}", format_contact_list(&contacts))?;

        let Some(id) = self.prompt_id("\nEnter contact ID to delete")? else {
            return Ok(());
        };

        let confirm = self.prompt_required("Are you sure you want to delete this contact? (y/n)")?;
        if !confirm.eq_ignore_ascii_case("y") {
            return self.respond(Response::Info, "Deletion cancelled");
        }

        match self.service.delete_contact(id) {
            Ok(_) => self.respond(Response::Success, "Contact deleted successfully"),
            Err(e) => self.report(&e),
        }
    }

    fn handle_list_contacts(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[4])?;

        match self.service.get_all_contacts() {
            Ok(contacts) => writeln!(self.output, "{}", format_contact_list(&contacts)),
            Err(ContactError::NoContacts) => self.respond(Response::Info, "No contacts available"),
            Err(e) => self.report(&e),
        }
    }

    fn handle_search_contact(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[5])?;

        writeln!(self.output, "Search by:")?;
        writeln!(self.output, "1. ID")?;
        writeln!(self.output, "2. Name")?;
        writeln!(self.output, "3. Email")?;

        let choice = self.prompt_required("Select option")?;
        let result = match choice.as_str() {
            "1" => {
                let Some(id) = self.prompt_id("Enter ID")? else {
                    return Ok(());
                };
                self.service
                    .search_by_id(id)
                    .map(|c| format_contact_details(&c))
                    .map_err(|e| (e, format!("contact with id {} is not found", id)))
            }
            "2" => {
                let name = self.prompt_required("Enter Name")?;
                self.service
                    .search_by_name(&name)
                    .map(|c| format_contact_list(&c))
                    .map_err(|e| (e, format!("contacts with name {} are not found", name)))
            }
            "3" => {
                let email = self.prompt_required("Enter Email")?;
                self.service
                    .search_by_email(&email)
                    .map(|c| format_contact_details(&c))
                    .map_err(|e| (e, format!("contact with email {} is not found", email)))
            }
            _ => {
                return self.respond(
                    Response::Error,
                    "Invalid option, please enter a number between 1-3",
                );
            }
        };

        match result {
            Ok(rendered) => writeln!(self.output, "{}", rendered),
            Err((ContactError::NoContacts, message)) => self.respond(Response::Info, &message),
            Err((e, _)) => self.report(&e),
        }
    }

    fn handle_export_contacts(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[6])?;

        let Some(format) = self.prompt_format("Export format")? else {
            return Ok(());
        };

        let label = format!(
            "Enter filename without extension [{}]",
            self.options.default_export_name
        );
        let mut filename = self.prompt(&label)?;
        if filename.is_empty() {
            filename = self.options.default_export_name.clone();
        }

        let result = match format {
            Format::Json => self.service.export_to_json(&format!("{}.json", filename)),
            Format::Csv => self.service.export_to_csv(&format!("{}.csv", filename)),
        };

        match result {
            Ok(path) => self.respond(
                Response::Success,
                &format!("Contacts exported successfully to {}", path.display()),
            ),
            Err(e) => self.report(&e),
        }
    }

    fn handle_import_contacts(&mut self) -> io::Result<()> {
        self.title(MENU_ITEMS[7])?;

        let Some(format) = self.prompt_format("Import format")? else {
            return Ok(());
        };
        let filename = self.prompt_required("Enter filename (with extension)")?;

        let result = match format {
            Format::Json => self.service.import_from_json(&filename),
            Format::Csv => self.service.import_from_csv(&filename),
        };

        match result {
            Ok(contacts) => self.respond(
                Response::Success,
                &format!("Successfully imported {} contacts", contacts.len()),
            ),
            Err(e) => self.report(&e),
        }
    }

    /// Render a service failure
    fn report(&mut self, err: &ContactError) -> io::Result<()> {
        let message = match err {
            ContactError::InvalidExportFilename(_) => {
                "Invalid filename, use a plain name without path separators or '..'".to_string()
            }
            ContactError::InvalidImportFilename(_) => {
                "Invalid filename, must be a plain name ending with .json or .csv".to_string()
            }
            e if e.is_validation() || e.is_not_found() => e.to_string(),
            ContactError::BulkAdd(_) => err.to_string(),
            e => format!("Something went wrong: {}", e),
        };

        self.respond(Response::Error, &message)
    }

    fn prompt_id(&mut self, label: &str) -> io::Result<Option<ContactId>> {
        let answer = self.prompt_required(label)?;
        match answer.parse::<ContactId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.respond(Response::Error, "Invalid ID format, please enter a number")?;
                Ok(None)
            }
        }
    }

    fn prompt_format(&mut self, heading: &str) -> io::Result<Option<Format>> {
        writeln!(self.output, "{}:", heading)?;
        writeln!(self.output, "1. JSON")?;
        writeln!(self.output, "2. CSV")?;

        match self.prompt_required("\nSelect option")?.as_str() {
            "1" => Ok(Some(Format::Json)),
            "2" => Ok(Some(Format::Csv)),
            _ => {
                self.respond(Response::Error, "Invalid option")?;
                Ok(None)
            }
        }
    }

    /// Ask until a non-empty answer is given
    fn prompt_required(&mut self, label: &str) -> io::Result<String> {
        loop {
            let answer = self.prompt(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "{} is required.", label.trim())?;
        }
    }

    /// Ask once; the answer is trimmed. End of input is `UnexpectedEof`.
    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        Ok(line.trim().to_string())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.title("Contact Service")?;
        for (idx, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, item)?;
        }
        writeln!(self.output, "0. Exit")
    }

    fn title(&mut self, title: &str) -> io::Result<()> {
        let line = format!("=== {} ===", title.to_uppercase());
        if self.options.styled {
            writeln!(self.output, "\n{}", line.bold())
        } else {
            writeln!(self.output, "\n{}", line)
        }
    }

    fn respond(&mut self, kind: Response, message: &str) -> io::Result<()> {
        if !self.options.styled {
            return writeln!(self.output, "\n{}", message);
        }

        match kind {
            Response::Success => writeln!(self.output, "\n{}", message.green()),
            Response::Error => writeln!(self.output, "\n{}", message.red()),
            Response::Info => writeln!(self.output, "\n{}", message.yellow()),
        }
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if self.options.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Csv,
}
