use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contacts").unwrap();
    cmd.env_remove("CONTACT_BOOK_DIR")
        .arg("--data-dir")
        .arg(base.path())
        .arg("--no-clear");
    cmd
}

#[test]
fn menu_add_and_list() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .write_stdin("1\nAlice\nalice@example.com\n555-0100\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added new contact (ID 1)"))
        .stdout(predicate::str::contains("alice@example.com"))
        .stdout(predicate::str::contains("Exiting application..."));

    let audit = fs::read_to_string(base.path().join("audit.log")).unwrap();
    assert_eq!(audit.lines().count(), 1);
}

#[test]
fn contacts_do_not_outlive_the_session() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .write_stdin("1\nAlice\nalice@example.com\n\n0\n")
        .assert()
        .success();

    contacts(&base)
        .write_stdin("5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts available"));
}

#[test]
fn export_then_import_in_a_new_session() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .write_stdin("1\nAlice\nalice@example.com\n\n7\n1\nbook\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contacts exported successfully to"));
    assert!(base.path().join("data").join("book.json").exists());

    contacts(&base)
        .write_stdin("8\n1\nbook.json\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 1 contacts"))
        .stdout(predicate::str::contains("alice@example.com"));
}

#[test]
fn export_rejects_path_traversal() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .write_stdin("7\n2\n../../escape\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid filename"));

    assert!(!base.path().join("data").exists());
    assert!(!base.path().parent().unwrap().join("escape.csv").exists());
}

#[test]
fn closed_input_exits_cleanly() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .write_stdin("1\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting application..."));
}

#[test]
fn config_prints_paths() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Book Configuration"))
        .stdout(predicate::str::contains(
            base.path().join("data").display().to_string(),
        ))
        .stdout(predicate::str::contains("Default export name: contacts"));
}

#[test]
fn invalid_settings_file_fails() {
    let base = TempDir::new().unwrap();
    fs::write(base.path().join("config.json"), "{ not json").unwrap();

    contacts(&base)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn history_lists_recent_changes() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));

    contacts(&base)
        .write_stdin("1\nAlice\nalice@example.com\n\n4\n1\ny\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    contacts(&base)
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE Contact 1 (Alice)"));
}

#[test]
fn config_init_writes_settings_file() {
    let base = TempDir::new().unwrap();

    contacts(&base)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to"));

    let written = fs::read_to_string(base.path().join("config.json")).unwrap();
    assert!(written.contains("\"default_export_name\": \"contacts\""));
    assert!(written.contains("\"clear_screen\": true"));
}
