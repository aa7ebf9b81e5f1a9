//! Command handlers
//!
//! Handlers receive arguments that already passed the validation pipeline,
//! so argument counts and phone syntax can be relied upon here.

use super::command::Command;
use super::CommandError;
use crate::domain::{AddressBook, Name, PhoneNumber, Record};

pub const GREETING: &str = "Hello! How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const CONTACT_CREATED: &str = "Contact was created successfully!";
pub const NOTHING_TO_SHOW: &str = "There are no contacts to show yet...";

/// Runs a validated command against the book
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    args: &[&str],
) -> Result<String, CommandError> {
    match (command, args) {
        (Command::Hello, []) => Ok(GREETING.to_string()),
        (Command::Exit, []) => Ok(FAREWELL.to_string()),
        (Command::Add, [name, phone]) => add_contact(book, name, phone),
        (Command::Change, [name, old, new]) => edit_phone(book, name, old, new),
        (Command::Remove, [name, phone]) => remove_phone(book, name, phone),
        (Command::Phone, [name]) => show_phone(book, name),
        (Command::ShowAll, []) => Ok(show_all(book)),
        _ => Err(CommandError::Validation(
            super::ValidationError::Arity(command),
        )),
    }
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> Result<String, CommandError> {
    let phone = PhoneNumber::new(phone)?;

    if let Some(record) = book.get_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!(
            "Phone number was added successfully to the existed contact {name}!"
        ));
    }

    let mut record = Record::new(Name::new(name));
    record.add_phone(phone)?;
    book.add_record(name, record);
    Ok(CONTACT_CREATED.to_string())
}

fn edit_phone(
    book: &mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> Result<String, CommandError> {
    let old = PhoneNumber::new(old)?;
    let new = PhoneNumber::new(new)?;
    let record = lookup_mut(book, name)?;
    Ok(record.edit_phone(&old, new)?.to_string())
}

fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<String, CommandError> {
    let phone = PhoneNumber::new(phone)?;
    let record = lookup_mut(book, name)?;
    Ok(record.remove_phone(&phone)?.to_string())
}

fn show_phone(book: &AddressBook, name: &str) -> Result<String, CommandError> {
    book.get(name)
        .map(Record::get_phones)
        .ok_or_else(|| CommandError::NoContact(name.to_string()))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return NOTHING_TO_SHOW.to_string();
    }

    book.records()
        .map(|record| format!("{}: {}", record.name(), record.get_phones()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn lookup_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, CommandError> {
    book.get_mut(name)
        .ok_or_else(|| CommandError::NoContact(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_john() -> AddressBook {
        let mut book = AddressBook::new();
        execute(Command::Add, &mut book, &["John", "123"]).unwrap();
        book
    }

    #[test]
    fn add_creates_contact() {
        let mut book = AddressBook::new();
        let reply = execute(Command::Add, &mut book, &["John", "123"]).unwrap();

        assert_eq!(reply, CONTACT_CREATED);
        assert_eq!(book.get("John").unwrap().get_phones(), "123");
    }

    #[test]
    fn add_appends_to_existing_contact() {
        let mut book = book_with_john();
        let reply = execute(Command::Add, &mut book, &["John", "+456"]).unwrap();

        assert_eq!(
            reply,
            "Phone number was added successfully to the existed contact John!"
        );
        assert_eq!(book.get("John").unwrap().get_phones(), "123, +456");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_duplicate_reports_record_error() {
        let mut book = book_with_john();
        let err = execute(Command::Add, &mut book, &["John", "123"]).unwrap_err();

        assert!(err.to_string().starts_with("Phone '123' is already in contact 'John'!"));
        assert_eq!(book.get("John").unwrap().len(), 1);
    }

    #[test]
    fn lookups_on_unknown_contact_fail() {
        let mut book = book_with_john();

        for (command, args) in [
            (Command::Phone, vec!["Jane"]),
            (Command::Remove, vec!["Jane", "123"]),
            (Command::Change, vec!["Jane", "123", "456"]),
        ] {
            let err = execute(command, &mut book, &args).unwrap_err();
            assert_eq!(err.to_string(), "There is no contact with name 'Jane'");
        }
    }

    #[test]
    fn change_and_remove_delegate_to_record() {
        let mut book = book_with_john();

        let reply = execute(Command::Change, &mut book, &["John", "123", "456"]).unwrap();
        assert_eq!(reply, "Phone number was changed successfully!");

        let reply = execute(Command::Remove, &mut book, &["John", "456"]).unwrap();
        assert_eq!(reply, "Phone was removed successfully!");

        assert_eq!(execute(Command::Phone, &mut book, &["John"]).unwrap(), "");
    }

    #[test]
    fn show_all_lists_in_insertion_order() {
        let mut book = AddressBook::new();
        assert_eq!(execute(Command::ShowAll, &mut book, &[]).unwrap(), NOTHING_TO_SHOW);

        execute(Command::Add, &mut book, &["Zed", "1"]).unwrap();
        execute(Command::Add, &mut book, &["Ann", "2"]).unwrap();
        execute(Command::Add, &mut book, &["Zed", "3"]).unwrap();

        assert_eq!(
            execute(Command::ShowAll, &mut book, &[]).unwrap(),
            "Zed: 1, 3\nAnn: 2"
        );
    }

    #[test]
    fn mismatched_arguments_are_rejected_even_without_pipeline() {
        let mut book = AddressBook::new();
        let err = execute(Command::Phone, &mut book, &[]).unwrap_err();
        assert_eq!(err.to_string(), Command::Phone.usage());
    }
}
