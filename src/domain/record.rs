//! Contact record domain model
//!
//! A record owns one contact name and an ordered, duplicate-free list of
//! phone numbers. Records are never removed from the book: dropping the
//! last phone leaves an empty record behind.

use std::fmt;

use thiserror::Error;

use super::phone::PhoneNumber;

pub const PHONE_ADDED: &str = "Phone was added successfully!";
pub const PHONE_REMOVED: &str = "Phone was removed successfully!";
pub const PHONE_CHANGED: &str = "Phone number was changed successfully!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Phone '{phone}' is already in contact '{name}'!\nTry another phone or change the existing one")]
    DuplicatePhone { name: Name, phone: PhoneNumber },

    #[error("Phone can't be removed: it's not in the list of the contact!")]
    RemoveMissing(PhoneNumber),

    #[error("Phone can't be changed: it's not in the list of the contact!")]
    EditMissing(PhoneNumber),
}

/// Contact name, used as-is as the address book key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Creates a record with no phones
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    pub fn contains(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Appends a phone unless it is already present
    pub fn add_phone(&mut self, phone: PhoneNumber) -> Result<&'static str, RecordError> {
        if self.contains(&phone) {
            return Err(RecordError::DuplicatePhone {
                name: self.name.clone(),
                phone,
            });
        }
        self.phones.push(phone);
        Ok(PHONE_ADDED)
    }

    /// Phones joined by `", "`, empty string for an empty record
    pub fn get_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> Result<&'static str, RecordError> {
        let position = self
            .position(phone)
            .ok_or_else(|| RecordError::RemoveMissing(phone.clone()))?;
        self.phones.remove(position);
        Ok(PHONE_REMOVED)
    }

    /// Replaces `old` with `new`, moving the new number to the end of the list
    ///
    /// If `new` is already on the record, `old` is still dropped but `new` is
    /// not appended a second time.
    pub fn edit_phone(
        &mut self,
        old: &PhoneNumber,
        new: PhoneNumber,
    ) -> Result<&'static str, RecordError> {
        let position = self
            .position(old)
            .ok_or_else(|| RecordError::EditMissing(old.clone()))?;
        self.phones.remove(position);
        if !self.contains(&new) {
            self.phones.push(new);
        }
        Ok(PHONE_CHANGED)
    }

    fn position(&self, phone: &PhoneNumber) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}
