//! Domain models for the contacts CLI
//!
//! Contains the contact data model without any I/O concerns.

mod phone;
mod record;
mod book;

pub use phone::{PhoneNumber, PhoneError};
pub use record::{Name, Record, RecordError, PHONE_ADDED, PHONE_CHANGED, PHONE_REMOVED};
pub use book::AddressBook;
