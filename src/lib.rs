//! Contacts CLI - an interactive, in-memory contact manager
//!
//! Contacts live in an [`AddressBook`] for the duration of one session.
//! Each input line is resolved by the [`dispatch`] module to a command,
//! validated, and applied to the book.

pub mod domain;
pub mod dispatch;
pub mod config;
pub mod cli;

pub use dispatch::{dispatch, Command, Dispatcher, Reply};
pub use domain::{AddressBook, Name, PhoneNumber, Record};
