//! # Command Dispatch
//!
//! Turns one raw input line into a [`Reply`].
//!
//! ## Flow
//!
//! ```text
//! line ──► exit phrase? ──yes──► Exit, "Good bye!"
//!            │ no
//!            ▼
//!        trim + split on ' ' ──► Command::lookup ──miss──► None, "Unknown command!"
//!                                     │
//!                                     ▼
//!                         Pipeline (arity ► phone format) ──reject──► usage / format message
//!                                     │
//!                                     ▼
//!                             handler (mutates AddressBook)
//! ```
//!
//! Every failure is rendered as a plain message; nothing here ends the
//! session except the exit command itself.

mod command;
mod handlers;
mod validate;

use serde::Serialize;
use thiserror::Error;

use crate::domain::{AddressBook, PhoneError, RecordError};

pub use command::{Command, EXIT_PHRASES};
pub use handlers::{CONTACT_CREATED, FAREWELL, GREETING, NOTHING_TO_SHOW};
pub use validate::{ArityCheck, PhoneFormatCheck, Pipeline, Stage, ValidationError};

/// Message for a line that names no known command
pub const UNKNOWN_COMMAND: &str = "Unknown command!";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("There is no contact with name '{0}'")]
    NoContact(String),

    #[error("Unknown command!")]
    Unknown,
}

/// Outcome of one dispatched line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// The command that handled the line, `None` on a dispatch miss
    pub command: Option<Command>,
    pub message: String,
}

impl Reply {
    fn new(command: Option<Command>, message: impl Into<String>) -> Self {
        Self {
            command,
            message: message.into(),
        }
    }

    /// Returns true if the session should end after this reply
    pub fn is_exit(&self) -> bool {
        self.command == Some(Command::Exit)
    }
}

/// Splits a line into command tokens
///
/// Splits on every single space, so runs of spaces yield empty tokens.
pub fn parse_line(line: &str) -> Vec<&str> {
    line.trim().split(' ').collect()
}

/// Resolves lines to commands and runs them through a validation pipeline
pub struct Dispatcher {
    pipeline: Pipeline,
}

impl Dispatcher {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Dispatches one line against the book
    pub fn dispatch(&self, line: &str, book: &mut AddressBook) -> Reply {
        if EXIT_PHRASES.contains(&line.trim()) {
            return Reply::new(Some(Command::Exit), FAREWELL);
        }

        let tokens = parse_line(line);
        let Some((command, consumed)) = Command::lookup(&tokens) else {
            return Reply::new(None, CommandError::Unknown.to_string());
        };
        let args = &tokens[consumed..];

        let result = self
            .pipeline
            .check(command, args)
            .map_err(CommandError::from)
            .and_then(|()| handlers::execute(command, book, args));

        match result {
            Ok(message) => Reply::new(Some(command), message),
            Err(err) => Reply::new(Some(command), err.to_string()),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Pipeline::standard())
    }
}

/// Dispatches a line with the standard validation pipeline
pub fn dispatch(line: &str, book: &mut AddressBook) -> Reply {
    Dispatcher::default().dispatch(line, book)
}
