//! Argument validation stages
//!
//! Each stage inspects the raw arguments of a command and either lets them
//! through or rejects them with a [`ValidationError`]. Stages run in order;
//! the first rejection wins and the handler is never called.

use thiserror::Error;

use super::command::Command;
use crate::domain::PhoneNumber;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", .0.usage())]
    Arity(Command),

    #[error("ERROR: Phone may start with '+' and then must contain only digits!\nExample: +380..., 380...")]
    PhoneFormat(String),
}

/// A single validation step
pub trait Stage {
    fn check(&self, command: Command, args: &[&str]) -> Result<(), ValidationError>;
}

/// Rejects argument lists whose length differs from the command's arity
#[derive(Debug, Default, Clone, Copy)]
pub struct ArityCheck;

impl Stage for ArityCheck {
    fn check(&self, command: Command, args: &[&str]) -> Result<(), ValidationError> {
        if args.len() == command.arity() {
            Ok(())
        } else {
            Err(ValidationError::Arity(command))
        }
    }
}

/// Rejects phone arguments that are not `+`-optional digit strings
///
/// Only looks at name+phone and name+phone+new_phone argument lists of
/// commands that carry phones; everything else passes untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneFormatCheck;

impl Stage for PhoneFormatCheck {
    fn check(&self, command: Command, args: &[&str]) -> Result<(), ValidationError> {
        if !command.takes_phones() || !matches!(args.len(), 2 | 3) {
            return Ok(());
        }
        match args[1..].iter().find(|arg| !PhoneNumber::is_valid(arg)) {
            Some(bad) => Err(ValidationError::PhoneFormat((*bad).to_string())),
            None => Ok(()),
        }
    }
}

/// Ordered chain of stages, outermost first
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// A pipeline with no stages
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Arity first, then phone format
    pub fn standard() -> Self {
        Self::empty().stage(ArityCheck).stage(PhoneFormatCheck)
    }

    /// Appends an inner stage
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Runs every stage in order, stopping at the first rejection
    pub fn check(&self, command: Command, args: &[&str]) -> Result<(), ValidationError> {
        self.stages
            .iter()
            .try_for_each(|stage| stage.check(command, args))
    }
}
