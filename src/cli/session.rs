//! Interactive read-dispatch-print loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::output::Output;
use crate::config::SessionConfig;
use crate::dispatch::Dispatcher;
use crate::domain::AddressBook;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed an exit phrase
    Exit,
    /// Input ran out before an exit phrase
    EndOfInput,
}

/// One interactive session; owns the address book for its lifetime
pub struct Session<'a> {
    config: &'a SessionConfig,
    output: &'a Output,
    show_prompt: bool,
    dispatcher: Dispatcher,
    book: AddressBook,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a SessionConfig, output: &'a Output) -> Self {
        Self {
            config,
            output,
            show_prompt: true,
            dispatcher: Dispatcher::default(),
            book: AddressBook::new(),
        }
    }

    /// Suppresses the prompt (for piped input)
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_prompt = !quiet;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Reads lines until an exit phrase or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<SessionEnd> {
        let mut line = String::new();

        loop {
            if self.show_prompt {
                write!(out, "{}", self.config.prompt)?;
                out.flush().context("Failed to flush prompt")?;
            }

            line.clear();
            let read = input.read_line(&mut line).context("Failed to read command")?;
            if read == 0 {
                self.output.verbose_ctx("session", "End of input");
                if self.show_prompt {
                    writeln!(out)?;
                }
                return Ok(SessionEnd::EndOfInput);
            }

            if !self.step(&line, &mut out)? {
                return Ok(SessionEnd::Exit);
            }
        }
    }

    /// Dispatches one line and prints the reply; returns false on exit
    ///
    /// Empty lines are skipped without dispatching; whitespace-only lines
    /// are dispatched like any other input.
    pub fn step<W: Write>(&mut self, line: &str, mut out: W) -> Result<bool> {
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            return Ok(true);
        }

        let reply = self.dispatcher.dispatch(line, &mut self.book);
        self.output.verbose_ctx(
            "dispatch",
            &format!(
                "{:?} -> {}",
                line.trim_end_matches(['\r', '\n']),
                reply.command.map_or("<none>", |c| c.keyword())
            ),
        );

        writeln!(out, "{}", self.output.render(&reply))?;

        if reply.is_exit() {
            return Ok(false);
        }
        if self.config.blank_line_after_reply && !self.output.is_json() {
            writeln!(out)?;
        }
        Ok(true)
    }
}
