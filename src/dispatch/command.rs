//! Command table
//!
//! | Input | Command | Arguments |
//! |-------|---------|-----------|
//! | `hello` | [`Command::Hello`] | — |
//! | `add` | [`Command::Add`] | name, phone |
//! | `change` | [`Command::Change`] | name, old_phone, new_phone |
//! | `remove` | [`Command::Remove`] | name, phone |
//! | `phone` | [`Command::Phone`] | name |
//! | `show all` | [`Command::ShowAll`] | — |
//! | `good bye`, `close`, `exit` | [`Command::Exit`] | — |

use std::fmt;

use serde::Serialize;

/// Full-line phrases that end the session (matched case-sensitively)
pub const EXIT_PHRASES: [&str; 3] = ["good bye", "close", "exit"];

/// A recognized command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Hello,
    Add,
    Change,
    Remove,
    Phone,
    ShowAll,
    Exit,
}

impl Command {
    /// Resolves the leading tokens of a line to a command
    ///
    /// Returns the command and the number of tokens it consumed, or `None`
    /// on a dispatch miss. Exit phrases are matched on the whole line by the
    /// dispatcher and are never returned here.
    pub fn lookup(tokens: &[&str]) -> Option<(Self, usize)> {
        let first = tokens.first()?.to_lowercase();
        match first.as_str() {
            "hello" => Some((Command::Hello, 1)),
            "add" => Some((Command::Add, 1)),
            "change" => Some((Command::Change, 1)),
            "remove" => Some((Command::Remove, 1)),
            "phone" => Some((Command::Phone, 1)),
            // anything after `show all` is ignored
            "show" => match tokens.get(1) {
                Some(second) if second.eq_ignore_ascii_case("all") => {
                    Some((Command::ShowAll, tokens.len()))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Number of arguments the command accepts
    pub fn arity(&self) -> usize {
        match self {
            Command::Hello | Command::ShowAll | Command::Exit => 0,
            Command::Phone => 1,
            Command::Add | Command::Remove => 2,
            Command::Change => 3,
        }
    }

    /// Usage message reported on an argument-count mismatch
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello | Command::ShowAll | Command::Exit => {
                "ERROR: This command has to be written without arguments!"
            }
            Command::Phone => "ERROR: This command needs 1 arguments: 'name' separated by 1 space!",
            Command::Add | Command::Remove => {
                "ERROR: This command needs 2 arguments: 'name' and 'phone' separated by 1 space!"
            }
            Command::Change => {
                "ERROR: This command needs 3 arguments: 'name', 'phone' and 'new_phone' separated by 1 space!"
            }
        }
    }

    /// Returns true if the arguments after the name are phone numbers
    pub fn takes_phones(&self) -> bool {
        matches!(self, Command::Add | Command::Change | Command::Remove)
    }

    /// Keyword as typed at the prompt
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Remove => "remove",
            Command::Phone => "phone",
            Command::ShowAll => "show all",
            Command::Exit => "exit",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_on_keyword() {
        assert_eq!(Command::lookup(&["ADD", "John", "1"]), Some((Command::Add, 1)));
        assert_eq!(Command::lookup(&["Hello"]), Some((Command::Hello, 1)));
        assert_eq!(Command::lookup(&["Show", "ALL"]), Some((Command::ShowAll, 2)));
    }

    #[test]
    fn show_all_consumes_trailing_tokens() {
        assert_eq!(Command::lookup(&["show", "all", "now"]), Some((Command::ShowAll, 3)));
        assert_eq!(Command::lookup(&["show", "all", "", "x"]), Some((Command::ShowAll, 4)));
    }

    #[test]
    fn show_requires_all() {
        assert_eq!(Command::lookup(&["show"]), None);
        assert_eq!(Command::lookup(&["show", "some"]), None);
        assert_eq!(Command::lookup(&["show", ""]), None);
    }

    #[test]
    fn unknown_keywords_miss() {
        assert_eq!(Command::lookup(&["delete", "John"]), None);
        assert_eq!(Command::lookup(&[""]), None);
        assert_eq!(Command::lookup(&[]), None);
    }

    #[test]
    fn arity_table() {
        assert_eq!(Command::Hello.arity(), 0);
        assert_eq!(Command::ShowAll.arity(), 0);
        assert_eq!(Command::Exit.arity(), 0);
        assert_eq!(Command::Phone.arity(), 1);
        assert_eq!(Command::Add.arity(), 2);
        assert_eq!(Command::Remove.arity(), 2);
        assert_eq!(Command::Change.arity(), 3);
    }

    #[test]
    fn only_mutating_commands_take_phones() {
        assert!(Command::Add.takes_phones());
        assert!(Command::Change.takes_phones());
        assert!(Command::Remove.takes_phones());
        assert!(!Command::Phone.takes_phones());
        assert!(!Command::ShowAll.takes_phones());
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Command::ShowAll).unwrap(), "\"show_all\"");
    }
}
