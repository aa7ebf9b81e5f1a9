//! # Command-Line Interface
//!
//! The `contacts` binary runs an interactive session by default: it prints a
//! prompt, reads one command per line and prints the reply.
//!
//! ## Session Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `hello` | Greeting |
//! | `add <name> <phone>` | Create a contact or add a phone to it |
//! | `change <name> <phone> <new_phone>` | Replace a phone |
//! | `remove <name> <phone>` | Remove a phone |
//! | `phone <name>` | Show one contact's phones |
//! | `show all` | List every contact |
//! | `good bye`, `close`, `exit` | End the session |
//!
//! ## Output Formats
//!
//! `--format` accepts:
//! - `text` (default) - the reply message, followed by a blank line
//! - `json` - one `{"command", "message", "exit"}` object per reply
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for diagnostics on stderr:
//! ```bash
//! contacts --verbose
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod session;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use session::{Session, SessionEnd};
