//! Contacts CLI - Interactive in-memory contact manager

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = contacts_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
