//! Output formatting for session replies

use serde::{Deserialize, Serialize};

use crate::dispatch::Reply;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Renders a dispatcher reply
    ///
    /// Text mode yields the message as-is (possibly empty or multi-line);
    /// JSON mode yields a single-line object.
    pub fn render(&self, reply: &Reply) -> String {
        match self.format {
            OutputFormat::Text => reply.message.clone(),
            OutputFormat::Json => serde_json::json!({
                "command": reply.command,
                "message": reply.message,
                "exit": reply.is_exit(),
            })
            .to_string(),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{dispatch, Command};
    use crate::domain::AddressBook;

    #[test]
    fn text_render_is_the_message() {
        let mut book = AddressBook::new();
        let reply = dispatch("hello", &mut book);

        let output = Output::new(OutputFormat::Text, false);
        assert_eq!(output.render(&reply), "Hello! How can I help you?");
    }

    #[test]
    fn json_render_carries_command_and_exit_flag() {
        let mut book = AddressBook::new();
        let output = Output::new(OutputFormat::Json, false);

        let value: serde_json::Value =
            serde_json::from_str(&output.render(&dispatch("show all", &mut book))).unwrap();
        assert_eq!(value["command"], "show_all");
        assert_eq!(value["exit"], false);

        let value: serde_json::Value =
            serde_json::from_str(&output.render(&dispatch("close", &mut book))).unwrap();
        assert_eq!(value["command"], "exit");
        assert_eq!(value["exit"], true);
    }

    #[test]
    fn json_render_uses_null_for_unknown_command() {
        let mut book = AddressBook::new();
        let output = Output::new(OutputFormat::Json, false);

        let reply = dispatch("dance", &mut book);
        assert_eq!(reply.command, None::<Command>);

        let value: serde_json::Value = serde_json::from_str(&output.render(&reply)).unwrap();
        assert!(value["command"].is_null());
        assert_eq!(value["message"], "Unknown command!");
    }

    #[test]
    fn format_parses_from_config_values() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let parsed: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
    }
}
