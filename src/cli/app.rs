//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::session::Session;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Interactive in-memory contact manager")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the configured default)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to a configuration file
    #[arg(long, short = 'c', global = true, env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not print the prompt
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run commands given as arguments instead of reading stdin
    ///
    /// Examples:
    ///   contacts run "add John 123" "show all"
    Run {
        /// Command lines, dispatched in order against one address book
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Print the effective configuration
    Config,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.session.default_format);
    let output = Output::new(format, cli.verbose);

    match &config.source {
        Some(path) => output.verbose_ctx("config", &format!("Loaded {}", path.display())),
        None => output.verbose_ctx("config", "Using defaults"),
    }

    match cli.command {
        None => {
            output.verbose("Starting interactive session");
            let mut session = Session::new(&config.session, &output).quiet(cli.quiet);
            let end = session.run(io::stdin().lock(), io::stdout().lock())?;
            output.verbose_ctx("session", &format!("Finished: {:?}", end));
        }

        Some(Commands::Run { lines }) => {
            output.verbose_ctx("run", &format!("Dispatching {} line(s)", lines.len()));
            let mut session = Session::new(&config.session, &output).quiet(true);
            let mut stdout = io::stdout().lock();
            for line in &lines {
                if !session.step(line, &mut stdout)? {
                    output.verbose_ctx("run", "Exit command reached");
                    break;
                }
            }
        }

        Some(Commands::Config) => {
            if output.is_json() {
                output.data(&serde_json::json!({
                    "source": config.source.as_ref().map(|p| p.display().to_string()),
                    "default_path": Config::default_path().map(|p| p.display().to_string()),
                    "session": config.session,
                }));
            } else {
                match &config.source {
                    Some(path) => println!("# loaded from {}", path.display()),
                    None => println!("# defaults (no config file)"),
                }
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}
