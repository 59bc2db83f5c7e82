//! Userbase CLI - in-memory user management in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, logs, session};

/// Userbase - in-memory user management in your terminal
#[derive(Parser)]
#[command(name = "ub", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (save, find, list users)
    Session {
        /// Output results as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Save seed users and list them
    Demo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Session { .. } => "session",
            Commands::Demo { .. } => "demo",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("{:#}", e);
            // Logging should never break the app
            if let Some(logger) = commands::get_logger() {
                let _ = logger.log_error("command_failed", &message, Some(command));
            }
            output::error(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Session { json } => session::run(json),
        Commands::Demo { json } => demo::run(json),
        Commands::Logs { command } => logs::run(command),
    }
}
