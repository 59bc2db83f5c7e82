//! CLI command implementations

pub mod demo;
pub mod logs;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use userbase_core::config::Config;
use userbase_core::{EntryPoint, LoggingService, UserbaseContext};

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("USERBASE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".userbase"))
        .context("Could not find home directory")
}

/// Create a fresh context; every CLI process starts with an empty repository
pub fn get_context() -> Result<UserbaseContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    UserbaseContext::new(&data_dir, EntryPoint::Cli)
        .context("Failed to initialize userbase context")
}

/// Record a command execution, ignoring any errors (logging should never break the app)
pub fn log_command(ctx: &UserbaseContext, command: &str) {
    if let Some(logger) = &ctx.logging_service {
        let _ = logger.log_command(command);
    }
}

/// Record a named event, ignoring any errors
pub fn log_event(ctx: &UserbaseContext, event: &str) {
    if let Some(logger) = &ctx.logging_service {
        let _ = logger.log_event(event);
    }
}

/// Open the event log outside a context, honouring the eventLogging setting
///
/// Returns None if logging is disabled or fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    let config = Config::load(&data_dir).ok()?;
    if !config.event_logging {
        return None;
    }
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}
