//! Userbase Core - in-memory user management
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Core entities (User, LogEvent) and error types
//! - **ports**: Trait definitions for external dependencies (UserRepository, EventSink)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (in-memory storage)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;
pub mod log_migrations;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::memory::InMemoryUserRepository;
use config::Config;
use ports::{EventSink, UserRepository};

// Re-export commonly used types at crate root
pub use domain::{LogEvent, User};
pub use domain::result::{Error, OperationResult};
pub use services::{EntryPoint, LogEntry, LoggingService, UserService};

/// Main context for Userbase operations
///
/// Holds the configuration and the services built on top of one in-memory
/// repository. Users live only as long as the context.
pub struct UserbaseContext {
    pub config: Config,
    pub user_service: UserService,
    pub logging_service: Option<Arc<LoggingService>>,
}

impl UserbaseContext {
    /// Create a new context rooted at `data_dir`, configured from its settings.json
    pub fn new(data_dir: &Path, entry_point: EntryPoint) -> Result<Self> {
        let config = Config::load(data_dir)?;
        Self::from_config(data_dir, entry_point, config)
    }

    /// Create a context with an already-resolved config
    ///
    /// Opens the event log when enabled (a log that fails to open is
    /// skipped) and saves every configured seed user.
    pub fn from_config(data_dir: &Path, entry_point: EntryPoint, config: Config) -> Result<Self> {
        let logging_service = if config.event_logging {
            LoggingService::new(data_dir, entry_point, env!("CARGO_PKG_VERSION"))
                .ok()
                .map(Arc::new)
        } else {
            None
        };

        let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        let mut user_service = UserService::new(repository);
        if let Some(logger) = &logging_service {
            user_service = user_service.with_events(Arc::clone(logger) as Arc<dyn EventSink>);
        }

        for seed in &config.seed_users {
            user_service
                .register(seed.login.clone(), seed.password.clone())
                .context("Failed to save seed user")?;
        }

        Ok(Self {
            config,
            user_service,
            logging_service,
        })
    }
}
