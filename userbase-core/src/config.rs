//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": {
//!     "eventLogging": true,
//!     "seedUsers": [ { "login": "admin", "password": "admin" } ]
//!   }
//! }
//! ```
//! Keys this crate does not manage are ignored.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_event_logging")]
    event_logging: bool,
    #[serde(default)]
    seed_users: Vec<SeedUser>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            event_logging: default_event_logging(),
            seed_users: Vec::new(),
        }
    }
}

fn default_event_logging() -> bool {
    true
}

/// Credentials for a user created when a context starts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedUser {
    pub login: String,
    pub password: String,
}

impl SeedUser {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

/// Userbase configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub event_logging: bool,
    pub seed_users: Vec<SeedUser>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            event_logging: default_event_logging(),
            seed_users: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Event logging can also be forced with `USERBASE_EVENT_LOGGING`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;
        let event_logging = parse_flag(std::env::var("USERBASE_EVENT_LOGGING").ok().as_deref())
            .unwrap_or(raw.app.event_logging);

        Ok(Self {
            event_logging,
            seed_users: raw.app.seed_users,
        })
    }
}

/// Interpret an on/off environment value; anything else means "not set"
fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;
    // A malformed file falls back to defaults rather than blocking startup
    Ok(serde_json::from_str(&content).unwrap_or_default())
}
