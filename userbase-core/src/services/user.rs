//! User service - façade over the user repository

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{LogEvent, User};
use crate::ports::{EventSink, UserRepository};

/// User service for saving and looking up users
///
/// Identifier assignment belongs to the repository; the service only
/// delegates and reports events.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    events: Option<Arc<dyn EventSink>>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            events: None,
        }
    }

    /// Report `user_saved` / `user_lookup_failed` events to the given sink
    pub fn with_events(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = Some(events);
        self
    }

    /// Persist a user and return it with its assigned identifier
    pub fn save(&self, user: User) -> Result<User> {
        let saved = self.repository.save(user)?;
        self.record(LogEvent::new("user_saved"));
        Ok(saved)
    }

    /// Build a user from credentials and persist it
    pub fn register(&self, login: impl Into<String>, password: impl Into<String>) -> Result<User> {
        self.save(User::new(login, password))
    }

    /// Look up a user by identifier
    pub fn find_by_id(&self, id: Uuid) -> Result<User> {
        self.repository.find_by_id(id).inspect_err(|e| {
            if e.is_not_found() {
                self.record(LogEvent::new("user_lookup_failed").with_error("user not found"));
            }
        })
    }

    /// All saved users, in insertion order
    pub fn find_all(&self) -> Result<Vec<User>> {
        self.repository.find_all()
    }

    pub fn count(&self) -> Result<usize> {
        self.repository.count()
    }

    fn record(&self, event: LogEvent) {
        if let Some(events) = &self.events {
            events.record(event);
        }
    }
}
