//! User domain model

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::result::{Error, Result};

/// A user record
///
/// `id` stays `None` until the user is saved to a repository. Login and
/// password are fixed at construction. The password is kept verbatim but is
/// never serialized or printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Option<Uuid>,
    login: String,
    #[serde(skip)]
    password: String,
}

impl User {
    /// Create an unsaved user. No validation is performed.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            password: password.into(),
        }
    }

    /// Rebuild a user that already carries an identifier
    pub fn with_id(id: Uuid, login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether an identifier has been assigned
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Assign a fresh random identifier, replacing any previous one.
    ///
    /// Repositories call this exactly once, right before storing the user.
    pub fn assign_id(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.id = Some(id);
        id
    }

    /// Assign a fresh identifier only if none is set yet
    pub fn try_assign_id(&mut self) -> Result<Uuid> {
        match self.id {
            Some(existing) => Err(Error::AlreadyAssigned(existing)),
            None => Ok(self.assign_id()),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("Gabriel", "secret");
        assert_eq!(user.id(), None);
        assert_eq!(user.login(), "Gabriel");
        assert_eq!(user.password(), "secret");
        assert!(!user.has_id());
    }

    #[test]
    fn test_empty_fields_accepted() {
        let user = User::new("", "");
        assert_eq!(user.login(), "");
        assert_eq!(user.password(), "");
    }

    #[test]
    fn test_assign_id_twice_changes_id() {
        let mut user = User::new("Gabriel", "secret");
        let first = user.assign_id();
        let second = user.assign_id();

        assert_ne!(first, second);
        assert_eq!(user.id(), Some(second));
    }

    #[test]
    fn test_try_assign_id_guards_existing_id() {
        let mut user = User::new("Gabriel", "secret");
        let id = user.try_assign_id().unwrap();

        match user.try_assign_id() {
            Err(Error::AlreadyAssigned(existing)) => assert_eq!(existing, id),
            other => panic!("expected AlreadyAssigned, got {:?}", other),
        }
        assert_eq!(user.id(), Some(id));
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User::new("Gabriel", "hunter2");
        let debug = format!("{:?}", user);
        assert!(debug.contains("Gabriel"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_serialize_skips_password() {
        let user = User::with_id(Uuid::new_v4(), "Gabriel", "hunter2");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"login\":\"Gabriel\""));
        assert!(!json.contains("hunter2"));
    }
}
