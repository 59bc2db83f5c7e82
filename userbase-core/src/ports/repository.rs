//! Repository port - user storage abstraction

#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::User;

/// User storage abstraction
///
/// Implementations own the stored users and are the single place where
/// identifiers get assigned.
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// Assign a fresh identifier, append the user and return the stored copy
    fn save(&self, user: User) -> Result<User>;

    /// Get the first stored user with the given identifier
    ///
    /// Fails with `Error::NotFound` when nothing matches.
    fn find_by_id(&self, id: Uuid) -> Result<User>;

    /// Snapshot of all stored users, in insertion order
    fn find_all(&self) -> Result<Vec<User>>;

    /// Number of stored users
    fn count(&self) -> Result<usize>;
}
