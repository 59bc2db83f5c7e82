//! In-memory repository adapter
//!
//! Users live in an append-only `Vec` behind a single mutex. Nothing is
//! written to disk; everything is gone when the process exits.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserRepository;

/// Append-only in-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|e| Error::storage(format!("Lock poisoned: {}", e)))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn save(&self, mut user: User) -> Result<User> {
        user.assign_id();
        let mut users = self.lock()?;
        users.push(user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: Uuid) -> Result<User> {
        let users = self.lock()?;
        users
            .iter()
            .find(|user| user.id() == Some(id))
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.lock()?.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_save_assigns_id() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(User::new("Gabriel", "secret")).unwrap();

        assert!(saved.id().is_some());
        assert_eq!(saved.login(), "Gabriel");
        assert_eq!(saved.password(), "secret");
    }

    #[test]
    fn test_save_replaces_existing_id() {
        let repo = InMemoryUserRepository::new();
        let stale = Uuid::new_v4();
        let saved = repo.save(User::with_id(stale, "Gabriel", "secret")).unwrap();

        assert_ne!(saved.id(), Some(stale));
        assert!(repo.find_by_id(stale).unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_by_id_returns_saved_user() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(User::new("Gabriel", "secret")).unwrap();

        let found = repo.find_by_id(saved.id().unwrap()).unwrap();
        assert_eq!(found, saved);
    }

    #[test]
    fn test_find_by_id_compares_by_value() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(User::new("Gabriel", "secret")).unwrap();

        // Round-trip through a string so the lookup key is a distinct value
        let id: Uuid = saved.id().unwrap().to_string().parse().unwrap();
        assert_eq!(repo.find_by_id(id).unwrap(), saved);
    }

    #[test]
    fn test_find_by_id_unknown_fails_with_not_found() {
        let repo = InMemoryUserRepository::new();
        let id = Uuid::new_v4();

        let err = repo.find_by_id(id).unwrap_err();
        assert!(matches!(err, Error::NotFound(missing) if missing == id));
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_find_all_empty() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_all_keeps_insertion_order_and_duplicates() {
        let repo = InMemoryUserRepository::new();
        let first = repo.save(User::new("ana", "a")).unwrap();
        let second = repo.save(User::new("bruno", "b")).unwrap();
        let third = repo.save(User::new("ana", "c")).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all, vec![first, second, third]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_poisoned_lock_surfaces_as_storage_error() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let holder = Arc::clone(&repo);

        let panicked = thread::spawn(move || {
            let _guard = holder.users.lock().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(panicked.is_err());

        assert!(matches!(repo.save(User::new("ana", "a")), Err(Error::Storage(_))));
        assert!(matches!(repo.find_all(), Err(Error::Storage(_))));
        assert!(matches!(repo.find_by_id(Uuid::new_v4()), Err(Error::Storage(_))));
        assert!(matches!(repo.count(), Err(Error::Storage(_))));
    }

    #[test]
    fn test_find_all_is_a_snapshot() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("ana", "a")).unwrap();

        let snapshot = repo.find_all().unwrap();
        repo.save(User::new("bruno", "b")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.find_all().unwrap().len(), 2);
    }
}
