//! Account directory.
//!
//! Registration enforces case-insensitive email uniqueness, and profile
//! updates keep the signed-in session pointer in step with the directory
//! record.

use std::sync::Arc;

use lumina_core::{Email, Role, UserId};
use thiserror::Error;

use crate::collection::{CollectionStore, Commit, Placement, StoreError};
use crate::models::{CurrentUser, User, UserProfilePatch};
use crate::session::Session;
use crate::storage::{Storage, slots};

/// Fields supplied at registration; the rest of the profile starts blank
/// and is filled in from the account page later.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Errors from directory operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// Another account already uses this address (comparison ignores case).
    #[error("an account with email {0} already exists")]
    EmailTaken(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The account collection plus registration and session rules.
pub struct UserDirectory {
    store: CollectionStore<User>,
    session: Arc<Session>,
}

impl UserDirectory {
    /// Open the directory over the `users` slot, seeding it when the slot is
    /// absent or unreadable.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>, session: Arc<Session>, seed: Vec<User>) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::USERS, Placement::Front, seed),
            session,
        }
    }

    /// Every account, most recently registered first.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.store.list()
    }

    /// Number of accounts in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up an account by id.
    #[must_use]
    pub fn find(&self, id: &UserId) -> Option<User> {
        self.store.find(id)
    }

    /// Look up an account by address, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<User> {
        self.store
            .list()
            .into_iter()
            .find(|user| user.email.eq_ignore_case(email))
    }

    /// Register a new account.
    ///
    /// Rejects the registration when another account already uses the
    /// address, no matter its casing.
    pub fn register(&self, new: NewUser) -> Result<Commit<User>, DirectoryError> {
        if let Some(existing) = self.find_by_email(&new.email) {
            return Err(DirectoryError::EmailTaken(existing.email.into_inner()));
        }

        let id = super::unique_id(&self.store, UserId::generate);
        let user = User {
            id,
            email: new.email,
            password: new.password,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            zip: String::new(),
            gender: String::new(),
            role: new.role,
        };
        Ok(self.store.insert(user)?)
    }

    /// Apply a profile patch to an account.
    ///
    /// When the patched account is the one currently signed in, the session
    /// pointer is rewritten from the updated record so the signed-in view
    /// never goes stale. The pointer carries no password either way.
    pub fn update_profile(
        &self,
        id: &UserId,
        patch: &UserProfilePatch,
    ) -> Result<Commit<User>, StoreError> {
        let commit = self.store.update(id, |user| patch.apply(user))?;

        if let Some(current) = self.session.current_user() {
            if current.id == commit.value.id {
                self.session.set_current_user(&CurrentUser::from(&commit.value));
            }
        }
        Ok(commit)
    }

    /// Remove an account. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &UserId) -> Commit<usize> {
        self.store.remove(id)
    }

    /// Accounts holding one role, most recently registered first.
    #[must_use]
    pub fn by_role(&self, role: Role) -> Vec<User> {
        let mut users = self.store.list();
        users.retain(|user| user.role == role);
        users
    }

    /// Observe every change to the directory.
    pub fn subscribe(&self, subscriber: impl Fn(&[User]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn directory() -> (UserDirectory, Arc<Session>) {
        let session = Arc::new(Session::new(Arc::new(MemoryStorage::new())));
        let directory =
            UserDirectory::open(Arc::new(MemoryStorage::new()), session.clone(), Vec::new());
        (directory, session)
    }

    fn account(email: &str) -> NewUser {
        NewUser {
            email: Email::parse(email).unwrap(),
            password: "correct-horse".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            role: Role::Customer,
        }
    }

    #[test]
    fn test_register_fills_blank_profile() {
        let (directory, _) = directory();
        let commit = directory.register(account("ada@example.com")).unwrap();

        assert!(commit.value.id.as_str().starts_with("USR"));
        assert_eq!(commit.value.role, Role::Customer);
        assert!(commit.value.phone.is_empty());
        assert!(commit.value.city.is_empty());
    }

    #[test]
    fn test_email_uniqueness_ignores_case() {
        let (directory, _) = directory();
        directory.register(account("ada@example.com")).unwrap();

        let err = directory
            .register(account("ADA@Example.COM"))
            .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::EmailTaken("ada@example.com".to_owned())
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_find_by_email_ignores_case() {
        let (directory, _) = directory();
        directory.register(account("ada@example.com")).unwrap();

        let found = directory
            .find_by_email(&Email::parse("Ada@Example.com").unwrap())
            .unwrap();
        assert_eq!(found.first_name, "Ada");
    }

    #[test]
    fn test_update_profile_refreshes_signed_in_session() {
        let (directory, session) = directory();
        let commit = directory.register(account("ada@example.com")).unwrap();
        session.set_current_user(&CurrentUser::from(&commit.value));

        let patch = UserProfilePatch {
            first_name: Some("Augusta".to_owned()),
            ..UserProfilePatch::default()
        };
        directory.update_profile(&commit.value.id, &patch).unwrap();

        let current = session.current_user().unwrap();
        assert_eq!(current.first_name, "Augusta");
    }

    #[test]
    fn test_update_profile_leaves_other_sessions_alone() {
        let (directory, session) = directory();
        let signed_in = directory.register(account("ada@example.com")).unwrap();
        let other = directory.register(account("grace@example.com")).unwrap();
        session.set_current_user(&CurrentUser::from(&signed_in.value));

        let patch = UserProfilePatch {
            first_name: Some("Grace B.".to_owned()),
            ..UserProfilePatch::default()
        };
        directory.update_profile(&other.value.id, &patch).unwrap();

        assert_eq!(session.current_user().unwrap().first_name, "Ada");
    }

    #[test]
    fn test_by_role_filters() {
        let (directory, _) = directory();
        directory.register(account("ada@example.com")).unwrap();
        let mut admin = account("ops@example.com");
        admin.role = Role::Admin;
        directory.register(admin).unwrap();

        assert_eq!(directory.by_role(Role::Admin).len(), 1);
        assert_eq!(directory.by_role(Role::Customer).len(), 1);
    }
}
