//! Authentication service.
//!
//! Sign-up, sign-in, profile edits, and the password-reset request flow,
//! tying the account directory to the session pointer.
//!
//! Passwords are stored and compared in plain text, exactly as they live in
//! the `users` snapshot; see [`User::password`]. Do not put real credentials
//! into a deployment of this crate.

mod error;

pub use error::AuthError;

use lumina_core::{Email, Role, UserId};

use crate::collection::StoreError;
use crate::models::{CurrentUser, User, UserProfilePatch};
use crate::services::notify::{Notification, Notifier};
use crate::session::Session;
use crate::stores::users::{DirectoryError, NewUser, UserDirectory};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
///
/// Handles registration, sign-in/sign-out, profile updates, and password
/// reset requests.
pub struct AuthService<'a> {
    users: &'a UserDirectory,
    session: &'a Session,
    notifier: &'a dyn Notifier,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(
        users: &'a UserDirectory,
        session: &'a Session,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            users,
            session,
            notifier,
        }
    }

    // =========================================================================
    // Registration and Sign-in
    // =========================================================================

    /// Register a new customer account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<CurrentUser, AuthError> {
        // Validate email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        // Create the account
        let commit = self
            .users
            .register(NewUser {
                email,
                password: password.to_owned(),
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                role: Role::Customer,
            })
            .map_err(|e| match e {
                DirectoryError::EmailTaken(_) => AuthError::EmailTaken,
                DirectoryError::Store(other) => AuthError::Store(other),
            })?;

        // Sign the fresh account in
        let current = CurrentUser::from(&commit.value);
        self.session.set_current_user(&current);
        Ok(current)
    }

    /// Sign in with email and password.
    ///
    /// The comparison is plain-text equality against the stored password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        // Validate email format
        let email = Email::parse(email)?;

        // Look the account up
        let user = self
            .users
            .find_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        // Compare passwords
        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let current = CurrentUser::from(&user);
        self.session.set_current_user(&current);
        Ok(current)
    }

    /// Sign the current user out, clearing the session pointer.
    pub fn sign_out(&self) {
        self.session.clear();
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.session.current_user()
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Apply a profile patch to an account.
    ///
    /// A new password must meet the same requirements as at sign-up, and a
    /// new email must not belong to another account. When the edited account
    /// is the signed-in one, the session pointer follows the change.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if a new password is too short.
    /// Returns `AuthError::EmailTaken` if a new email belongs to someone else.
    /// Returns `AuthError::UserNotFound` if the account does not exist.
    pub fn update_profile(
        &self,
        id: &UserId,
        patch: &UserProfilePatch,
    ) -> Result<User, AuthError> {
        if let Some(password) = &patch.password {
            validate_password(password)?;
        }
        if let Some(email) = &patch.email {
            if let Some(holder) = self.users.find_by_email(email) {
                if &holder.id != id {
                    return Err(AuthError::EmailTaken);
                }
            }
        }

        let commit = self.users.update_profile(id, patch).map_err(|e| match e {
            StoreError::NotFound => AuthError::UserNotFound,
            other => AuthError::Store(other),
        })?;
        Ok(commit.value)
    }

    // =========================================================================
    // Password Reset
    // =========================================================================

    /// Request a password reset for an address.
    ///
    /// A reset notification goes out when the address matches an account.
    /// The result is `Ok` either way, so the form cannot be used to probe
    /// which addresses hold accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    pub fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let email = Email::parse(email)?;

        if let Some(user) = self.users.find_by_email(&email) {
            self.notifier.send(Notification::PasswordReset(user));
        }
        Ok(())
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}
