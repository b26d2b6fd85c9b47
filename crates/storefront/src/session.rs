//! Signed-in user session pointer.
//!
//! The pointer is a denormalized copy of the signed-in user's record, minus
//! the password, held in the session-scoped slot. It is cleared at sign-out
//! and dies with the process; the durable collection slots never see it.

use std::sync::Arc;

use crate::models::CurrentUser;
use crate::storage::{Storage, slots};

/// Access to the session slot holding the signed-in user.
pub struct Session {
    storage: Arc<dyn Storage>,
}

impl Session {
    /// Create a session over the given (typically in-memory) storage.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let payload = self.storage.read(slots::CURRENT_USER).ok()??;
        match serde_json::from_str(&payload) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "unparsable session pointer, treating as signed out");
                None
            }
        }
    }

    /// Point the session at `user`.
    ///
    /// Best-effort like every other slot write: a failure is logged and
    /// reported, not raised.
    pub fn set_current_user(&self, user: &CurrentUser) -> bool {
        let payload = match serde_json::to_string(user) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::error!(%error, "session pointer serialization failed");
                return false;
            }
        };

        match self.storage.write(slots::CURRENT_USER, &payload) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(%error, "session pointer write failed");
                false
            }
        }
    }

    /// Clear the pointer at sign-out.
    pub fn clear(&self) {
        if let Err(error) = self.storage.remove(slots::CURRENT_USER) {
            tracing::error!(%error, "session pointer removal failed");
        }
    }
}
