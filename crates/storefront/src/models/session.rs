//! Session-related types.
//!
//! Types stored in the session slot for authentication state.

use serde::{Deserialize, Serialize};

use lumina_core::{Email, Role, UserId};

use super::user::User;

/// Session-stored user identity.
///
/// A denormalized copy of the signed-in user's record, minus the password.
/// Profile updates to the signed-in account refresh this copy so the session
/// never shows stale fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// User's ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Given name, shown in the account header.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Permission level.
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
        }
    }
}
