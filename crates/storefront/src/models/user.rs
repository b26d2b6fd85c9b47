//! User account domain types.

use serde::{Deserialize, Serialize};

use lumina_core::{Email, Role, UserId};

use crate::collection::Record;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Sign-in address, unique across accounts (case-insensitive).
    pub email: Email,
    /// SECURITY LIMITATION: stored and compared in plaintext. Kept that way
    /// deliberately; a production deployment must replace this with salted
    /// hashing before holding real accounts.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip: String,
    /// Self-reported gender.
    pub gender: String,
    /// Permission level.
    pub role: Role,
}

impl Record for User {
    type Key = UserId;

    fn key(&self) -> UserId {
        self.id.clone()
    }
}

/// Field-level patch applied to a user's own profile.
///
/// `None` leaves the field untouched; email uniqueness is checked at
/// registration only, so a patched email is taken as-is.
#[derive(Debug, Clone, Default)]
pub struct UserProfilePatch {
    /// New sign-in address.
    pub email: Option<Email>,
    /// New plaintext password. Never copied into the session pointer.
    pub password: Option<String>,
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New postal code.
    pub zip: Option<String>,
    /// New gender.
    pub gender: Option<String>,
}

impl UserProfilePatch {
    /// Merge the set fields over `user`, leaving the rest alone.
    pub fn apply(&self, user: &mut User) {
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(first_name) = &self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(address) = &self.address {
            user.address = address.clone();
        }
        if let Some(city) = &self.city {
            user.city = city.clone();
        }
        if let Some(zip) = &self.zip {
            user.zip = zip.clone();
        }
        if let Some(gender) = &self.gender {
            user.gender = gender.clone();
        }
    }
}
