//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin account
//! lumina admin create -e ops@example.com -p "a long password" -f Ada -l Lovelace
//! ```
//!
//! # Environment Variables
//!
//! - `LUMINA_DATA_DIR` - Directory holding the collection slots (default: ./data)

use thiserror::Error;
use tracing::{info, warn};

use lumina_core::{Email, Role};
use lumina_storefront::collection::StoreError;
use lumina_storefront::config::{ConfigError, StorefrontConfig};
use lumina_storefront::state::AppState;
use lumina_storefront::stores::users::{DirectoryError, NewUser};

/// Minimum password length, matching the storefront sign-up form.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password too short.
    #[error("Password must be at least 8 characters")]
    WeakPassword,

    /// Account already exists.
    #[error("An account already exists with email: {0}")]
    UserExists(String),

    /// Store error.
    #[error("Store error: {0}")]
    Store(StoreError),
}

/// Create a new admin account.
///
/// # Arguments
///
/// * `email` - Admin's email address
/// * `password` - Admin's password (stored in plain text, like every account)
/// * `first_name` - Admin's first name
/// * `last_name` - Admin's last name
///
/// # Returns
///
/// The id of the created account.
pub fn create_user(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<String, AdminError> {
    let config = StorefrontConfig::from_env()?;

    // Validate inputs before touching the stores
    let email = Email::parse(email).map_err(|e| AdminError::InvalidEmail(e.to_string()))?;
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AdminError::WeakPassword);
    }

    info!(data_dir = %config.data_dir.display(), "Opening stores");
    let state = AppState::new(config);

    info!("Creating admin account: {email}");
    let commit = state
        .users()
        .register(NewUser {
            email,
            password: password.to_owned(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            role: Role::Admin,
        })
        .map_err(|e| match e {
            DirectoryError::EmailTaken(taken) => AdminError::UserExists(taken),
            DirectoryError::Store(other) => AdminError::Store(other),
        })?;

    if !commit.persisted {
        warn!("Account created in memory but the users slot failed to flush");
    }

    info!(
        "Admin account created! ID: {}, Email: {}",
        commit.value.id, commit.value.email
    );

    Ok(commit.value.id.into_inner())
}
