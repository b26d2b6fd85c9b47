//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Every variable has a default, so a bare environment produces a
//! self-contained local shop.
//!
//! - `LUMINA_DATA_DIR` - Directory holding the persisted collection slots (default: ./data)
//! - `LUMINA_SHIPPING_FEE` - Flat shipping fee added to every order (default: 50)
//! - `LUMINA_LOCALE` - UI language tag, one of en/fr/es (default: en)
//! - `LUMINA_CURRENCY` - Display currency code (default: USD)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use lumina_core::{CurrencyCode, Price};

use crate::i18n::Locale;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding one JSON file per collection slot
    pub data_dir: PathBuf,
    /// Flat shipping fee added to every order at checkout
    pub shipping_fee: Price,
    /// UI language
    pub locale: Locale,
    /// Display currency for prices
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            shipping_fee: Price::from_cents(5_000),
            locale: Locale::default(),
            currency: CurrencyCode::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LUMINA_DATA_DIR", "./data"));
        let shipping_fee = get_env_or_default("LUMINA_SHIPPING_FEE", "50")
            .parse::<Decimal>()
            .map(Price::new)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LUMINA_SHIPPING_FEE".to_string(), e.to_string())
            })?;
        let locale = get_env_or_default("LUMINA_LOCALE", "en")
            .parse::<Locale>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMINA_LOCALE".to_string(), e))?;
        let currency = get_env_or_default("LUMINA_CURRENCY", "USD")
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("LUMINA_CURRENCY".to_string(), e))?;

        Ok(Self {
            data_dir,
            shipping_fee,
            locale,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
