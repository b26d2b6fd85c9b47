//! Collection reset command.
//!
//! # Usage
//!
//! ```bash
//! # Put the catalog back to the starter products
//! lumina reset products
//!
//! # Empty the cart
//! lumina reset cart
//! ```
//!
//! # Environment Variables
//!
//! - `LUMINA_DATA_DIR` - Directory holding the collection slots (default: ./data)

use tracing::info;

use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::state::AppState;
use lumina_storefront::storage::{FileStorage, Storage};

use super::Collection;

/// Restore one collection to its seeded state.
///
/// Clearing the slot and reopening the stores writes the seed back:
/// products, brands, and users return to the starter shop, while orders,
/// appointments, and the cart come back empty.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the slot cannot be
/// cleared.
pub fn run(collection: Collection) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let storage = FileStorage::new(&config.data_dir);
    storage.remove(collection.slot())?;

    let state = AppState::new(config);
    let records = match collection {
        Collection::Products => state.products().len(),
        Collection::Brands => state.brands().len(),
        Collection::Orders => state.orders().len(),
        Collection::Appointments => state.appointments().len(),
        Collection::Users => state.users().len(),
        Collection::Cart => state.cart().line_count(),
    };

    info!(collection = collection.slot(), records, "Reset complete");
    Ok(())
}
