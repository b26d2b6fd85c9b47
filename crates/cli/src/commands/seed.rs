//! Store seeding command.
//!
//! # Usage
//!
//! ```bash
//! # Seed any missing collection slots
//! lumina seed
//!
//! # Start over: clear every slot and reseed
//! lumina seed --force
//! ```
//!
//! # Environment Variables
//!
//! - `LUMINA_DATA_DIR` - Directory holding the collection slots (default: ./data)

use tracing::info;

use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::state::AppState;
use lumina_storefront::storage::{FileStorage, Storage, slots};

/// Seed the collection slots with the starter shop.
///
/// Opening the stores seeds any slot that is absent; `force` clears every
/// slot first so the whole shop starts over from the seed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a slot cannot be
/// cleared.
pub fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    if force {
        let storage = FileStorage::new(&config.data_dir);
        for slot in slots::COLLECTIONS {
            storage.remove(slot)?;
        }
        info!("Cleared existing collection slots");
    }

    info!(data_dir = %config.data_dir.display(), "Opening stores");
    let state = AppState::new(config);

    info!(
        products = state.products().len(),
        brands = state.brands().len(),
        users = state.users().len(),
        orders = state.orders().len(),
        appointments = state.appointments().len(),
        cart_lines = state.cart().line_count(),
        "Seed complete"
    );
    Ok(())
}
