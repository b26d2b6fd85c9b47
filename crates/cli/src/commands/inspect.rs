//! Collection inspection command.
//!
//! # Usage
//!
//! ```bash
//! # Print every order
//! lumina inspect orders
//!
//! # Filter by status, category, or role
//! lumina inspect orders --status pending
//! lumina inspect products --category sunglasses
//! lumina inspect users --role admin
//! ```
//!
//! # Environment Variables
//!
//! - `LUMINA_DATA_DIR` - Directory holding the collection slots (default: ./data)

use lumina_core::{AppointmentStatus, OrderStatus, ProductCategory, Role};
use lumina_storefront::config::StorefrontConfig;
use lumina_storefront::state::AppState;

use super::Collection;

/// Print a collection as pretty JSON, optionally filtered.
///
/// Filters apply only to the collections that carry the field: `status` to
/// orders and appointments, `category` to products, `role` to users.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a filter value does
/// not parse, or the collection cannot be serialized.
pub fn run(
    collection: Collection,
    status: Option<&str>,
    category: Option<&str>,
    role: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config);

    let json = match collection {
        Collection::Products => {
            let products = match category {
                Some(raw) => state.products().by_category(raw.parse::<ProductCategory>()?),
                None => state.products().list(),
            };
            serde_json::to_string_pretty(&products)?
        }
        Collection::Brands => serde_json::to_string_pretty(&state.brands().list())?,
        Collection::Orders => {
            let orders = match status {
                Some(raw) => state.orders().by_status(raw.parse::<OrderStatus>()?),
                None => state.orders().list(),
            };
            serde_json::to_string_pretty(&orders)?
        }
        Collection::Appointments => {
            let appointments = match status {
                Some(raw) => state
                    .appointments()
                    .by_status(raw.parse::<AppointmentStatus>()?),
                None => state.appointments().list(),
            };
            serde_json::to_string_pretty(&appointments)?
        }
        Collection::Users => {
            let users = match role {
                Some(raw) => state.users().by_role(raw.parse::<Role>()?),
                None => state.users().list(),
            };
            serde_json::to_string_pretty(&users)?
        }
        Collection::Cart => serde_json::to_string_pretty(&state.cart().items())?,
    };

    emit(&json);
    Ok(())
}

// The JSON is the command's output, not a log line.
#[allow(clippy::print_stdout)]
fn emit(json: &str) {
    println!("{json}");
}
