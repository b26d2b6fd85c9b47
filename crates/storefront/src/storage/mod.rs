//! Durable slot storage.
//!
//! Every collection persists as one named slot holding a serialized snapshot
//! of the whole collection. Slots are read once at startup and overwritten
//! wholesale on every mutation; there is no incremental log. Two backends
//! exist: [`FileStorage`] for the slots that outlive the process, and
//! [`MemoryStorage`] for the session-scoped signed-in-user pointer.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Slot names used by the shop.
pub mod slots {
    /// Cart line items.
    pub const CART: &str = "cart";

    /// Placed orders.
    pub const ORDERS: &str = "orders";

    /// Booked eye-exam appointments.
    pub const APPOINTMENTS: &str = "appointments";

    /// Product catalog.
    pub const PRODUCTS: &str = "products";

    /// Registered accounts.
    pub const USERS: &str = "users";

    /// Brand registry.
    pub const BRANDS: &str = "brands";

    /// Signed-in user pointer. Session-scoped: lives in [`super::MemoryStorage`],
    /// cleared at sign-out, never written next to the collection slots.
    pub const CURRENT_USER: &str = "current_user";

    /// Every durable collection slot, in seed order. Excludes
    /// [`CURRENT_USER`], which is not a collection.
    pub const COLLECTIONS: [&str; 6] = [PRODUCTS, BRANDS, ORDERS, APPOINTMENTS, USERS, CART];
}

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read or write the slot.
    #[error("storage error on slot '{slot}': {source}")]
    Io {
        /// Slot the operation targeted.
        slot: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn io(slot: &str, source: std::io::Error) -> Self {
        Self::Io {
            slot: slot.to_owned(),
            source,
        }
    }
}

/// A backend holding named string slots.
///
/// Payloads are opaque strings; serialization belongs to the caller. A slot
/// that has never been written reads as `None`, and removing an absent slot
/// succeeds.
pub trait Storage: Send + Sync {
    /// Read the payload stored in `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite `slot` with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the payload cannot be written.
    fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError>;

    /// Delete `slot` entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backend cannot be modified.
    fn remove(&self, slot: &str) -> Result<(), StorageError>;
}
