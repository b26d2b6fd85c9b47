//! Domain stores, one per persisted collection.
//!
//! Each store wraps a [`CollectionStore`](crate::collection::CollectionStore)
//! for a single slot and layers the domain rules on top: id assignment,
//! uniqueness checks, notifications, and the query helpers its screens need.
//! Everything below shares the same persistence contract; only the rules
//! differ.

pub mod appointments;
pub mod brands;
pub mod cart;
pub mod orders;
pub mod products;
pub mod users;

pub use appointments::{AppointmentBook, AppointmentRequest, BookingError, TIME_SLOTS};
pub use brands::{BrandError, BrandRegistry};
pub use cart::{Cart, CartTotals};
pub use orders::{NewOrder, OrderBook};
pub use products::{NewProduct, ProductCatalog};
pub use users::{DirectoryError, NewUser, UserDirectory};

use crate::collection::{CollectionStore, Record};

/// Draw generated ids until one is free in the store.
///
/// Six random characters make collisions unlikely but not impossible, and a
/// colliding id must never shadow an existing record.
pub(crate) fn unique_id<T, F>(store: &CollectionStore<T>, generate: F) -> T::Key
where
    T: Record,
    F: Fn() -> T::Key,
{
    loop {
        let id = generate();
        if !store.contains(&id) {
            return id;
        }
    }
}
