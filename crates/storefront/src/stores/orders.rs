//! Order book.
//!
//! Orders enter as `Pending`, stamped with the placement time, and are
//! prepended so the most recent order tops the account and admin views.

use std::sync::Arc;

use chrono::Utc;
use lumina_core::{OrderId, OrderStatus, Price};

use crate::collection::{CollectionStore, Commit, Placement, StoreError};
use crate::models::{CartItem, Order};
use crate::storage::{Storage, slots};

/// Fields supplied when an order is placed; everything else is assigned by
/// the book.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub total: Price,
    pub items: u32,
    pub details: Option<Vec<CartItem>>,
    pub shipping_address: Option<String>,
}

/// The order collection and its lifecycle rules.
pub struct OrderBook {
    store: CollectionStore<Order>,
}

impl OrderBook {
    /// Open the book over the `orders` slot, seeding it when the slot is
    /// absent or unreadable.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>, seed: Vec<Order>) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::ORDERS, Placement::Front, seed),
        }
    }

    /// Every order, most recent first.
    #[must_use]
    pub fn list(&self) -> Vec<Order> {
        self.store.list()
    }

    /// Number of orders on the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a single order.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<Order> {
        self.store.find(id)
    }

    /// Enter a new order as `Pending`, dated now, with a fresh id.
    pub fn place(&self, new: NewOrder) -> Result<Commit<Order>, StoreError> {
        let id = super::unique_id(&self.store, OrderId::generate);
        let order = Order {
            id,
            customer_name: new.customer_name,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            total: new.total,
            items: new.items,
            details: new.details,
            shipping_address: new.shipping_address,
        };
        self.store.insert(order)
    }

    /// Move an order to a new lifecycle status.
    pub fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Commit<Order>, StoreError> {
        self.store.update(id, |order| order.status = status)
    }

    /// Orders currently in one status, most recent first.
    #[must_use]
    pub fn by_status(&self, status: OrderStatus) -> Vec<Order> {
        let mut orders = self.store.list();
        orders.retain(|order| order.status == status);
        orders
    }

    /// How many orders sit in each lifecycle status.
    #[must_use]
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        let orders = self.store.list();
        OrderStatus::ALL
            .into_iter()
            .map(|status| {
                let count = orders.iter().filter(|order| order.status == status).count();
                (status, count)
            })
            .collect()
    }

    /// Observe every change to the book.
    pub fn subscribe(&self, subscriber: impl Fn(&[Order]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn book() -> OrderBook {
        OrderBook::open(Arc::new(MemoryStorage::new()), Vec::new())
    }

    fn order_for(customer: &str) -> NewOrder {
        NewOrder {
            customer_name: customer.to_owned(),
            total: Price::from_cents(25_000),
            items: 2,
            details: None,
            shipping_address: Some("1 Harbor Lane".to_owned()),
        }
    }

    #[test]
    fn test_place_assigns_id_date_and_pending_status() {
        let book = book();
        let commit = book.place(order_for("Ada Lovelace")).unwrap();

        assert!(commit.value.id.as_str().starts_with("ORD"));
        assert_eq!(commit.value.status, OrderStatus::Pending);
        assert!(commit.persisted);
        assert!(commit.value.order_date <= Utc::now());
    }

    #[test]
    fn test_most_recent_order_listed_first() {
        let book = book();
        book.place(order_for("Ada Lovelace")).unwrap();
        book.place(order_for("Grace Hopper")).unwrap();

        let listing = book.list();
        assert_eq!(listing[0].customer_name, "Grace Hopper");
        assert_eq!(listing[1].customer_name, "Ada Lovelace");
    }

    #[test]
    fn test_set_status_keeps_position() {
        let book = book();
        let first = book.place(order_for("Ada Lovelace")).unwrap();
        book.place(order_for("Grace Hopper")).unwrap();

        let shipped = book
            .set_status(&first.value.id, OrderStatus::Shipped)
            .unwrap();
        assert_eq!(shipped.value.status, OrderStatus::Shipped);

        // still second in the listing after the update
        assert_eq!(book.list()[1].id, first.value.id);
    }

    #[test]
    fn test_set_status_on_unknown_order() {
        let book = book();
        let err = book
            .set_status(&OrderId::new("ORDmissing"), OrderStatus::Shipped)
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn test_by_status_filters() {
        let book = book();
        let first = book.place(order_for("Ada Lovelace")).unwrap();
        book.place(order_for("Grace Hopper")).unwrap();
        book.set_status(&first.value.id, OrderStatus::Delivered)
            .unwrap();

        let pending = book.by_status(OrderStatus::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].customer_name, "Grace Hopper");
        assert_eq!(book.by_status(OrderStatus::Delivered).len(), 1);
        assert!(book.by_status(OrderStatus::Cancelled).is_empty());
    }

    #[test]
    fn test_status_counts_cover_every_status() {
        let book = book();
        let first = book.place(order_for("Ada Lovelace")).unwrap();
        book.place(order_for("Grace Hopper")).unwrap();
        book.place(order_for("Margaret Hamilton")).unwrap();
        book.set_status(&first.value.id, OrderStatus::Shipped)
            .unwrap();

        let counts = book.status_counts();
        assert_eq!(
            counts,
            vec![
                (OrderStatus::Pending, 2),
                (OrderStatus::Shipped, 1),
                (OrderStatus::Delivered, 0),
                (OrderStatus::Cancelled, 0),
            ]
        );
    }
}
