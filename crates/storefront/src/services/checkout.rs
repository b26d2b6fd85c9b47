//! Checkout workflow.
//!
//! Placing an order reads the cart, enters the order on the book, sends the
//! confirmation, and then clears the cart. The two stores persist to
//! independent slots, so the sequence is deliberately not atomic: the order
//! stands even when emptying the cart fails to flush, and both outcomes are
//! reported to the caller instead of being papered over.

use lumina_core::Price;
use thiserror::Error;

use crate::collection::StoreError;
use crate::models::Order;
use crate::services::notify::{Notification, Notifier};
use crate::stores::cart::Cart;
use crate::stores::orders::{NewOrder, OrderBook};

/// What the checkout form collects.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub shipping_address: Option<String>,
}

/// Errors from the checkout workflow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing in the cart to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a completed checkout.
///
/// `order_persisted` and `cart_persisted` report whether each slot flushed;
/// the in-memory effects stand regardless.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub order_persisted: bool,
    pub cart_persisted: bool,
}

/// The order placement workflow.
pub struct CheckoutService<'a> {
    cart: &'a Cart,
    orders: &'a OrderBook,
    notifier: &'a dyn Notifier,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(cart: &'a Cart, orders: &'a OrderBook, notifier: &'a dyn Notifier) -> Self {
        Self {
            cart,
            orders,
            notifier,
        }
    }

    /// Turn the current cart into an order.
    ///
    /// The order's `details` are a snapshot of the cart lines at this
    /// moment, its `total` the cart subtotal plus `shipping_fee`, and its
    /// `items` the unit count across all lines. A confirmation notification
    /// goes out before the cart is cleared.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart holds no lines.
    pub fn place_order(
        &self,
        details: CheckoutDetails,
        shipping_fee: Price,
    ) -> Result<PlacedOrder, CheckoutError> {
        // Snapshot the cart
        let items = self.cart.items();
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals = self.cart.totals(shipping_fee);
        let units = items.iter().map(|line| line.quantity).sum();

        // Enter the order
        let commit = self.orders.place(NewOrder {
            customer_name: details.customer_name,
            total: totals.total,
            items: units,
            details: Some(items),
            shipping_address: details.shipping_address,
        })?;

        self.notifier
            .send(Notification::OrderConfirmation(commit.value.clone()));

        // Empty the cart; the order above stands even if this flush fails
        let cleared = self.cart.clear();

        Ok(PlacedOrder {
            order: commit.value,
            order_persisted: commit.persisted,
            cart_persisted: cleared.persisted,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use lumina_core::{OrderStatus, ProductId};

    use super::*;
    use crate::models::CartItem;
    use crate::services::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;

    fn line(product: &str, cents: i64) -> CartItem {
        CartItem {
            product_id: ProductId::new(product),
            name: "Aviator Classic".to_owned(),
            image: "/images/aviator.webp".to_owned(),
            price: Price::from_cents(cents),
            color: "Black".to_owned(),
            lens_type: "Standard".to_owned(),
            quantity: 1,
        }
    }

    fn details() -> CheckoutDetails {
        CheckoutDetails {
            customer_name: "Ada Lovelace".to_owned(),
            shipping_address: Some("1 Harbor Lane".to_owned()),
        }
    }

    #[test]
    fn test_checkout_snapshots_cart_and_clears_it() {
        let cart = Cart::open(Arc::new(MemoryStorage::new()));
        let orders = OrderBook::open(Arc::new(MemoryStorage::new()), Vec::new());
        let recorder = RecordingNotifier::new();
        cart.add(line("PRDav01", 10_000)).unwrap();
        cart.add(line("PRDav01", 10_000)).unwrap();
        cart.add(line("PRDwf02", 12_000)).unwrap();

        let placed = CheckoutService::new(&cart, &orders, &recorder)
            .place_order(details(), Price::from_cents(5_000))
            .unwrap();

        // 2 + 1 units, 100 + 100 + 120 + 50 shipping
        assert_eq!(placed.order.items, 3);
        assert_eq!(placed.order.total, Price::from_cents(37_000));
        assert_eq!(placed.order.status, OrderStatus::Pending);
        assert_eq!(placed.order.details.as_ref().unwrap().len(), 2);
        assert!(placed.order_persisted);
        assert!(placed.cart_persisted);

        assert!(cart.is_empty());
        assert_eq!(orders.len(), 1);
        assert_eq!(recorder.kinds(), vec!["order-confirmation"]);
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let cart = Cart::open(Arc::new(MemoryStorage::new()));
        let orders = OrderBook::open(Arc::new(MemoryStorage::new()), Vec::new());
        let recorder = RecordingNotifier::new();

        let err = CheckoutService::new(&cart, &orders, &recorder)
            .place_order(details(), Price::from_cents(5_000))
            .unwrap_err();

        assert_eq!(err, CheckoutError::EmptyCart);
        assert!(orders.is_empty());
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_order_details_survive_cart_clearing() {
        let cart = Cart::open(Arc::new(MemoryStorage::new()));
        let orders = OrderBook::open(Arc::new(MemoryStorage::new()), Vec::new());
        let recorder = RecordingNotifier::new();
        cart.add(line("PRDav01", 10_000)).unwrap();

        let placed = CheckoutService::new(&cart, &orders, &recorder)
            .place_order(details(), Price::ZERO)
            .unwrap();

        let on_book = orders.find(&placed.order.id).unwrap();
        let snapshot = on_book.details.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].price, Price::from_cents(10_000));
    }
}
