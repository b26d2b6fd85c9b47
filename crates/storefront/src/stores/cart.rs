//! Shopping cart.
//!
//! Lines are keyed by (product, color, lens type), so the same frame in a
//! different color or with a different lens is its own line. Unlike the
//! other collections, new lines append to the back: the cart reads top to
//! bottom in the order things were added.
//!
//! Each line's unit price is fixed when the line is first added and already
//! includes the lens add-on chosen at that moment. Later price or lens
//! changes in the catalog never reprice an existing line.

use std::sync::Arc;

use lumina_core::Price;

use crate::collection::{CollectionStore, Commit, Placement, Record, StoreError};
use crate::models::{CartItem, CartKey};
use crate::storage::{Storage, slots};

/// Cart arithmetic: `total` is always `subtotal` plus the flat configured
/// shipping fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

/// The cart collection and its quantity rules.
pub struct Cart {
    store: CollectionStore<CartItem>,
}

impl Cart {
    /// Open the cart over the `cart` slot. A missing slot is simply an
    /// empty cart, never an error.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::CART, Placement::Back, Vec::new()),
        }
    }

    /// Every line, in the order they were first added.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.store.list()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.store.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.store.list().iter().map(|line| line.quantity).sum()
    }

    /// Look up one line by its composite key.
    #[must_use]
    pub fn find(&self, key: &CartKey) -> Option<CartItem> {
        self.store.find(key)
    }

    /// Add one unit of an item.
    ///
    /// A line with the same (product, color, lens type) key absorbs the add
    /// as a quantity bump and keeps its original unit price. Otherwise the
    /// item starts a new line at quantity 1.
    pub fn add(&self, item: CartItem) -> Result<Commit<CartItem>, StoreError> {
        let key = item.key();
        match self.store.update(&key, |line| line.quantity += 1) {
            Ok(commit) => Ok(commit),
            Err(StoreError::NotFound) => self.store.insert(CartItem { quantity: 1, ..item }),
            Err(other) => Err(other),
        }
    }

    /// Set a line's quantity exactly.
    ///
    /// Anything at or below zero means "take it out of the cart", which
    /// succeeds even if the line is already gone. A positive quantity on an
    /// unknown line is an error.
    pub fn set_quantity(
        &self,
        key: &CartKey,
        quantity: i32,
    ) -> Result<Commit<Option<CartItem>>, StoreError> {
        if quantity <= 0 {
            let removal = self.store.remove(key);
            return Ok(Commit {
                value: None,
                persisted: removal.persisted,
            });
        }

        let quantity = u32::try_from(quantity).unwrap_or(1);
        let commit = self.store.update(key, |line| line.quantity = quantity)?;
        Ok(Commit {
            value: Some(commit.value),
            persisted: commit.persisted,
        })
    }

    /// Interpret a raw quantity field from a form.
    ///
    /// Anything that fails to parse counts as 1, never 0: a garbled input
    /// must not silently empty a line.
    #[must_use]
    pub fn parse_quantity(raw: &str) -> i32 {
        raw.trim().parse().unwrap_or(1)
    }

    /// Remove a line. Removing an unknown key is a no-op.
    pub fn remove(&self, key: &CartKey) -> Commit<usize> {
        self.store.remove(key)
    }

    /// Empty the cart.
    pub fn clear(&self) -> Commit<usize> {
        self.store.replace_all(Vec::new())
    }

    /// Price the cart against a flat shipping fee.
    #[must_use]
    pub fn totals(&self, shipping_fee: Price) -> CartTotals {
        let subtotal: Price = self.store.list().iter().map(CartItem::line_total).sum();
        CartTotals {
            subtotal,
            shipping: shipping_fee,
            total: subtotal + shipping_fee,
        }
    }

    /// Observe every change to the cart.
    pub fn subscribe(&self, subscriber: impl Fn(&[CartItem]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}
