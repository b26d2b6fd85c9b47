//! Cart line-item domain types.

use serde::{Deserialize, Serialize};

use lumina_core::{Price, ProductId};

use crate::collection::Record;

/// Composite identity of a cart line.
///
/// Two lines for the same product are distinct the moment they differ in
/// color or lens type; product id alone is never enough.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartKey {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Chosen frame color.
    pub color: String,
    /// Chosen lens type label.
    pub lens_type: String,
}

impl CartKey {
    /// Build a key from its parts.
    #[must_use]
    pub fn new(product_id: ProductId, color: impl Into<String>, lens_type: impl Into<String>) -> Self {
        Self {
            product_id,
            color: color.into(),
            lens_type: lens_type.into(),
        }
    }
}

/// One line in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product the line refers to.
    pub product_id: ProductId,
    /// Product display name, copied at add time.
    pub name: String,
    /// Product image path, copied at add time.
    pub image: String,
    /// Unit price including the lens add-on, fixed at first add.
    pub price: Price,
    /// Chosen frame color.
    pub color: String,
    /// Chosen lens type label; encodes the add-on already baked into `price`.
    pub lens_type: String,
    /// Units of this exact configuration, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Line total: unit price scaled by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

impl Record for CartItem {
    type Key = CartKey;

    fn key(&self) -> CartKey {
        CartKey {
            product_id: self.product_id.clone(),
            color: self.color.clone(),
            lens_type: self.lens_type.clone(),
        }
    }
}
