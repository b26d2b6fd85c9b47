//! Product domain types.

use serde::{Deserialize, Serialize};

use lumina_core::{BrandId, Price, ProductCategory, ProductId};

use crate::collection::Record;

/// A frame in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base unit price, before any lens add-on.
    pub price: Price,
    /// Sunglasses or eyeglasses.
    pub category: ProductCategory,
    /// Path of the primary product image.
    pub image: String,
    /// Frame colors the product ships in.
    pub colors: Vec<String>,
    /// Average review rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Longer marketing copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Free-form filter tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Promotional label shown on the product card, e.g. `"New"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ribbon: Option<String>,
    /// Brand this frame belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<BrandId>,
}

impl Record for Product {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id.clone()
    }
}
