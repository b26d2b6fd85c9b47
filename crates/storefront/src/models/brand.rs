//! Brand domain types.

use serde::{Deserialize, Serialize};

use lumina_core::BrandId;

use crate::collection::Record;

/// An eyewear brand carried by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Slug id derived from the name; see [`BrandId::from_name`].
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// Path of the brand logo image.
    pub logo: String,
}

impl Record for Brand {
    type Key = BrandId;

    fn key(&self) -> BrandId {
        self.id.clone()
    }
}
