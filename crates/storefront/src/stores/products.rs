//! Product catalog.
//!
//! Backed by the `products` slot. Newly created products are placed at the
//! front of the collection so the freshest frames lead every listing.

use std::sync::Arc;

use lumina_core::{BrandId, Price, ProductCategory, ProductId};

use crate::collection::{CollectionStore, Commit, Placement, StoreError};
use crate::models::Product;
use crate::storage::{Storage, slots};

/// Fields an operator supplies when adding a frame to the catalog.
///
/// The id, rating, and review count are assigned by the catalog: fresh
/// products start unrated.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub category: ProductCategory,
    pub image: String,
    pub colors: Vec<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub ribbon: Option<String>,
    pub brand_id: Option<BrandId>,
}

/// The product collection and its catalog rules.
pub struct ProductCatalog {
    store: CollectionStore<Product>,
}

impl ProductCatalog {
    /// Open the catalog over the `products` slot, seeding it when the slot
    /// is absent or unreadable.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>, seed: Vec<Product>) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::PRODUCTS, Placement::Front, seed),
        }
    }

    /// Every product, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.store.list()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a single product.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<Product> {
        self.store.find(id)
    }

    /// Add a frame to the catalog with a freshly assigned id.
    pub fn create(&self, new: NewProduct) -> Result<Commit<Product>, StoreError> {
        let id = super::unique_id(&self.store, ProductId::generate);
        let product = Product {
            id,
            name: new.name,
            price: new.price,
            category: new.category,
            image: new.image,
            colors: new.colors,
            rating: 0.0,
            reviews: 0,
            description: new.description,
            tags: new.tags,
            ribbon: new.ribbon,
            brand_id: new.brand_id,
        };
        self.store.insert(product)
    }

    /// Edit a product in place; its position in the listing is preserved.
    pub fn update(
        &self,
        id: &ProductId,
        apply: impl FnOnce(&mut Product),
    ) -> Result<Commit<Product>, StoreError> {
        self.store.update(id, apply)
    }

    /// Remove a product. Removing an unknown id is a no-op.
    pub fn remove(&self, id: &ProductId) -> Commit<usize> {
        self.store.remove(id)
    }

    /// Products in one category, listing order preserved.
    #[must_use]
    pub fn by_category(&self, category: ProductCategory) -> Vec<Product> {
        let mut products = self.store.list();
        products.retain(|product| product.category == category);
        products
    }

    /// Products carrying a given brand.
    #[must_use]
    pub fn by_brand(&self, brand: &BrandId) -> Vec<Product> {
        let mut products = self.store.list();
        products.retain(|product| product.brand_id.as_ref() == Some(brand));
        products
    }

    /// Products with a ribbon ("New", "Sale", ...), the homepage highlights.
    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        let mut products = self.store.list();
        products.retain(|product| product.ribbon.is_some());
        products
    }

    /// Observe every change to the catalog.
    pub fn subscribe(&self, subscriber: impl Fn(&[Product]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn catalog() -> ProductCatalog {
        ProductCatalog::open(Arc::new(MemoryStorage::new()), Vec::new())
    }

    fn frame(name: &str, category: ProductCategory) -> NewProduct {
        NewProduct {
            name: name.to_owned(),
            price: Price::from_cents(9_900),
            category,
            image: format!("/images/{name}.webp"),
            colors: vec!["Black".to_owned()],
            description: None,
            tags: None,
            ribbon: None,
            brand_id: None,
        }
    }

    #[test]
    fn test_create_assigns_prefixed_id_and_leads_listing() {
        let catalog = catalog();
        let first = catalog
            .create(frame("aviator", ProductCategory::Sunglasses))
            .unwrap();
        let second = catalog
            .create(frame("wayfarer", ProductCategory::Sunglasses))
            .unwrap();

        assert!(first.value.id.as_str().starts_with("PRD"));
        assert!(first.value.rating.abs() < f32::EPSILON);
        assert_eq!(first.value.reviews, 0);

        let listing = catalog.list();
        assert_eq!(listing[0].id, second.value.id);
        assert_eq!(listing[1].id, first.value.id);
    }

    #[test]
    fn test_by_category_filters_and_keeps_order() {
        let catalog = catalog();
        catalog
            .create(frame("aviator", ProductCategory::Sunglasses))
            .unwrap();
        catalog
            .create(frame("round-reader", ProductCategory::Eyeglasses))
            .unwrap();
        catalog
            .create(frame("clubmaster", ProductCategory::Sunglasses))
            .unwrap();

        let sunnies = catalog.by_category(ProductCategory::Sunglasses);
        assert_eq!(sunnies.len(), 2);
        assert_eq!(sunnies[0].name, "clubmaster");
        assert_eq!(sunnies[1].name, "aviator");
        assert_eq!(catalog.by_category(ProductCategory::Eyeglasses).len(), 1);
    }

    #[test]
    fn test_featured_requires_ribbon() {
        let catalog = catalog();
        let mut highlighted = frame("aviator", ProductCategory::Sunglasses);
        highlighted.ribbon = Some("New".to_owned());
        catalog.create(highlighted).unwrap();
        catalog
            .create(frame("wayfarer", ProductCategory::Sunglasses))
            .unwrap();

        let featured = catalog.featured();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "aviator");
    }

    #[test]
    fn test_by_brand_matches_brand_id() {
        let catalog = catalog();
        let mut branded = frame("aviator", ProductCategory::Sunglasses);
        branded.brand_id = Some(BrandId::from_name("Solace"));
        catalog.create(branded).unwrap();
        catalog
            .create(frame("wayfarer", ProductCategory::Sunglasses))
            .unwrap();

        let matches = catalog.by_brand(&BrandId::from_name("Solace"));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "aviator");
    }

    #[test]
    fn test_update_edits_price_in_place() {
        let catalog = catalog();
        catalog
            .create(frame("aviator", ProductCategory::Sunglasses))
            .unwrap();
        let commit = catalog
            .create(frame("wayfarer", ProductCategory::Sunglasses))
            .unwrap();
        let id = commit.value.id.clone();

        let updated = catalog
            .update(&id, |product| product.price = Price::from_cents(12_900))
            .unwrap();

        assert_eq!(updated.value.price, Price::from_cents(12_900));
        // still first in the listing
        assert_eq!(catalog.list()[0].id, id);
    }
}
