//! Brand registry.
//!
//! Brand ids are slugs derived from the display name, so two names that
//! normalize to the same slug are the same brand as far as the registry is
//! concerned.

use std::sync::Arc;

use lumina_core::BrandId;
use thiserror::Error;

use crate::collection::{CollectionStore, Commit, Placement};
use crate::models::Brand;
use crate::storage::{Storage, slots};

/// Errors from registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrandError {
    /// A brand whose name slugs to the same id already exists.
    #[error("a brand named \"{0}\" is already registered")]
    DuplicateName(String),
}

/// The brand collection with slug-derived identity.
pub struct BrandRegistry {
    store: CollectionStore<Brand>,
}

impl BrandRegistry {
    /// Open the registry over the `brands` slot, seeding it when the slot is
    /// absent or unreadable.
    #[must_use]
    pub fn open(storage: Arc<dyn Storage>, seed: Vec<Brand>) -> Self {
        Self {
            store: CollectionStore::open(storage, slots::BRANDS, Placement::Front, seed),
        }
    }

    /// Every brand, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<Brand> {
        self.store.list()
    }

    /// Number of registered brands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up a brand by slug id.
    #[must_use]
    pub fn find(&self, id: &BrandId) -> Option<Brand> {
        self.store.find(id)
    }

    /// Register a brand under the slug of its name.
    ///
    /// `"Ray Ban"` and `"ray  ban"` slug identically and therefore collide.
    pub fn create(&self, name: &str, logo: impl Into<String>) -> Result<Commit<Brand>, BrandError> {
        let brand = Brand {
            id: BrandId::from_name(name),
            name: name.to_owned(),
            logo: logo.into(),
        };
        self.store
            .insert(brand)
            .map_err(|_| BrandError::DuplicateName(name.to_owned()))
    }

    /// Remove a brand. Removing an unknown slug is a no-op.
    pub fn remove(&self, id: &BrandId) -> Commit<usize> {
        self.store.remove(id)
    }

    /// Observe every change to the registry.
    pub fn subscribe(&self, subscriber: impl Fn(&[Brand]) + Send + 'static) {
        self.store.subscribe(subscriber);
    }
}
