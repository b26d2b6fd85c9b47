//! Generic persisted collection store.
//!
//! Every collection in the shop (cart lines, orders, appointments, products,
//! users, brands) follows the same pattern: an insertion-ordered in-memory
//! `Vec` of records mirrored to one named durable slot. A mutation applies in
//! memory first, then flushes the whole collection as a JSON snapshot, then
//! hands the new collection to subscribers.
//!
//! Persistence is best-effort: a failed flush is logged and surfaced through
//! [`Commit::persisted`], never rolled back. Memory stays the source of truth
//! for the rest of the session. The slot is read exactly once, at [`open`],
//! after which the store never consults it again.
//!
//! [`open`]: CollectionStore::open

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::Storage;

/// A record managed by a [`CollectionStore`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// Identity used to locate the record within its collection.
    type Key: PartialEq;

    /// Extract the record's key.
    fn key(&self) -> Self::Key;
}

/// Errors from collection store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested key exists.
    #[error("record not found")]
    NotFound,

    /// A record with the same key already exists.
    #[error("a record with this key already exists")]
    Duplicate,
}

/// Where new records land in the collection's insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Most-recent-first. Orders, appointments, products, users, brands.
    #[default]
    Front,
    /// Oldest-first, so the cart reads in the order items were added.
    Back,
}

/// Result of a mutating store operation.
///
/// `persisted` reports whether the snapshot reached durable storage. A
/// `false` never undoes the in-memory mutation; the store has already logged
/// the failure and the caller may choose to warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Commit<T> {
    /// The affected value: the new or updated record, or a removal count.
    pub value: T,
    /// Whether the snapshot reached durable storage.
    pub persisted: bool,
}

type Subscriber<T> = Box<dyn Fn(&[T]) + Send>;

/// One homogeneous collection of records, durable and observable.
pub struct CollectionStore<T: Record> {
    slot: &'static str,
    placement: Placement,
    storage: Arc<dyn Storage>,
    records: Mutex<Vec<T>>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

impl<T: Record> CollectionStore<T> {
    /// Open the store against its durable slot.
    ///
    /// Reads the slot once. An absent or unparsable snapshot falls back to
    /// `seed`, which is then written back so the next session starts from
    /// the same state. A read failure is logged and the seed is used without
    /// a write-back attempt.
    pub fn open(
        storage: Arc<dyn Storage>,
        slot: &'static str,
        placement: Placement,
        seed: Vec<T>,
    ) -> Self {
        let records = match storage.read(slot) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<T>>(&payload) {
                Ok(records) => records,
                Err(error) => {
                    tracing::warn!(slot, %error, "unparsable snapshot, falling back to seed");
                    write_snapshot(storage.as_ref(), slot, &seed);
                    seed
                }
            },
            Ok(None) => {
                write_snapshot(storage.as_ref(), slot, &seed);
                seed
            }
            Err(error) => {
                tracing::error!(slot, %error, "slot read failed, starting from seed");
                seed
            }
        };

        Self {
            slot,
            placement,
            storage,
            records: Mutex::new(records),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// The current collection, insertion-ordered.
    #[must_use]
    pub fn list(&self) -> Vec<T> {
        self.lock_records().clone()
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_records().len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    /// Linear scan for the first record whose key equals `key`.
    #[must_use]
    pub fn find(&self, key: &T::Key) -> Option<T> {
        self.lock_records()
            .iter()
            .find(|record| &record.key() == key)
            .cloned()
    }

    /// Whether any record carries `key`.
    #[must_use]
    pub fn contains(&self, key: &T::Key) -> bool {
        self.lock_records()
            .iter()
            .any(|record| &record.key() == key)
    }

    /// Insert a record at the store's placement, flush, and notify.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] if a record with the same key is
    /// already present; keys are unique within a collection at all times.
    pub fn insert(&self, record: T) -> Result<Commit<T>, StoreError> {
        let mut records = self.lock_records();
        if records.iter().any(|r| r.key() == record.key()) {
            return Err(StoreError::Duplicate);
        }

        match self.placement {
            Placement::Front => records.insert(0, record.clone()),
            Placement::Back => records.push(record.clone()),
        }

        let persisted = write_snapshot(self.storage.as_ref(), self.slot, &records);
        let snapshot = records.clone();
        drop(records);
        self.notify(&snapshot);

        Ok(Commit {
            value: record,
            persisted,
        })
    }

    /// Mutate the record with key `key` in place, flush, and notify.
    ///
    /// The record keeps its position in the collection. The mutator must
    /// leave the record's key unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record carries `key`.
    pub fn update(
        &self,
        key: &T::Key,
        mutate: impl FnOnce(&mut T),
    ) -> Result<Commit<T>, StoreError> {
        let mut records = self.lock_records();
        let Some(record) = records.iter_mut().find(|r| &r.key() == key) else {
            return Err(StoreError::NotFound);
        };

        mutate(record);
        let updated = record.clone();

        let persisted = write_snapshot(self.storage.as_ref(), self.slot, &records);
        let snapshot = records.clone();
        drop(records);
        self.notify(&snapshot);

        Ok(Commit {
            value: updated,
            persisted,
        })
    }

    /// Remove every record with key `key`, flush, and notify.
    ///
    /// Removal is idempotent: a key that matches nothing yields a commit
    /// with a count of zero, not an error.
    pub fn remove(&self, key: &T::Key) -> Commit<usize> {
        let mut records = self.lock_records();
        let before = records.len();
        records.retain(|record| &record.key() != key);
        let removed = before - records.len();

        let persisted = write_snapshot(self.storage.as_ref(), self.slot, &records);
        let snapshot = records.clone();
        drop(records);
        self.notify(&snapshot);

        Commit {
            value: removed,
            persisted,
        }
    }

    /// Replace the whole collection, flush, and notify.
    ///
    /// Used for clearing the cart and for reseeding from the CLI. Returns
    /// the new record count.
    pub fn replace_all(&self, new_records: Vec<T>) -> Commit<usize> {
        let mut records = self.lock_records();
        *records = new_records;
        let count = records.len();

        let persisted = write_snapshot(self.storage.as_ref(), self.slot, &records);
        let snapshot = records.clone();
        drop(records);
        self.notify(&snapshot);

        Commit {
            value: count,
            persisted,
        }
    }

    /// Register a subscriber invoked with the full collection after every
    /// mutation.
    pub fn subscribe(&self, subscriber: impl Fn(&[T]) + Send + 'static) {
        self.lock_subscribers().push(Box::new(subscriber));
    }

    fn notify(&self, snapshot: &[T]) {
        for subscriber in self.lock_subscribers().iter() {
            subscriber(snapshot);
        }
    }

    fn lock_records(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<Subscriber<T>>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Serialize the collection and overwrite its slot.
///
/// Returns whether the snapshot landed. Failures are logged here so every
/// caller inherits the same best-effort policy.
fn write_snapshot<T: Serialize>(storage: &dyn Storage, slot: &str, records: &[T]) -> bool {
    let payload = match serde_json::to_string(records) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!(slot, %error, "snapshot serialization failed");
            return false;
        }
    };

    match storage.write(slot, &payload) {
        Ok(()) => true,
        Err(error) => {
            tracing::error!(slot, %error, "snapshot write failed, keeping in-memory state");
            false
        }
    }
}
