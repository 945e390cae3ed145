//! Store — in-memory catalog of [`Software`] records.
//!
//! The store is the single source of truth. Readers take copy-on-write
//! snapshots ([`Snapshot`]); writers swap in a new vector when a snapshot is
//! still held elsewhere, so a search in flight never sees a partial write.

use crate::types::{NewSoftware, Software, SoftwareId, SoftwareUpdate};
use crate::validate::{validate_new, validate_update, ValidationError};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

/// A consistent, immutable view of the catalog at one point in time.
pub type Snapshot = Arc<Vec<Software>>;

/// Read-side contract the search engine depends on.
pub trait CatalogStore: Send + Sync {
    /// Every currently visible record, in store order.
    fn all(&self) -> Snapshot;

    fn by_id(&self, id: SoftwareId) -> Option<Software>;
}

impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    fn all(&self) -> Snapshot {
        (**self).all()
    }

    fn by_id(&self, id: SoftwareId) -> Option<Software> {
        (**self).by_id(id)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Inner {
    records: Snapshot,
    next_id: SoftwareId,
}

/// Thread-safe, in-memory [`CatalogStore`] with record CRUD.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { inner: RwLock::new(Inner { records: Arc::default(), next_id: 1 }) }
    }

    /// Build a store from seed input. Fails on the first invalid record.
    pub fn seeded(seed: Vec<NewSoftware>) -> Result<Self, ValidationError> {
        let store = Self::new();
        store.seed(seed)?;
        Ok(store)
    }

    /// Insert every record in `seed`, validating all of them first so a bad
    /// seed leaves the store untouched.
    pub fn seed(&self, seed: Vec<NewSoftware>) -> Result<usize, ValidationError> {
        seed.iter().try_for_each(validate_new)?;

        let now = Utc::now();
        let mut inner = self.inner.write();
        let count = seed.len();
        let mut next_id = inner.next_id;
        let records = Arc::make_mut(&mut inner.records);
        for input in seed {
            records.push(Software::from_new(next_id, input, now));
            next_id += 1;
        }
        inner.next_id = next_id;

        tracing::info!(count, total = inner.records.len(), "catalog seeded");
        Ok(count)
    }

    pub fn create(&self, input: NewSoftware) -> Result<Software, ValidationError> {
        validate_new(&input)?;

        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let record = Software::from_new(id, input, Utc::now());
        Arc::make_mut(&mut inner.records).push(record.clone());

        tracing::info!(id, name = %record.name, "software created");
        Ok(record)
    }

    /// Apply a partial update. `Ok(None)` when no record has `patch.id`.
    pub fn update(&self, patch: SoftwareUpdate) -> Result<Option<Software>, ValidationError> {
        validate_update(&patch)?;

        let mut inner = self.inner.write();
        let Some(pos) = inner.records.iter().position(|r| r.id == patch.id) else {
            tracing::debug!(id = patch.id, "update: no such software");
            return Ok(None);
        };
        let record = &mut Arc::make_mut(&mut inner.records)[pos];
        record.apply(patch, Utc::now());

        tracing::info!(id = record.id, name = %record.name, "software updated");
        Ok(Some(record.clone()))
    }

    /// Remove a record. Returns whether anything was deleted.
    pub fn delete(&self, id: SoftwareId) -> bool {
        let mut inner = self.inner.write();
        let Some(pos) = inner.records.iter().position(|r| r.id == id) else {
            return false;
        };
        let removed = Arc::make_mut(&mut inner.records).remove(pos);
        tracing::info!(id, name = %removed.name, "software deleted");
        true
    }

    /// All records ordered by name, ties by id.
    pub fn list(&self) -> Vec<Software> {
        let snapshot = self.all();
        let mut refs: Vec<&Software> = snapshot.iter().collect();
        crate::search::sort(&mut refs, crate::normalizer::SortOrder::Name);
        refs.into_iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CatalogStore for MemoryStore {
    fn all(&self) -> Snapshot {
        Arc::clone(&self.inner.read().records)
    }

    fn by_id(&self, id: SoftwareId) -> Option<Software> {
        self.inner.read().records.iter().find(|r| r.id == id).cloned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
