use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use ogm_types::{CanonicalKey, RecordKey, StoredRecord};

use crate::error::StoreResult;
use crate::policy::FetchPolicy;
use crate::traits::RecordStore;

/// In-memory, HashMap-based record store.
///
/// Intended for tests and embedding. Records are keyed by canonical key and
/// held behind a `RwLock` for safe concurrent access; values are cloned on
/// read. Fetch policy knobs are accepted and ignored.
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<CanonicalKey, StoredRecord>>,
}

impl InMemoryRecordStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace a record.
    pub fn insert(&self, key: &RecordKey, record: StoredRecord) {
        let canonical = key.canonical();
        debug!(key = %canonical.short_hex(), bins = record.len(), "stored record");
        self.records
            .write()
            .expect("lock poisoned")
            .insert(canonical, record);
    }

    /// Remove a record. Returns `true` if it existed.
    pub fn remove(&self, key: &RecordKey) -> bool {
        self.records
            .write()
            .expect("lock poisoned")
            .remove(&key.canonical())
            .is_some()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch(&self, key: &RecordKey) -> StoreResult<Option<StoredRecord>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(&key.canonical()).cloned())
    }

    fn fetch_batch(
        &self,
        keys: &[RecordKey],
        _policy: &FetchPolicy,
    ) -> StoreResult<Vec<Option<StoredRecord>>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(keys
            .iter()
            .map(|key| map.get(&key.canonical()).cloned())
            .collect())
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &self.len())
            .finish()
    }
}
