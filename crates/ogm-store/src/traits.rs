use ogm_types::{RecordKey, StoredRecord};

use crate::error::StoreResult;
use crate::policy::FetchPolicy;

/// Read boundary over a key-value record store.
///
/// All implementations must satisfy these invariants:
/// - An absent record is `Ok(None)`, never an error.
/// - `fetch_batch` results have the same length and order as the input:
///   `result[i]` is the record for `keys[i]`. No silent reordering.
/// - A failed batch surfaces as a single `Err` for the whole call.
/// - Policy knobs affect performance only, never which records are returned.
pub trait RecordStore: Send + Sync {
    /// Read a single record by its store-level key.
    fn fetch(&self, key: &RecordKey) -> StoreResult<Option<StoredRecord>>;

    /// Read multiple records in one ordered round trip.
    ///
    /// Default implementation calls `fetch()` per key. Backends with a real
    /// batch read override this for fewer round trips.
    fn fetch_batch(
        &self,
        keys: &[RecordKey],
        _policy: &FetchPolicy,
    ) -> StoreResult<Vec<Option<StoredRecord>>> {
        keys.iter().map(|key| self.fetch(key)).collect()
    }
}
