use ogm_types::{RawKey, RecordKey, StoredRecord, TypeName};

use crate::deferred::SharedInstance;
use crate::error::ResolveResult;
use crate::session::ResolutionSession;

/// Construction boundary the resolution driver calls back through.
///
/// Implementations translate a deferred reference's target type into a
/// store-level key and build typed instances from fetched records. The
/// registry crate provides the production implementation; tests implement it
/// directly.
pub trait Hydrator: Send + Sync {
    /// Derive the store-level key for a reference target.
    ///
    /// Must be pure and deterministic: equal `(target, key)` pairs map to
    /// equal record keys for the lifetime of a session, which is what makes
    /// cache lookups and fetch deduplication sound.
    fn record_key(&self, target: TypeName, key: &RawKey) -> ResolveResult<RecordKey>;

    /// Construct a typed instance from a raw record.
    ///
    /// May call back into [`ResolutionSession::enqueue`] to register nested
    /// pending references against the same session.
    fn construct(
        &self,
        target: TypeName,
        key: &RecordKey,
        record: &StoredRecord,
        session: &mut ResolutionSession,
    ) -> ResolveResult<SharedInstance>;
}
