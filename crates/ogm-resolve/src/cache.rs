use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ogm_types::CanonicalKey;

use crate::deferred::SharedInstance;

/// Outcome of one store lookup, memoized for the rest of the session.
///
/// `Absent` records that a key was looked up and confirmed missing, so later
/// references to it are served from cache instead of refetched. This is
/// distinct from a key that was never looked up, which has no entry at all.
#[derive(Clone)]
pub enum CachedValue {
    /// The record existed and hydrated to this shared instance.
    Resolved(SharedInstance),
    /// The record was confirmed missing from the store.
    Absent,
}

impl CachedValue {
    /// The shared instance to apply to a waiting setter: `None` for absent.
    pub fn instance(&self) -> Option<SharedInstance> {
        match self {
            Self::Resolved(instance) => Some(Arc::clone(instance)),
            Self::Absent => None,
        }
    }
}

impl fmt::Debug for CachedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(_) => write!(f, "Resolved"),
            Self::Absent => write!(f, "Absent"),
        }
    }
}

/// Session-scoped mapping from canonical key to lookup outcome.
///
/// Created fresh per resolution session and discarded with it; never shared
/// across sessions. A key is inserted at most once per session -- the first
/// insert wins and later inserts are ignored.
#[derive(Default)]
pub struct ResolutionCache {
    entries: HashMap<CanonicalKey, CachedValue>,
}

impl ResolutionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously recorded outcome.
    pub fn get(&self, key: &CanonicalKey) -> Option<&CachedValue> {
        self.entries.get(key)
    }

    /// Record a lookup outcome. Returns `false` if the key was already
    /// recorded, in which case the existing entry is kept.
    pub fn put(&mut self, key: CanonicalKey, value: CachedValue) -> bool {
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}
