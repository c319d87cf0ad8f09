use std::collections::HashMap;
use std::fmt;

use ogm_types::{CanonicalKey, RecordKey, TypeName};

use crate::deferred::Setter;

/// One waiting consumer of a fetched record: its declared target type and
/// the setter to apply.
pub struct Waiter {
    pub target: TypeName,
    pub setter: Setter,
}

/// The cache-miss subset of one resolution pass, grouped for a single fetch.
///
/// Keys are kept distinct in discovery order; every additional reference to
/// an already-grouped key joins that key's waiter list instead of growing
/// the fetch. Positions in `keys` align 1:1 with the per-key waiter lists,
/// mirroring the store boundary's ordered-result contract.
#[derive(Default)]
pub struct BatchGroup {
    keys: Vec<RecordKey>,
    canonicals: Vec<CanonicalKey>,
    waiters: Vec<Vec<Waiter>>,
    index: HashMap<CanonicalKey, usize>,
}

impl BatchGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cache-miss reference to the group.
    pub fn push(
        &mut self,
        canonical: CanonicalKey,
        key: RecordKey,
        target: TypeName,
        setter: Setter,
    ) {
        let waiter = Waiter { target, setter };
        match self.index.get(&canonical) {
            Some(&position) => self.waiters[position].push(waiter),
            None => {
                self.index.insert(canonical, self.keys.len());
                self.keys.push(key);
                self.canonicals.push(canonical);
                self.waiters.push(vec![waiter]);
            }
        }
    }

    /// Returns `true` if nothing was grouped.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of distinct keys to fetch.
    pub fn distinct(&self) -> usize {
        self.keys.len()
    }

    /// Total waiters across all keys.
    pub fn waiting(&self) -> usize {
        self.waiters.iter().map(Vec::len).sum()
    }

    /// Decompose into aligned `(keys, canonicals, waiters)` vectors.
    pub fn into_parts(self) -> (Vec<RecordKey>, Vec<CanonicalKey>, Vec<Vec<Waiter>>) {
        (self.keys, self.canonicals, self.waiters)
    }
}

impl fmt::Debug for BatchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchGroup")
            .field("distinct", &self.keys.len())
            .field("waiting", &self.waiting())
            .finish()
    }
}
