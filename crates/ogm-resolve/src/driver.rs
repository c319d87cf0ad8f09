use std::sync::Arc;

use tracing::{debug, trace};

use ogm_store::{FetchPolicy, RecordStore};
use ogm_types::{RecordKey, StoredRecord, TypeName};

use crate::batch::BatchGroup;
use crate::cache::CachedValue;
use crate::deferred::SharedInstance;
use crate::error::{ResolveError, ResolveResult};
use crate::hydrator::Hydrator;
use crate::session::ResolutionSession;

/// The breadth-first resolution driver.
///
/// A `Resolver` ties the store boundary and the construction boundary
/// together and runs the drain / split / fetch / apply loop over one
/// [`ResolutionSession`]. Each pass drains everything queued so far, serves
/// repeat keys from the session cache, fetches the remaining distinct keys
/// in one batch call, and hydrates the results -- which may queue the next
/// level of references. A graph of depth D therefore costs D fetch calls,
/// independent of branching factor.
pub struct Resolver {
    store: Arc<dyn RecordStore>,
    hydrator: Arc<dyn Hydrator>,
    policy: FetchPolicy,
}

impl Resolver {
    /// Create a resolver with the default fetch policy.
    pub fn new(store: Arc<dyn RecordStore>, hydrator: Arc<dyn Hydrator>) -> Self {
        Self {
            store,
            hydrator,
            policy: FetchPolicy::default(),
        }
    }

    /// Builder-style fetch policy override.
    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy handed to every batch fetch.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Hydrate one fetched record and memoize it in the session cache.
    ///
    /// The session's current-key marker names this record for the duration
    /// of construction and is cleared unconditionally, even when
    /// construction fails. Construction errors are attributed to the record
    /// being built.
    pub fn hydrate_record(
        &self,
        session: &mut ResolutionSession,
        target: TypeName,
        key: &RecordKey,
        record: &StoredRecord,
    ) -> ResolveResult<SharedInstance> {
        session.current_key = Some(key.clone());
        let built = self.hydrator.construct(target, key, record, session);
        session.current_key = None;

        let instance = built.map_err(|e| match e {
            wrapped @ ResolveError::Construction { .. } => wrapped,
            other => ResolveError::Construction {
                type_name: target,
                key: key.to_string(),
                source: Box::new(other),
            },
        })?;

        session
            .cache
            .put(key.canonical(), CachedValue::Resolved(Arc::clone(&instance)));
        Ok(instance)
    }

    /// Run the resolution loop until the session's queue drains empty.
    ///
    /// Returns the number of fetch passes issued. Any store or construction
    /// error aborts the session immediately: setters applied in completed
    /// passes stay applied, and the caller discards the session.
    pub fn resolve_pending(&self, session: &mut ResolutionSession) -> ResolveResult<usize> {
        let mut passes = 0usize;

        loop {
            let pending = session.queue.drain_all();
            if pending.is_empty() {
                break;
            }
            let drained = pending.len();

            // Split: serve repeats from the cache, group the rest.
            let mut hits = 0usize;
            let mut batch = BatchGroup::new();
            for item in pending {
                let record_key = self.hydrator.record_key(item.target, &item.key)?;
                let canonical = record_key.canonical();
                match session.cache.get(&canonical) {
                    Some(cached) => {
                        hits += 1;
                        let value = cached.instance();
                        (item.setter)(value)?;
                    }
                    None => batch.push(canonical, record_key, item.target, item.setter),
                }
            }

            if batch.is_empty() {
                // Cache hits apply without hydrating, so nothing new was
                // queued and the session is done.
                trace!(drained, hits, "pass served entirely from cache");
                break;
            }

            passes += 1;
            debug!(
                pass = passes,
                drained,
                hits,
                fetch = batch.distinct(),
                "resolution pass"
            );

            let (keys, canonicals, waiters) = batch.into_parts();
            let records = if keys.len() == 1 {
                // Single-key fast path: skip batch assembly at the boundary.
                vec![self.store.fetch(&keys[0])?]
            } else {
                let records = self.store.fetch_batch(&keys, &self.policy)?;
                if records.len() != keys.len() {
                    return Err(ResolveError::BatchMismatch {
                        expected: keys.len(),
                        actual: records.len(),
                    });
                }
                records
            };

            // Apply: positions in `records` align with `keys` and `waiters`.
            for (i, (record, key_waiters)) in records.into_iter().zip(waiters).enumerate() {
                match record {
                    None => {
                        trace!(key = %keys[i], "referenced record absent");
                        session.cache.put(canonicals[i], CachedValue::Absent);
                        for waiter in key_waiters {
                            (waiter.setter)(None)?;
                        }
                    }
                    Some(record) => {
                        let target = key_waiters[0].target;
                        let instance =
                            self.hydrate_record(session, target, &keys[i], &record)?;
                        for waiter in key_waiters {
                            (waiter.setter)(Some(Arc::clone(&instance)))?;
                        }
                    }
                }
            }
        }

        Ok(passes)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
