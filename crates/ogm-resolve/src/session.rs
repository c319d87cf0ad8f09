use std::fmt;

use ogm_types::{RawKey, RecordKey, TypeName};

use crate::cache::ResolutionCache;
use crate::deferred::{DeferredQueue, DeferredRef, Setter};
use crate::link::Link;

/// The ambient state of one top-level resolve call.
///
/// A session owns the deferred reference queue and the resolution cache,
/// plus a diagnostics-only marker naming the record currently being
/// hydrated. It is created at the start of the outermost resolve call,
/// passed `&mut` into every nested hydration, and discarded when the queue
/// drains empty.
///
/// Sessions are never shared: concurrent top-level calls each own their own
/// session, so no locking discipline is needed around the queue or cache.
#[derive(Default)]
pub struct ResolutionSession {
    pub(crate) queue: DeferredQueue,
    pub(crate) cache: ResolutionCache,
    pub(crate) current_key: Option<RecordKey>,
}

impl ResolutionSession {
    /// Create a fresh session with an empty queue and cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pending reference against this session.
    ///
    /// This is the callback surface hydration code uses when a
    /// reference-valued field cannot be resolved inline. The reference is
    /// picked up by the driver's next drain.
    pub fn enqueue(&mut self, target: TypeName, key: impl Into<RawKey>, setter: Setter) {
        self.queue.enqueue(DeferredRef {
            target,
            key: key.into(),
            setter,
        });
    }

    /// Register a pending reference that fills a [`Link`] slot.
    pub fn defer<T: Send + Sync + 'static>(
        &mut self,
        target: TypeName,
        key: impl Into<RawKey>,
        link: &Link<T>,
    ) {
        self.enqueue(target, key, link.setter(target));
    }

    /// The record currently being hydrated, if any. Diagnostics only.
    pub fn current_key(&self) -> Option<&RecordKey> {
        self.current_key.as_ref()
    }

    /// Number of references waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Read access to the session cache.
    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}

impl fmt::Debug for ResolutionSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionSession")
            .field("pending", &self.queue.len())
            .field("cached", &self.cache.len())
            .field("current_key", &self.current_key)
            .finish()
    }
}
