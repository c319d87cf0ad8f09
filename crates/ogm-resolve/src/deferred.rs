use std::any::Any;
use std::fmt;
use std::sync::Arc;

use ogm_types::{RawKey, TypeName};

use crate::error::ResolveResult;

/// A hydrated instance shared through the resolution cache.
///
/// Instances are type-erased so heterogeneous entity types can flow through
/// one queue and cache; reference slots downcast on application.
pub type SharedInstance = Arc<dyn Any + Send + Sync>;

/// Single-use callback applying a resolved value (or absent) to exactly one
/// field of exactly one owner object.
pub type Setter = Box<dyn FnOnce(Option<SharedInstance>) -> ResolveResult<()> + Send>;

/// A pending reference discovered during hydration: the target's type, its
/// raw key, and the setter that will receive the resolved value.
pub struct DeferredRef {
    /// Registry name of the referenced entity type.
    pub target: TypeName,
    /// Raw key or digest of the referenced record.
    pub key: RawKey,
    /// Consumed exactly once when the reference resolves.
    pub setter: Setter,
}

impl fmt::Debug for DeferredRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredRef")
            .field("target", &self.target)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// FIFO collection of pending references for one resolution session.
///
/// Enqueues that happen while a drained batch is being processed land in the
/// next drain -- this is what makes expansion breadth-first, level by level.
/// No deduplication happens here; the driver deduplicates against the cache.
#[derive(Default)]
pub struct DeferredQueue {
    items: Vec<DeferredRef>,
}

impl DeferredQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pending reference.
    pub fn enqueue(&mut self, item: DeferredRef) {
        self.items.push(item);
    }

    /// Atomically remove and return everything queued, in enqueue order.
    pub fn drain_all(&mut self) -> Vec<DeferredRef> {
        std::mem::take(&mut self.items)
    }

    /// Number of pending references.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.items.len())
            .finish()
    }
}
