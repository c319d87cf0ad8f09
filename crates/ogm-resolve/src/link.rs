use std::fmt;
use std::sync::{Arc, OnceLock};

use ogm_types::TypeName;

use crate::deferred::Setter;
use crate::error::ResolveError;

/// A write-once reference slot embedded in an entity.
///
/// A `Link<T>` starts unresolved. During hydration the entity registers a
/// deferred reference against the session; when the driver resolves it, the
/// link's setter fills the slot with either the shared target instance or
/// `None` for a confirmed-missing record. Clones share the same slot, so the
/// value set through a setter is visible through every clone.
pub struct Link<T: ?Sized> {
    slot: Arc<OnceLock<Option<Arc<T>>>>,
}

impl<T: ?Sized> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T: ?Sized> Default for Link<T> {
    fn default() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }
}

impl<T: Send + Sync + 'static> Link<T> {
    /// Create an unresolved link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once the slot has been filled (present or absent).
    pub fn is_resolved(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The resolved target, if the link resolved to a present record.
    ///
    /// `None` means either "not resolved yet" or "resolved absent"; use
    /// [`state`] to distinguish.
    ///
    /// [`state`]: Link::state
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.get().and_then(|value| value.clone())
    }

    /// Full slot state: outer `None` = unresolved, inner `None` = resolved
    /// to an absent record.
    pub fn state(&self) -> Option<Option<Arc<T>>> {
        self.slot.get().cloned()
    }

    /// Build the single-use setter that fills this slot.
    ///
    /// The setter downcasts the shared instance to `T` and writes it once;
    /// a second application or a wrong-typed instance is an error.
    pub fn setter(&self, target: TypeName) -> Setter {
        let slot = Arc::clone(&self.slot);
        Box::new(move |value| {
            let typed = match value {
                None => None,
                Some(instance) => Some(
                    instance
                        .downcast::<T>()
                        .map_err(|_| ResolveError::InstanceType(target))?,
                ),
            };
            slot.set(typed)
                .map_err(|_| ResolveError::SlotOccupied(target))
        })
    }
}

impl<T: ?Sized> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            None => write!(f, "Link(unresolved)"),
            Some(None) => write!(f, "Link(absent)"),
            Some(Some(_)) => write!(f, "Link(resolved)"),
        }
    }
}
