use std::fmt;
use std::sync::Arc;

use ogm_resolve::{ResolutionSession, ResolveResult, SharedInstance};
use ogm_types::{RawKey, RecordKey, StoredRecord, TypeName};

use crate::entity::Entity;

/// Type-erased construction function stored in the registry.
pub type ConstructFn = Arc<
    dyn Fn(&RecordKey, &StoredRecord, &mut ResolutionSession) -> ResolveResult<SharedInstance>
        + Send
        + Sync,
>;

/// Everything the resolution driver needs to know about one entity type:
/// where its records live and how to build instances from them.
pub struct EntityDescriptor {
    type_name: TypeName,
    namespace: &'static str,
    set_name: &'static str,
    construct: ConstructFn,
}

impl EntityDescriptor {
    /// Build the descriptor for an [`Entity`] implementation.
    pub fn of<T: Entity>() -> Self {
        Self {
            type_name: T::type_name(),
            namespace: T::namespace(),
            set_name: T::set_name(),
            construct: Arc::new(|key, record, session| {
                let instance = T::hydrate(key, record, session)?;
                Ok(Arc::new(instance) as SharedInstance)
            }),
        }
    }

    /// The registry name of this type.
    pub fn type_name(&self) -> TypeName {
        self.type_name
    }

    /// The store namespace for this type's records.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// The set name for this type's records.
    pub fn set_name(&self) -> &'static str {
        self.set_name
    }

    /// Derive the store-level key for a raw reference key.
    pub fn record_key(&self, key: &RawKey) -> RecordKey {
        RecordKey::new(self.namespace, self.set_name, key.clone())
    }

    /// Construct a shared instance from a fetched record.
    pub fn build(
        &self,
        key: &RecordKey,
        record: &StoredRecord,
        session: &mut ResolutionSession,
    ) -> ResolveResult<SharedInstance> {
        (self.construct)(key, record, session)
    }
}

impl fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("type_name", &self.type_name)
            .field("namespace", &self.namespace)
            .field("set_name", &self.set_name)
            .finish_non_exhaustive()
    }
}
