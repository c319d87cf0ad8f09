use std::sync::Arc;

use tracing::debug;

use ogm_registry::{Entity, TypeRegistry};
use ogm_resolve::{Hydrator, ResolutionSession, Resolver};
use ogm_store::{FetchPolicy, RecordStore};
use ogm_types::RawKey;

use crate::error::{SdkError, SdkResult};

/// High-level object mapper API.
///
/// A `Mapper` owns the store handle, the type registry, and the default
/// fetch policy. Each [`get`] call runs one complete resolution session:
/// read the root record, hydrate it, and expand every reachable reference
/// breadth first until the graph is fully materialized. The call either
/// returns the resolved graph or fails atomically; there is no partial
/// result.
///
/// [`get`]: Mapper::get
pub struct Mapper {
    store: Arc<dyn RecordStore>,
    registry: Arc<TypeRegistry>,
    policy: FetchPolicy,
}

/// Builder assembling a [`Mapper`] from its collaborators.
pub struct MapperBuilder {
    store: Arc<dyn RecordStore>,
    registry: TypeRegistry,
    policy: FetchPolicy,
}

impl MapperBuilder {
    /// Register an entity type with the mapper's registry.
    pub fn register<T: Entity>(mut self) -> SdkResult<Self> {
        self.registry.register::<T>()?;
        Ok(self)
    }

    /// Override the default fetch policy.
    pub fn fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Finish building the mapper.
    pub fn build(self) -> Mapper {
        Mapper {
            store: self.store,
            registry: Arc::new(self.registry),
            policy: self.policy,
        }
    }
}

impl Mapper {
    /// Start building a mapper over the given store.
    pub fn builder(store: Arc<dyn RecordStore>) -> MapperBuilder {
        MapperBuilder {
            store,
            registry: TypeRegistry::new(),
            policy: FetchPolicy::default(),
        }
    }

    /// Read an entity and every reference reachable from it.
    ///
    /// Returns `Ok(None)` if the root record does not exist. Reference
    /// fields whose targets are missing resolve to absent links; store and
    /// construction failures abort the whole call.
    pub fn get<T: Entity>(&self, key: impl Into<RawKey>) -> SdkResult<Option<Arc<T>>> {
        self.get_with_policy(key, self.policy.clone())
    }

    /// [`get`](Mapper::get) with a per-call fetch policy override.
    pub fn get_with_policy<T: Entity>(
        &self,
        key: impl Into<RawKey>,
        policy: FetchPolicy,
    ) -> SdkResult<Option<Arc<T>>> {
        let raw = key.into();
        let record_key = self.registry.lookup(T::type_name())?.record_key(&raw);

        let Some(record) = self.store.fetch(&record_key)? else {
            return Ok(None);
        };

        let hydrator: Arc<dyn Hydrator> = Arc::clone(&self.registry) as Arc<dyn Hydrator>;
        let resolver = Resolver::new(Arc::clone(&self.store), hydrator).with_policy(policy);

        let mut session = ResolutionSession::new();
        let instance =
            resolver.hydrate_record(&mut session, T::type_name(), &record_key, &record)?;
        let passes = resolver.resolve_pending(&mut session)?;
        debug!(
            key = %record_key,
            passes,
            cached = session.cache().len(),
            "resolved object graph"
        );

        let typed = instance
            .downcast::<T>()
            .map_err(|_| SdkError::InstanceType(record_key.to_string()))?;
        Ok(Some(typed))
    }

    /// The registry backing this mapper.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The default fetch policy.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("registry", &self.registry)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
