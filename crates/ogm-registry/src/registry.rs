use std::collections::HashMap;
use std::fmt;

use ogm_resolve::{Hydrator, ResolutionSession, ResolveError, ResolveResult, SharedInstance};
use ogm_types::{RawKey, RecordKey, StoredRecord, TypeName};

use crate::descriptor::EntityDescriptor;
use crate::entity::Entity;
use crate::error::{RegistryError, RegistryResult};

/// The reflection replacement: a name-keyed table of entity descriptors,
/// built once at startup.
///
/// The resolution driver only sees the registry through the [`Hydrator`]
/// trait; it never inspects type internals itself.
#[derive(Default)]
pub struct TypeRegistry {
    entries: HashMap<TypeName, EntityDescriptor>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity type. Each name may be registered once.
    pub fn register<T: Entity>(&mut self) -> RegistryResult<()> {
        let descriptor = EntityDescriptor::of::<T>();
        let name = descriptor.type_name();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateType(name));
        }
        self.entries.insert(name, descriptor);
        Ok(())
    }

    /// Look up a descriptor by type name.
    pub fn lookup(&self, name: TypeName) -> RegistryResult<&EntityDescriptor> {
        self.entries
            .get(&name)
            .ok_or(RegistryError::UnknownType(name))
    }

    /// Returns `true` if the name is registered.
    pub fn contains(&self, name: TypeName) -> bool {
        self.entries.contains_key(&name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Hydrator for TypeRegistry {
    fn record_key(&self, target: TypeName, key: &RawKey) -> ResolveResult<RecordKey> {
        let descriptor = self
            .lookup(target)
            .map_err(|_| ResolveError::UnknownType(target))?;
        Ok(descriptor.record_key(key))
    }

    fn construct(
        &self,
        target: TypeName,
        key: &RecordKey,
        record: &StoredRecord,
        session: &mut ResolutionSession,
    ) -> ResolveResult<SharedInstance> {
        let descriptor = self
            .lookup(target)
            .map_err(|_| ResolveError::UnknownType(target))?;
        descriptor.build(key, record, session)
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gadget;

    impl Entity for Gadget {
        fn type_name() -> TypeName {
            TypeName::new("gadget")
        }

        fn namespace() -> &'static str {
            "test"
        }

        fn set_name() -> &'static str {
            "gadgets"
        }

        fn hydrate(
            _key: &RecordKey,
            _record: &StoredRecord,
            _session: &mut ResolutionSession,
        ) -> ResolveResult<Self> {
            Ok(Gadget)
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register::<Gadget>().unwrap();

        assert!(registry.contains(TypeName::new("gadget")));
        assert_eq!(registry.len(), 1);
        let descriptor = registry.lookup(TypeName::new("gadget")).unwrap();
        assert_eq!(descriptor.set_name(), "gadgets");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register::<Gadget>().unwrap();
        assert_eq!(
            registry.register::<Gadget>(),
            Err(RegistryError::DuplicateType(TypeName::new("gadget")))
        );
    }

    #[test]
    fn unknown_lookup_is_rejected() {
        let registry = TypeRegistry::new();
        assert!(matches!(
            registry.lookup(TypeName::new("missing")),
            Err(RegistryError::UnknownType(_))
        ));
    }

    #[test]
    fn hydrator_record_key_uses_the_registered_schema() {
        let mut registry = TypeRegistry::new();
        registry.register::<Gadget>().unwrap();

        let key = Hydrator::record_key(&registry, TypeName::new("gadget"), &RawKey::Int(7))
            .unwrap();
        assert_eq!(format!("{key}"), "test/gadgets/7");
    }

    #[test]
    fn hydrator_surfaces_unknown_types() {
        let registry = TypeRegistry::new();
        let err =
            Hydrator::record_key(&registry, TypeName::new("ghost"), &RawKey::Int(1)).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownType(_)));
    }

    #[test]
    fn hydrator_constructs_through_the_descriptor() {
        let mut registry = TypeRegistry::new();
        registry.register::<Gadget>().unwrap();

        let key = RecordKey::new("test", "gadgets", 1);
        let mut session = ResolutionSession::new();
        let instance = registry
            .construct(
                TypeName::new("gadget"),
                &key,
                &StoredRecord::new(),
                &mut session,
            )
            .unwrap();
        assert!(instance.downcast::<Gadget>().is_ok());
    }
}
