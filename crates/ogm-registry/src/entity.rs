use ogm_resolve::{Link, ResolutionSession, ResolveResult};
use ogm_types::{RawKey, RecordKey, StoredRecord, TypeName};

/// A mapped type: its registry name, key schema, and construction function.
///
/// Implementations are registered with
/// [`TypeRegistry::register`](crate::TypeRegistry::register) once at
/// startup. `hydrate` builds an instance from a raw record; reference-valued
/// bins are not resolved inline but deferred against the session, typically
/// through [`SessionExt::defer_ref`].
pub trait Entity: Send + Sync + Sized + 'static {
    /// Registry name for this entity type.
    fn type_name() -> TypeName;

    /// Store namespace records of this type live in.
    fn namespace() -> &'static str;

    /// Set (collection) name within the namespace.
    fn set_name() -> &'static str;

    /// Build an instance from a raw record.
    fn hydrate(
        key: &RecordKey,
        record: &StoredRecord,
        session: &mut ResolutionSession,
    ) -> ResolveResult<Self>;
}

/// Session sugar deriving the deferred target from the link's type.
pub trait SessionExt {
    /// Register a pending reference to an entity of type `T`.
    fn defer_ref<T: Entity>(&mut self, key: impl Into<RawKey>, link: &Link<T>);
}

impl SessionExt for ResolutionSession {
    fn defer_ref<T: Entity>(&mut self, key: impl Into<RawKey>, link: &Link<T>) {
        self.defer(T::type_name(), key, link);
    }
}
