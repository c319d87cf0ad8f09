use ogm_store::StoreError;
use ogm_types::{TypeError, TypeName};

/// Errors from deferred reference resolution.
///
/// Every variant is fatal to the session: it propagates out of the top-level
/// resolve call, leaving setters applied in earlier completed passes in
/// place. There is no retry inside the core.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The store boundary failed a fetch call.
    #[error("batch fetch failed: {0}")]
    Fetch(#[from] StoreError),

    /// A batch result did not align with the requested keys.
    #[error("batch fetch returned {actual} records for {expected} keys")]
    BatchMismatch { expected: usize, actual: usize },

    /// The hydrator could not build an instance from a fetched record.
    #[error("failed to construct '{type_name}' from record {key}: {source}")]
    Construction {
        type_name: TypeName,
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No entity is registered under the requested type name.
    #[error("unknown entity type '{0}'")]
    UnknownType(TypeName),

    /// A resolved instance did not have the type its reference slot expected.
    #[error("resolved instance is not a '{0}'")]
    InstanceType(TypeName),

    /// A reference slot received a second value.
    #[error("reference slot for '{0}' was already resolved")]
    SlotOccupied(TypeName),

    /// Record bin access failed during hydration.
    #[error(transparent)]
    Field(#[from] TypeError),
}

/// Result alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
