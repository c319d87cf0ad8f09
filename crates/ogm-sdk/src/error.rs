use ogm_registry::RegistryError;
use ogm_resolve::ResolveError;
use ogm_store::StoreError;

/// Errors from the high-level mapper API.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The store boundary failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Deferred resolution failed mid-session.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Type registration or lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A hydrated root did not have the requested type.
    #[error("record {0} did not hydrate to the requested type")]
    InstanceType(String),
}

/// Result alias for mapper operations.
pub type SdkResult<T> = Result<T, SdkError>;
