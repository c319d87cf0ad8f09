use ogm_types::TypeName;

/// Errors from type registration and lookup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A type name was registered twice.
    #[error("entity type '{0}' is already registered")]
    DuplicateType(TypeName),

    /// No entity is registered under the requested type name.
    #[error("no entity registered under type '{0}'")]
    UnknownType(TypeName),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
