/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend reported a failure for the whole call.
    #[error("store backend error: {0}")]
    Backend(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The fetch deadline from the policy expired before the call finished.
    #[error("fetch deadline exceeded after {0} ms")]
    DeadlineExceeded(u64),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
