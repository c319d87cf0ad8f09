use serde::{Deserialize, Serialize};

/// Pass-through fetch configuration for one batch call.
///
/// The mapper threads this value from the caller to the store boundary
/// unchanged. Backends interpret the knobs they support and ignore the rest;
/// the resolution core never branches on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPolicy {
    /// Upper bound on in-flight sub-requests within one batch.
    /// `None` leaves the backend default in place.
    pub max_concurrent: Option<usize>,
    /// Total deadline for one batch call, in milliseconds. Expiry surfaces
    /// as [`StoreError::DeadlineExceeded`] and aborts the caller's session.
    ///
    /// [`StoreError::DeadlineExceeded`]: crate::StoreError::DeadlineExceeded
    pub timeout_ms: Option<u64>,
}

impl FetchPolicy {
    /// Builder-style concurrency bound.
    pub fn with_max_concurrent(mut self, max: usize) -> Self {
        self.max_concurrent = Some(max);
        self
    }

    /// Builder-style deadline.
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = Some(ms);
        self
    }
}
