//! Record store boundary for the Object Graph Mapper.
//!
//! The resolution core talks to storage exclusively through the
//! [`RecordStore`] trait: a single read plus one ordered batch read per
//! resolution pass. The batch contract is strict -- results align 1:1 with
//! the requested keys, absent records are `None` at their position, and a
//! failure is a single error for the whole call.
//!
//! # Components
//!
//! - [`RecordStore`] -- the read boundary trait
//! - [`FetchPolicy`] -- opaque pass-through knobs (concurrency, deadline)
//! - [`InMemoryRecordStore`] -- `HashMap`-based backend for tests and embedding
//!
//! # Design Rules
//!
//! 1. Absence is data (`Ok(None)`), never an error.
//! 2. Batch results preserve input order; no silent reordering.
//! 3. Policy knobs tune performance only, never correctness.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod policy;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRecordStore;
pub use policy::FetchPolicy;
pub use traits::RecordStore;
