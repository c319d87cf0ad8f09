//! Foundation types for the Object Graph Mapper (OGM).
//!
//! This crate provides the key and record types used throughout the OGM
//! system. Every other OGM crate depends on `ogm-types`.
//!
//! # Key Types
//!
//! - [`RawKey`] — user-supplied record identity (integer, string, bytes, or
//!   precomputed store digest)
//! - [`RecordKey`] — store-level address: `(namespace, set, RawKey)`
//! - [`CanonicalKey`] — normalized, comparable identity (domain-separated
//!   BLAKE3 digest) used for cache lookups and fetch deduplication
//! - [`TypeName`] — registry identifier for an entity type
//! - [`StoredRecord`] — raw fetched record: named bins plus generation

pub mod error;
pub mod key;
pub mod name;
pub mod record;

pub use error::TypeError;
pub use key::{CanonicalKey, RawKey, RecordKey};
pub use name::TypeName;
pub use record::StoredRecord;
