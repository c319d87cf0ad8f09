//! High-level SDK for the Object Graph Mapper.
//!
//! [`Mapper`] is the one-stop entry point: build it over a record store,
//! register entity types, and call [`Mapper::get`] to read an entity
//! together with every reference reachable from it. Resolution is breadth
//! first and batched -- a graph of depth D costs D fetch round trips, shared
//! references hydrate once, and cycles come back as shared instances.
//!
//! ```
//! use std::sync::Arc;
//!
//! use ogm_registry::{Entity, SessionExt};
//! use ogm_resolve::{Link, ResolutionSession, ResolveResult};
//! use ogm_sdk::Mapper;
//! use ogm_store::InMemoryRecordStore;
//! use ogm_types::{RecordKey, StoredRecord, TypeName};
//!
//! struct Author {
//!     name: String,
//!     editor: Link<Author>,
//! }
//!
//! impl Entity for Author {
//!     fn type_name() -> TypeName {
//!         TypeName::new("author")
//!     }
//!
//!     fn namespace() -> &'static str {
//!         "library"
//!     }
//!
//!     fn set_name() -> &'static str {
//!         "authors"
//!     }
//!
//!     fn hydrate(
//!         _key: &RecordKey,
//!         record: &StoredRecord,
//!         session: &mut ResolutionSession,
//!     ) -> ResolveResult<Self> {
//!         let name = record.str_bin("name")?.to_string();
//!         let editor = Link::new();
//!         if let Some(raw) = record.opt_key_bin("editor")? {
//!             session.defer_ref(raw, &editor);
//!         }
//!         Ok(Author { name, editor })
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(InMemoryRecordStore::new());
//! store.insert(
//!     &RecordKey::new("library", "authors", "ann"),
//!     StoredRecord::new().with_bin("name", "Ann").with_bin("editor", "ed"),
//! );
//! store.insert(
//!     &RecordKey::new("library", "authors", "ed"),
//!     StoredRecord::new().with_bin("name", "Ed"),
//! );
//!
//! let mapper = Mapper::builder(store).register::<Author>()?.build();
//! let ann = mapper.get::<Author>("ann")?.expect("seeded");
//! assert_eq!(ann.editor.get().expect("resolved").name, "Ed");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mapper;

pub use error::{SdkError, SdkResult};
pub use mapper::{Mapper, MapperBuilder};
