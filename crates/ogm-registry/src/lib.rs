//! Entity type registry for the Object Graph Mapper.
//!
//! Runtime type inspection is replaced by a registry built once at startup:
//! each mapped type implements [`Entity`] (registry name, key schema, and a
//! construction function) and is registered with [`TypeRegistry::register`].
//! The registry implements the resolution core's `Hydrator` boundary, so the
//! driver resolves deferred references without ever looking inside a type.
//!
//! Reference-valued bins are declared as `Link<T>` slots and deferred with
//! [`SessionExt::defer_ref`] during hydration.

pub mod descriptor;
pub mod entity;
pub mod error;
pub mod registry;

pub use descriptor::{ConstructFn, EntityDescriptor};
pub use entity::{Entity, SessionExt};
pub use error::{RegistryError, RegistryResult};
pub use registry::TypeRegistry;
