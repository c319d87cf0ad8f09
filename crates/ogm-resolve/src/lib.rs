//! Deferred reference resolution core for the Object Graph Mapper.
//!
//! Hydrating a record can discover reference-valued fields whose targets are
//! not loaded yet. Instead of recursing into the store per field, hydration
//! registers each as a [`DeferredRef`] against the current
//! [`ResolutionSession`]. The [`Resolver`] then expands the graph breadth
//! first: each pass drains the queue, applies repeat keys from the
//! session-scoped [`ResolutionCache`], fetches the remaining distinct keys
//! in one ordered batch call, and hydrates the results -- which may queue
//! the next level. The loop ends when a drain comes back empty.
//!
//! # Guarantees
//!
//! - A graph of depth D costs D fetch round trips, independent of branching.
//! - A key referenced from many places is fetched at most once per session.
//! - Cycles terminate: the second encounter of a key is a cache hit, and the
//!   resolved graph shares one instance per record.
//! - An absent record is data, not an error: dependent fields resolve to
//!   `None`, and the absence is memoized for the rest of the session.
//! - Store and construction failures abort the whole session; setters from
//!   completed passes stay applied and the session is discarded.

pub mod batch;
pub mod cache;
pub mod deferred;
pub mod driver;
pub mod error;
pub mod hydrator;
pub mod link;
pub mod session;

pub use batch::BatchGroup;
pub use cache::{CachedValue, ResolutionCache};
pub use deferred::{DeferredQueue, DeferredRef, Setter, SharedInstance};
pub use driver::Resolver;
pub use error::{ResolveError, ResolveResult};
pub use hydrator::Hydrator;
pub use link::Link;
pub use session::ResolutionSession;
