//! Collaborator Clients
//!
//! Trait seams for the two external collaborators of the lookup service:
//! a cache and a document store. The service takes both as constructor
//! arguments, so tests can substitute fakes without a DI framework.
//!
//! The in-memory implementations here stand in for real backends; they are
//! what the binary wires up (seeded in contract mode) and what the test
//! harness uses.

pub mod cache;
pub mod store;

pub use cache::{CacheClient, InMemoryCache};
pub use store::{DocumentStore, InMemoryStore};
