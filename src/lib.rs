//! Sample Provider - A cache-aside item lookup service
//!
//! Serves a single `GET /sample/{id}` endpoint backed by a cache and a
//! document store, and ships a recorded consumer/provider contract that the
//! test harness verifies against the running router.

pub mod api;
pub mod clients;
pub mod config;
pub mod consumer;
pub mod contract;
pub mod error;
pub mod lookup;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use lookup::ItemLookupService;
