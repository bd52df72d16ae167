//! Data models for the lookup service API
//!
//! Defines the item entity and the DTOs used for serializing HTTP response
//! bodies.

pub mod item;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use responses::{ErrorResponse, HealthResponse};
