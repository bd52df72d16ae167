//! API Module
//!
//! HTTP handlers and routing for the lookup service.
//!
//! # Endpoints
//! - `GET /sample/:id` - Retrieve an item by id (cache-aside read)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
