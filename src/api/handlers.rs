//! API Handlers
//!
//! HTTP request handlers for the lookup service endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::lookup::ItemLookupService;
use crate::models::{HealthResponse, Item};

/// Application state shared across all handlers.
///
/// Holds the lookup service behind an Arc; the service itself is stateless
/// per call, so handlers never lock anything.
#[derive(Clone)]
pub struct AppState {
    /// Shared lookup service
    pub service: Arc<ItemLookupService>,
}

impl AppState {
    /// Creates a new AppState wrapping the given service.
    pub fn new(service: ItemLookupService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Handler for GET /sample/:id
///
/// Returns the item as flat JSON with a 200 status. A missing item yields
/// 404; cache or store failures propagate as 5xx without retry.
pub async fn get_sample_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let item = state.service.get(&id).await?;

    Ok(Json(item))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
