//! Consumer Client
//!
//! The consumer half of the contract pair: a small HTTP client that fetches
//! an item from a running provider. Used by the consumer-side contract tests
//! and usable as a standalone API client.

use crate::error::{LookupError, Result};
use crate::models::Item;

/// HTTP client for the sample provider API.
pub struct SampleClient {
    base_url: String,
    http: reqwest::Client,
}

impl SampleClient {
    /// Creates a client for the provider at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetches an item via `GET {base_url}/sample/{id}`.
    ///
    /// A 404 maps to `NotFound`; any other non-success status and all
    /// transport failures map to `UpstreamUnavailable`.
    pub async fn fetch_item(&self, id: &str) -> Result<Item> {
        let url = format!("{}/sample/{}", self.base_url, id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::UpstreamUnavailable(format!("request to {}: {}", url, e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(id.to_string()));
        }

        let response = response
            .error_for_status()
            .map_err(|e| LookupError::UpstreamUnavailable(e.to_string()))?;

        response
            .json::<Item>()
            .await
            .map_err(|e| LookupError::Internal(format!("undecodable response body: {}", e)))
    }
}
