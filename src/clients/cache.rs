//! Cache Client
//!
//! The cache side of the cache-aside pair: a get/set key-value interface
//! plus the in-memory implementation used by the binary and the tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;

// == Cache Client Trait ==
/// Key-value cache interface.
///
/// Implementations must be individually thread-safe; the lookup service
/// holds a shared handle and performs no locking of its own. Transport
/// failures surface as [`crate::error::LookupError::UpstreamUnavailable`].
#[async_trait]
pub trait CacheClient: Send + Sync {
    /// Retrieves the value stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, unconditionally overwriting any existing
    /// entry (last writer wins).
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;
}

// == In-Memory Cache ==
/// Process-local cache backed by a HashMap.
///
/// Entries have no TTL and no invalidation; they live until process restart.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheClient for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
