//! Document Store Client
//!
//! The source of truth behind the cache: a point-read interface keyed by id
//! and partition key, plus the seedable in-memory implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{LookupError, Result};
use crate::models::Item;

// == Document Store Trait ==
/// Point-read document store interface.
///
/// Fails with [`crate::error::LookupError::NotFound`] when no item exists
/// for `id`, and with `UpstreamUnavailable` on transport failure.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a single item. The lookup service passes the item id as both
    /// the lookup key and the partition key.
    async fn read_item(&self, id: &str, partition_key: &str) -> Result<Item>;
}

// == In-Memory Store ==
/// Seedable in-memory document store.
///
/// Counts point reads so tests can assert that a cache hit performs zero
/// store calls.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<String, Item>>,
    reads: AtomicU64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an item, keyed by its id.
    pub async fn insert(&self, item: Item) {
        let mut items = self.items.write().await;
        items.insert(item.id.clone(), item);
    }

    /// Number of point reads performed since construction.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn read_item(&self, id: &str, _partition_key: &str) -> Result<Item> {
        self.reads.fetch_add(1, Ordering::Relaxed);

        let items = self.items.read().await;
        items
            .get(id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(id.to_string()))
    }
}
