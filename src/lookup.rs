//! Item Lookup Service
//!
//! The core of the provider: a cache-aside read over a cache client and a
//! document store. Probe the cache, on a miss point-read the store, populate
//! the cache, return the item.

use std::sync::Arc;

use tracing::debug;

use crate::clients::{CacheClient, DocumentStore};
use crate::error::{LookupError, Result};
use crate::models::Item;

// == Item Lookup Service ==
/// Returns items by id, using the cache as a fast path and the document
/// store as the source of truth.
///
/// Each lookup is an independent per-call operation: no locks, no ordering
/// guarantees between concurrent lookups of the same id. Two concurrent
/// misses may both read the store and both write the cache; the final cache
/// value is whichever write lands last.
pub struct ItemLookupService {
    cache: Arc<dyn CacheClient>,
    store: Arc<dyn DocumentStore>,
}

impl ItemLookupService {
    /// Creates a new service over the given collaborators.
    pub fn new(cache: Arc<dyn CacheClient>, store: Arc<dyn DocumentStore>) -> Self {
        Self { cache, store }
    }

    // == Get ==
    /// Looks up an item by id (cache-aside read).
    ///
    /// 1. Probe the cache for key = `id`.
    /// 2. Present and non-empty: deserialize and return, no store access and
    ///    no freshness check.
    /// 3. Absent: point-read the store with `id` as both lookup key and
    ///    partition key.
    /// 4. Store miss fails with `NotFound`.
    /// 5. Serialize the fetched item and write it into the cache,
    ///    unconditionally overwriting any race-created entry.
    /// 6. Return the fetched item.
    ///
    /// An empty cache value is treated identically to a miss. Failures from
    /// either collaborator propagate immediately, without retry.
    pub async fn get(&self, id: &str) -> Result<Item> {
        if let Some(cached) = self.cache.get(id).await? {
            if !cached.is_empty() {
                debug!(id, "cache hit");
                let item = serde_json::from_slice(&cached).map_err(|e| {
                    LookupError::Internal(format!("undecodable cached payload for '{}': {}", id, e))
                })?;
                return Ok(item);
            }
        }

        debug!(id, "cache miss, reading store");
        let item = self.store.read_item(id, id).await?;

        let serialized = serde_json::to_vec(&item)
            .map_err(|e| LookupError::Internal(format!("failed to serialize item: {}", e)))?;
        self.cache.set(id, serialized).await?;

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{InMemoryCache, InMemoryStore};
    use async_trait::async_trait;
    use proptest::prelude::*;

    fn fixture_item() -> Item {
        Item::new("27", "burger", "food")
    }

    async fn seeded_service() -> (ItemLookupService, Arc<InMemoryCache>, Arc<InMemoryStore>) {
        let cache = Arc::new(InMemoryCache::new());
        let store = Arc::new(InMemoryStore::new());
        store.insert(fixture_item()).await;

        let service = ItemLookupService::new(cache.clone(), store.clone());
        (service, cache, store)
    }

    // == Cache-Aside Behavior ==

    #[tokio::test]
    async fn test_miss_reads_store_and_populates_cache() {
        let (service, cache, _store) = seeded_service().await;

        let item = service.get("27").await.unwrap();
        assert_eq!(item, fixture_item());

        // Cache now holds the same serialized value the store produced
        let cached = cache.get("27").await.unwrap().unwrap();
        assert_eq!(cached, serde_json::to_vec(&fixture_item()).unwrap());
    }

    #[tokio::test]
    async fn test_hit_skips_the_store() {
        let (service, _cache, store) = seeded_service().await;

        service.get("27").await.unwrap();
        assert_eq!(store.reads(), 1);

        // Second lookup is served entirely from cache
        let item = service.get("27").await.unwrap();
        assert_eq!(item, fixture_item());
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_absent_everywhere_is_not_found() {
        let (service, _cache, _store) = seeded_service().await;

        let err = service.get("99").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(id) if id == "99"));
    }

    #[tokio::test]
    async fn test_empty_cache_value_is_a_miss() {
        let (service, cache, store) = seeded_service().await;
        cache.set("27", Vec::new()).await.unwrap();

        let item = service.get("27").await.unwrap();
        assert_eq!(item, fixture_item());
        assert_eq!(store.reads(), 1);

        // The empty entry was overwritten with the real serialization
        let cached = cache.get("27").await.unwrap().unwrap();
        assert_eq!(cached, serde_json::to_vec(&fixture_item()).unwrap());
    }

    #[tokio::test]
    async fn test_stale_cache_wins_over_updated_store() {
        let (service, _cache, store) = seeded_service().await;

        // First lookup populates the cache
        service.get("27").await.unwrap();

        // The backing item changes; no invalidation path exists
        store.insert(Item::new("27", "salad", "greens")).await;

        let item = service.get("27").await.unwrap();
        assert_eq!(item, fixture_item());
    }

    #[tokio::test]
    async fn test_undecodable_cached_payload_is_internal_error() {
        let (service, cache, _store) = seeded_service().await;
        cache.set("27", b"not json".to_vec()).await.unwrap();

        let err = service.get("27").await.unwrap_err();
        assert!(matches!(err, LookupError::Internal(_)));
    }

    // == Failure Propagation ==

    struct FailingCache;

    #[async_trait]
    impl CacheClient for FailingCache {
        async fn get(&self, _key: &str) -> crate::error::Result<Option<Vec<u8>>> {
            Err(LookupError::UpstreamUnavailable(
                "cache connection refused".to_string(),
            ))
        }

        async fn set(&self, _key: &str, _value: Vec<u8>) -> crate::error::Result<()> {
            Err(LookupError::UpstreamUnavailable(
                "cache connection refused".to_string(),
            ))
        }
    }

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn read_item(&self, _id: &str, _partition_key: &str) -> crate::error::Result<Item> {
            Err(LookupError::UpstreamUnavailable(
                "store connection refused".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_cache_failure_propagates_unchanged() {
        let store = Arc::new(InMemoryStore::new());
        store.insert(fixture_item()).await;
        let service = ItemLookupService::new(Arc::new(FailingCache), store);

        let err = service.get("27").await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates_unchanged() {
        let service =
            ItemLookupService::new(Arc::new(InMemoryCache::new()), Arc::new(FailingStore));

        let err = service.get("27").await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable(_)));
    }

    // == Idempotence Property ==

    proptest! {
        /// Repeated lookups after the first populate return byte-identical
        /// serialized output for arbitrary items.
        #[test]
        fn prop_repeated_gets_are_byte_identical(
            id in "[a-zA-Z0-9]{1,16}",
            name in ".{0,32}",
            description in ".{0,64}",
        ) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();

            rt.block_on(async {
                let cache = Arc::new(InMemoryCache::new());
                let store = Arc::new(InMemoryStore::new());
                store.insert(Item::new(id.clone(), name, description)).await;

                let service = ItemLookupService::new(cache, store);

                let first = serde_json::to_vec(&service.get(&id).await.unwrap()).unwrap();
                let second = serde_json::to_vec(&service.get(&id).await.unwrap()).unwrap();
                prop_assert_eq!(first, second);
                Ok(())
            })?;
        }
    }
}
