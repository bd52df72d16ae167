//! Item entity
//!
//! The single entity served by the lookup endpoint. Items are created
//! externally and owned by the document store; this service only reads them.

use serde::{Deserialize, Serialize};

/// An item as stored, cached, and served.
///
/// Serialized as flat JSON for both the wire protocol and the cache value:
/// `{"id": "...", "name": "...", "description": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within the store; also the cache key and the
    /// store partition key
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
}

impl Item {
    /// Creates a new Item
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
