use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostId, Setting};
use crate::error::StoreError;

/// Requested ordering for a listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOrder {
    /// `created_at` descending - most recent first.
    ByCreationTime,
    /// Restricted to a single `type_id` value.
    ByType,
}

/// Continuation key returned by the store after a partial page.
///
/// Serialized shape matches the store's key attributes for the index that
/// produced it: `{partition, id, createdAt}` for creation-time order,
/// `{partition, id, typeId}` for type order. The query planner is the only
/// producer and consumer of the wire form; stores hand it back and forth
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContinuationKey {
    pub partition: String,
    pub id: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(rename = "typeId", skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
}

/// A planned range query against the post partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PostQuery {
    pub order: QueryOrder,
    /// Equality filter on `type_id`. Required for [`QueryOrder::ByType`],
    /// optional for [`QueryOrder::ByCreationTime`].
    pub type_filter: Option<String>,
    /// Exclusive starting point; the page resumes strictly after this key.
    pub start_after: Option<ContinuationKey>,
    pub limit: u32,
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostPage {
    pub items: Vec<Post>,
    /// Present when more items remain past this page.
    pub next_key: Option<ContinuationKey>,
}

/// Post store - abstraction over the ordered key-range backend
/// (DynamoDB in production, in-memory for tests and local development).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Write a full record, unconditionally overwriting any existing one.
    async fn put(&self, post: Post) -> Result<(), StoreError>;

    /// Fetch a single record by id.
    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError>;

    /// Delete a record by id. Deleting a missing id is not an error.
    async fn delete(&self, id: &PostId) -> Result<(), StoreError>;

    /// Execute a single-shot range query. Never retried internally.
    async fn query(&self, query: PostQuery) -> Result<PostPage, StoreError>;
}

/// Read-only access to the settings table (post types, locations).
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// List every entry under one settings partition.
    async fn list(&self, partition: &str) -> Result<Vec<Setting>, StoreError>;
}
