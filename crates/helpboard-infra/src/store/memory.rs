//! In-memory store implementations - used for tests and as the fallback
//! when no DynamoDB table is configured. Data is lost on process restart.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use helpboard_core::domain::{Post, PostId, Setting, POSTS_PARTITION};
use helpboard_core::error::StoreError;
use helpboard_core::ports::{
    ContinuationKey, PostPage, PostQuery, PostStore, QueryOrder, SettingsStore,
};

/// In-memory post store over a `BTreeMap` keyed by the composite id.
///
/// Pagination emulates the real store: results resume strictly after the
/// continuation key and a new key is emitted whenever items remain past the
/// requested page.
pub struct InMemoryPostStore {
    posts: RwLock<BTreeMap<String, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort key of a post under the given ordering, newest-first for
/// creation-time order. The full id breaks ties deterministically.
fn sort_tuple(post: &Post, order: &QueryOrder) -> (i64, String, String) {
    match order {
        QueryOrder::ByCreationTime => (-post.created_at, post.id.to_string(), String::new()),
        QueryOrder::ByType => (0, post.type_id.clone(), post.id.to_string()),
    }
}

fn key_tuple(key: &ContinuationKey, order: &QueryOrder) -> Result<(i64, String, String), StoreError> {
    match order {
        QueryOrder::ByCreationTime => {
            let created_at = key.created_at.ok_or_else(|| {
                StoreError::Query("continuation key is missing createdAt".into())
            })?;
            Ok((-created_at, key.id.clone(), String::new()))
        }
        QueryOrder::ByType => {
            let type_id = key
                .type_id
                .clone()
                .ok_or_else(|| StoreError::Query("continuation key is missing typeId".into()))?;
            Ok((0, type_id, key.id.clone()))
        }
    }
}

fn continuation_key(post: &Post, order: &QueryOrder) -> ContinuationKey {
    ContinuationKey {
        partition: POSTS_PARTITION.to_owned(),
        id: post.id.to_string(),
        created_at: matches!(order, QueryOrder::ByCreationTime).then_some(post.created_at),
        type_id: matches!(order, QueryOrder::ByType).then(|| post.type_id.clone()),
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn put(&self, post: Post) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id.to_string(), post);
        Ok(())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id.to_string()).cloned())
    }

    async fn delete(&self, id: &PostId) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id.to_string());
        Ok(())
    }

    async fn query(&self, query: PostQuery) -> Result<PostPage, StoreError> {
        let posts = self.posts.read().await;

        let mut matches: Vec<&Post> = posts
            .values()
            .filter(|post| match &query.type_filter {
                Some(t) => &post.type_id == t,
                None => true,
            })
            .collect();
        matches.sort_by_key(|post| sort_tuple(post, &query.order));

        if let Some(key) = &query.start_after {
            let resume_after = key_tuple(key, &query.order)?;
            matches.retain(|post| sort_tuple(post, &query.order) > resume_after);
        }

        let limit = query.limit as usize;
        let items: Vec<Post> = matches.iter().take(limit).map(|p| (*p).clone()).collect();
        let next_key = (matches.len() > limit)
            .then(|| items.last().map(|p| continuation_key(p, &query.order)))
            .flatten();

        Ok(PostPage { items, next_key })
    }
}

/// In-memory settings store seeded at construction.
pub struct InMemorySettingsStore {
    entries: RwLock<HashMap<String, Vec<Setting>>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Seed one partition with its catalogue entries.
    pub fn with_entries(mut self, partition: &str, settings: Vec<Setting>) -> Self {
        self.entries.get_mut().insert(partition.to_owned(), settings);
        self
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn list(&self, partition: &str) -> Result<Vec<Setting>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(partition).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpboard_core::domain::TYPES_PARTITION;

    fn post(suffix: &str, created_at: i64) -> Post {
        Post {
            id: PostId::new("alice", suffix),
            type_id: "tools".into(),
            created_at,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            phone_number: String::new(),
            image: "N/A".into(),
            fulfilled: false,
        }
    }

    #[tokio::test]
    async fn put_get_delete() {
        let store = InMemoryPostStore::new();
        let id = PostId::new("alice", "a1");

        store.put(post("a1", 1)).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_some());

        store.delete(&id).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_none());

        // Deleting again is not an error.
        store.delete(&id).await.unwrap();
    }

    #[tokio::test]
    async fn query_emits_a_key_only_when_items_remain() {
        let store = InMemoryPostStore::new();
        store.put(post("a1", 1)).await.unwrap();
        store.put(post("a2", 2)).await.unwrap();

        let page = store
            .query(PostQuery {
                order: QueryOrder::ByCreationTime,
                type_filter: None,
                start_after: None,
                limit: 2,
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.next_key.is_none());
    }

    #[tokio::test]
    async fn settings_list_by_partition() {
        let store = InMemorySettingsStore::new().with_entries(
            TYPES_PARTITION,
            vec![Setting {
                id: "tools".into(),
                name: "Tools & Equipment".into(),
            }],
        );

        let types = store.list(TYPES_PARTITION).await.unwrap();
        assert_eq!(types.len(), 1);
        assert!(store.list("LOCATION").await.unwrap().is_empty());
    }
}
