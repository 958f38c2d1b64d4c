//! Post service - validation and authorization rules for the four
//! operations, in front of whatever [`PostStore`] the application wires in.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId, NO_IMAGE};
use crate::error::DomainError;
use crate::ports::{PostStore, QueryOrder};
use crate::query::{self, ListPage, ListRequest};

#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Create (or overwrite) a post on behalf of `caller`.
    ///
    /// An explicit id must carry the caller's own owner segment; a missing or
    /// empty id gets a fresh collision-resistant suffix. The write itself is
    /// an unconditional overwrite - last writer wins.
    pub async fn create(&self, caller: &str, input: NewPost) -> Result<PostId, DomainError> {
        if caller.is_empty() {
            return Err(DomainError::Unauthorized);
        }
        if input.type_id.is_empty() {
            return Err(DomainError::Validation("typeId must not be empty".into()));
        }

        let id = match input.id.as_deref().filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let id = PostId::parse(raw)
                    .map_err(|e| DomainError::Validation(format!("invalid post id: {e}")))?;
                if id.owner() != caller {
                    tracing::warn!(caller, id = %id, "create rejected: id owned by someone else");
                    return Err(DomainError::Unauthorized);
                }
                id
            }
            None => PostId::new(caller, uuid::Uuid::new_v4().simple().to_string()),
        };

        let post = Post {
            id: id.clone(),
            type_id: input.type_id,
            created_at: chrono::Utc::now().timestamp_millis(),
            title: input.title,
            description: input.description,
            location: input.location,
            phone_number: input.phone_number,
            image: input
                .image
                .filter(|img| !img.is_empty())
                .unwrap_or_else(|| NO_IMAGE.to_owned()),
            fulfilled: input.fulfilled,
        };

        tracing::debug!(id = %post.id, type_id = %post.type_id, "writing post");
        self.store.put(post).await?;
        Ok(id)
    }

    /// Delete a post on behalf of `caller`.
    ///
    /// The caller must own the id's owner segment. Deleting an id with no
    /// record behind it succeeds silently (store delete-if-exists semantics).
    pub async fn delete(&self, caller: &str, raw_id: &str) -> Result<(), DomainError> {
        let id = PostId::parse(raw_id)
            .map_err(|e| DomainError::Validation(format!("invalid post id: {e}")))?;
        if id.owner() != caller {
            tracing::warn!(caller, id = %id, "delete rejected: id owned by someone else");
            return Err(DomainError::Unauthorized);
        }

        self.store.delete(&id).await?;
        Ok(())
    }

    /// List posts newest-first, optionally restricted to one type.
    pub async fn list_by_time(&self, req: ListRequest) -> Result<ListPage, DomainError> {
        self.list(QueryOrder::ByCreationTime, req).await
    }

    /// List posts of a single type. The type filter is required.
    pub async fn list_by_type(&self, req: ListRequest) -> Result<ListPage, DomainError> {
        self.list(QueryOrder::ByType, req).await
    }

    async fn list(&self, order: QueryOrder, req: ListRequest) -> Result<ListPage, DomainError> {
        let query = query::plan(order, &req)?;
        let page = self.store.query(query).await?;
        Ok(query::normalize(page))
    }
}
