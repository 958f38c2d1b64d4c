//! DynamoDB store implementations.
//!
//! The posts table is keyed `(partition, id)` with two global secondary
//! indexes sharing the partition key: `created-index` sorted by `createdAt`
//! and `type-index` sorted by `typeId`. Items are marshalled through
//! `serde_dynamo`. Every call is a single network attempt; retry policy is
//! the caller's.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};

use helpboard_core::domain::{Post, PostId, Setting, POSTS_PARTITION};
use helpboard_core::error::StoreError;
use helpboard_core::ports::{
    ContinuationKey, PostPage, PostQuery, PostStore, QueryOrder, SettingsStore,
};

use super::record::{PostRecord, SettingRecord};

/// Secondary index over `(partition, createdAt)`.
const CREATED_INDEX: &str = "created-index";

/// Secondary index over `(partition, typeId)`.
const TYPE_INDEX: &str = "type-index";

/// Connection settings for the DynamoDB adapters.
#[derive(Debug, Clone)]
pub struct DynamoConfig {
    pub posts_table: String,
    pub settings_table: String,
    /// Override for local development (e.g. DynamoDB Local).
    pub endpoint_url: Option<String>,
}

impl DynamoConfig {
    /// Build the shared SDK client from the ambient AWS environment.
    ///
    /// Constructed once at startup and shared behind `Arc` for the life of
    /// the process; the SDK client is internally connection-pooled.
    pub async fn connect(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(url) = &self.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;
        Client::new(&config)
    }
}

fn query_err(err: impl std::error::Error + Send + Sync + 'static) -> StoreError {
    StoreError::Query(DisplayErrorContext(&err).to_string())
}

fn codec_err(err: serde_dynamo::Error) -> StoreError {
    StoreError::Codec(err.to_string())
}

/// DynamoDB-backed post store.
pub struct DynamoPostStore {
    client: Client,
    table: String,
}

impl DynamoPostStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    fn primary_key(id: &PostId) -> [(&'static str, AttributeValue); 2] {
        [
            ("partition", AttributeValue::S(POSTS_PARTITION.to_owned())),
            ("id", AttributeValue::S(id.to_string())),
        ]
    }
}

#[async_trait]
impl PostStore for DynamoPostStore {
    async fn put(&self, post: Post) -> Result<(), StoreError> {
        tracing::debug!(id = %post.id, table = %self.table, "put_item");
        let item: HashMap<String, AttributeValue> =
            to_item(PostRecord::from(post)).map_err(codec_err)?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(query_err)?;
        Ok(())
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError> {
        let mut req = self.client.get_item().table_name(&self.table);
        for (name, value) in Self::primary_key(id) {
            req = req.key(name, value);
        }
        let output = req.send().await.map_err(query_err)?;

        let Some(item) = output.item else {
            return Ok(None);
        };
        let record: PostRecord = from_item(item).map_err(codec_err)?;
        let post = Post::try_from(record)?;
        Ok(Some(post))
    }

    async fn delete(&self, id: &PostId) -> Result<(), StoreError> {
        let mut req = self.client.delete_item().table_name(&self.table);
        for (name, value) in Self::primary_key(id) {
            req = req.key(name, value);
        }
        req.send().await.map_err(query_err)?;
        Ok(())
    }

    async fn query(&self, query: PostQuery) -> Result<PostPage, StoreError> {
        // "partition" is a reserved word in DynamoDB expressions.
        let mut req = self
            .client
            .query()
            .table_name(&self.table)
            .limit(query.limit as i32)
            .expression_attribute_names("#p", "partition")
            .expression_attribute_values(":p", AttributeValue::S(POSTS_PARTITION.to_owned()));

        match &query.order {
            QueryOrder::ByCreationTime => {
                req = req
                    .index_name(CREATED_INDEX)
                    .key_condition_expression("#p = :p")
                    .scan_index_forward(false);
                if let Some(type_id) = &query.type_filter {
                    // Filtered after the limit is applied, so a page may come
                    // back short while a continuation key is still present.
                    req = req
                        .filter_expression("typeId = :t")
                        .expression_attribute_values(":t", AttributeValue::S(type_id.clone()));
                }
            }
            QueryOrder::ByType => {
                let type_id = query.type_filter.clone().ok_or_else(|| {
                    StoreError::Query("type query is missing its type filter".into())
                })?;
                req = req
                    .index_name(TYPE_INDEX)
                    .key_condition_expression("#p = :p AND typeId = :t")
                    .expression_attribute_values(":t", AttributeValue::S(type_id));
            }
        }

        if let Some(key) = &query.start_after {
            let attrs: HashMap<String, AttributeValue> = to_item(key).map_err(codec_err)?;
            req = req.set_exclusive_start_key(Some(attrs));
        }

        let output = req.send().await.map_err(query_err)?;

        let records: Vec<PostRecord> =
            from_items(output.items.unwrap_or_default()).map_err(codec_err)?;
        let items = records
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let next_key: Option<ContinuationKey> = output
            .last_evaluated_key
            .map(|key| from_item(key).map_err(codec_err))
            .transpose()?;

        Ok(PostPage { items, next_key })
    }
}

/// DynamoDB-backed, read-only settings store.
pub struct DynamoSettingsStore {
    client: Client,
    table: String,
}

impl DynamoSettingsStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl SettingsStore for DynamoSettingsStore {
    async fn list(&self, partition: &str) -> Result<Vec<Setting>, StoreError> {
        let output = self
            .client
            .query()
            .table_name(&self.table)
            .key_condition_expression("#p = :p")
            .expression_attribute_names("#p", "partition")
            .expression_attribute_values(":p", AttributeValue::S(partition.to_owned()))
            .send()
            .await
            .map_err(query_err)?;

        let records: Vec<SettingRecord> =
            from_items(output.items.unwrap_or_default()).map_err(codec_err)?;
        Ok(records.into_iter().map(Setting::from).collect())
    }
}
