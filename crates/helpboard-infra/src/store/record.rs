//! Wire representations of stored items and their domain conversions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use helpboard_core::domain::{Post, PostId, Setting, POSTS_PARTITION};
use helpboard_core::error::StoreError;

/// A stored record failed to convert to its domain form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Stored post has an invalid id: {0}")]
    BadId(String),

    #[error("Stored post belongs to partition {0:?}")]
    ForeignPartition(String),

    #[error("Stored owner {stored:?} does not match id owner segment {from_id:?}")]
    OwnerMismatch { stored: String, from_id: String },
}

impl From<RecordError> for StoreError {
    fn from(err: RecordError) -> Self {
        StoreError::Codec(err.to_string())
    }
}

/// Post as laid out in the item store: flat camelCase attributes, with the
/// partition and the (redundant, queryable) owner attribute materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub partition: String,
    pub id: String,
    pub owner: String,
    pub type_id: String,
    pub created_at: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub image: String,
    pub fulfilled: bool,
}

impl From<Post> for PostRecord {
    fn from(post: Post) -> Self {
        Self {
            partition: POSTS_PARTITION.to_owned(),
            owner: post.id.owner().to_owned(),
            id: post.id.to_string(),
            type_id: post.type_id,
            created_at: post.created_at,
            title: post.title,
            description: post.description,
            location: post.location,
            phone_number: post.phone_number,
            image: post.image,
            fulfilled: post.fulfilled,
        }
    }
}

impl TryFrom<PostRecord> for Post {
    type Error = RecordError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        if record.partition != POSTS_PARTITION {
            return Err(RecordError::ForeignPartition(record.partition));
        }
        let id = PostId::parse(&record.id).map_err(|e| RecordError::BadId(e.to_string()))?;
        if id.owner() != record.owner {
            return Err(RecordError::OwnerMismatch {
                stored: record.owner,
                from_id: id.owner().to_owned(),
            });
        }
        Ok(Self {
            id,
            type_id: record.type_id,
            created_at: record.created_at,
            title: record.title,
            description: record.description,
            location: record.location,
            phone_number: record.phone_number,
            image: record.image,
            fulfilled: record.fulfilled,
        })
    }
}

/// Settings-table entry: `{partition, id, name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingRecord {
    pub partition: String,
    pub id: String,
    pub name: String,
}

impl From<SettingRecord> for Setting {
    fn from(record: SettingRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}
