use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Partition key value shared by every post record.
pub const POSTS_PARTITION: &str = "POSTS";

/// Sentinel stored when a post is created without an image.
pub const NO_IMAGE: &str = "N/A";

/// Composite post key: `<owner>#<suffix>`.
///
/// The owner segment doubles as the authorization anchor - a caller may only
/// write or delete ids whose owner segment matches their own identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostId {
    owner: String,
    suffix: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Post id must have the form <owner>#<suffix>")]
    MissingSeparator,

    #[error("Post id has an empty owner or suffix segment")]
    EmptySegment,
}

impl PostId {
    pub fn new(owner: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            suffix: suffix.into(),
        }
    }

    /// Parse a composite id, rejecting ids without both segments.
    pub fn parse(raw: &str) -> Result<Self, PostIdError> {
        let (owner, suffix) = raw.split_once('#').ok_or(PostIdError::MissingSeparator)?;
        if owner.is_empty() || suffix.is_empty() {
            return Err(PostIdError::EmptySegment);
        }
        Ok(Self::new(owner, suffix))
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.owner, self.suffix)
    }
}

/// Post entity - a single community help post.
///
/// Records are immutable in place: a post is either overwritten wholesale by
/// its owner or deleted. The `owner` is carried by the id's owner segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub type_id: String,
    /// Epoch milliseconds, assigned by the server at write time.
    pub created_at: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub image: String,
    pub fulfilled: bool,
}

impl Serialize for PostId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PostId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Caller-supplied fields for a create operation, before the server assigns
/// the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Explicit id to overwrite an owned record; `None` generates a fresh one.
    pub id: Option<String>,
    pub type_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub image: Option<String>,
    pub fulfilled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_id() {
        let id = PostId::parse("alice#a1b2").unwrap();
        assert_eq!(id.owner(), "alice");
        assert_eq!(id.suffix(), "a1b2");
        assert_eq!(id.to_string(), "alice#a1b2");
    }

    #[test]
    fn suffix_may_contain_separator() {
        // Only the first '#' splits; suffixes keep the rest verbatim.
        let id = PostId::parse("alice#a#b").unwrap();
        assert_eq!(id.suffix(), "a#b");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(PostId::parse("alice"), Err(PostIdError::MissingSeparator));
        assert_eq!(PostId::parse("#a1b2"), Err(PostIdError::EmptySegment));
        assert_eq!(PostId::parse("alice#"), Err(PostIdError::EmptySegment));
    }
}
