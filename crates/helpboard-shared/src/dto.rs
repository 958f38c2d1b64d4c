//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Deserializer, Serialize};

/// Request to create (or overwrite) a post.
///
/// Descriptive fields default to empty strings when absent; `image` is
/// substituted with a sentinel server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// Explicit `<owner>#<suffix>` id to overwrite an owned post.
    #[serde(default)]
    pub id: Option<String>,
    pub type_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub fulfilled: bool,
}

/// A stored post as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub type_id: String,
    pub created_at: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub phone_number: String,
    pub image: String,
    pub fulfilled: bool,
}

/// Query parameters for the listing endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
    /// Tolerates non-numeric values by treating them as absent, so the
    /// server falls back to its default page size instead of rejecting.
    #[serde(default, deserialize_with = "lenient_page_size")]
    pub page_size: Option<u32>,
}

/// One page of posts plus the continuation token, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub items: Vec<PostResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Acknowledgement for create, echoing the stored id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub id: String,
}

fn lenient_page_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.parse().ok(),
        None => None,
    })
}
