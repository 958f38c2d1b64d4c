//! Query planner for the listing endpoints.
//!
//! Turns caller-supplied filters (type, page size, continuation cursor) into
//! a [`PostQuery`] against the post partition and normalizes the returned
//! page. The cursor wire format is a percent-encoded JSON object matching
//! the store's continuation-key shape; anything that does not decode to that
//! shape is rejected up front rather than passed through.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::POSTS_PARTITION;
use crate::error::DomainError;
use crate::ports::{ContinuationKey, PostPage, PostQuery, QueryOrder};

/// Page size applied when the caller supplies none (or a non-numeric value,
/// which the HTTP layer deserializes to "none").
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Caller-facing listing parameters, transport-agnostic.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub type_filter: Option<String>,
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
}

/// One normalized page, with the continuation key re-encoded as an opaque
/// token for the caller.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub items: Vec<crate::domain::Post>,
    pub next_cursor: Option<String>,
}

/// Build the store query for one listing call.
///
/// Type order requires a non-empty type filter; creation-time order accepts
/// an optional one (applied consistently at the store level, unlike the
/// system this replaces, which accepted the filter on the by-time listing
/// and silently dropped it).
pub fn plan(order: QueryOrder, req: &ListRequest) -> Result<PostQuery, DomainError> {
    let type_filter = match req.type_filter.as_deref() {
        Some(t) if !t.is_empty() => Some(t.to_owned()),
        _ => None,
    };

    if order == QueryOrder::ByType && type_filter.is_none() {
        return Err(DomainError::Validation(
            "typeId is required when listing by type".into(),
        ));
    }

    let start_after = req
        .cursor
        .as_deref()
        .map(|token| decode_cursor(token, &order))
        .transpose()?;

    Ok(PostQuery {
        order,
        type_filter,
        start_after,
        limit: req.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
    })
}

/// Re-encode the store's continuation key as the caller-facing page.
pub fn normalize(page: PostPage) -> ListPage {
    ListPage {
        items: page.items,
        next_cursor: page.next_key.as_ref().map(encode_cursor),
    }
}

/// Encode a continuation key as an opaque percent-encoded JSON token.
pub fn encode_cursor(key: &ContinuationKey) -> String {
    // ContinuationKey serialization cannot fail: plain strings and an i64.
    let json = serde_json::to_string(key).unwrap_or_default();
    utf8_percent_encode(&json, NON_ALPHANUMERIC).to_string()
}

/// Decode and validate an opaque cursor for the given ordering.
///
/// Rejects bad percent-encoding, invalid JSON, unknown fields, a foreign
/// partition, and a key missing the sort attribute of the requested order.
pub fn decode_cursor(token: &str, order: &QueryOrder) -> Result<ContinuationKey, DomainError> {
    let json = percent_decode_str(token)
        .decode_utf8()
        .map_err(|_| DomainError::Validation("cursor is not valid percent-encoded UTF-8".into()))?;

    let key: ContinuationKey = serde_json::from_str(&json)
        .map_err(|e| DomainError::Validation(format!("cursor is not a continuation key: {e}")))?;

    if key.partition != POSTS_PARTITION {
        return Err(DomainError::Validation(
            "cursor does not belong to the post partition".into(),
        ));
    }

    let shape_ok = match order {
        QueryOrder::ByCreationTime => key.created_at.is_some(),
        QueryOrder::ByType => key.type_id.is_some(),
    };
    if !shape_ok {
        return Err(DomainError::Validation(
            "cursor does not match the requested ordering".into(),
        ));
    }

    Ok(key)
}
