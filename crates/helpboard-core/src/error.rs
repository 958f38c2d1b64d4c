//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Caller does not own the targeted record")]
    Unauthorized,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Store-level errors - failures talking to the item store.
///
/// No operation is retried internally; the caller decides whether to retry
/// the whole call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Stored item could not be decoded: {0}")]
    Codec(String),
}
