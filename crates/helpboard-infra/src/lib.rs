//! # Helpboard Infrastructure
//!
//! Concrete implementations of the ports defined in `helpboard-core`.
//!
//! ## Feature Flags
//!
//! - `dynamodb` (default) - DynamoDB adapters via the AWS SDK
//! - `minimal` - In-memory adapters only, no external dependencies

pub mod store;

// Re-exports - In-Memory
pub use store::{InMemoryPostStore, InMemorySettingsStore};

// Re-exports - DynamoDB
#[cfg(feature = "dynamodb")]
pub use store::{DynamoConfig, DynamoPostStore, DynamoSettingsStore};
