//! Store adapters.

pub mod memory;
pub mod record;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use memory::{InMemoryPostStore, InMemorySettingsStore};
pub use record::{PostRecord, RecordError, SettingRecord};

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoConfig, DynamoPostStore, DynamoSettingsStore};

#[cfg(test)]
mod tests;
