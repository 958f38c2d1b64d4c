//! Application state - shared across all handlers.

use std::sync::Arc;

use helpboard_core::domain::{Setting, LOCATIONS_PARTITION, TYPES_PARTITION};
use helpboard_core::ports::SettingsStore;
use helpboard_core::service::PostService;
use helpboard_infra::{InMemoryPostStore, InMemorySettingsStore};

use crate::config::StoreConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    /// Build the application state with appropriate store implementations.
    pub async fn new(store: Option<&StoreConfig>) -> Self {
        #[cfg(feature = "dynamodb")]
        if let Some(config) = store {
            return Self::dynamo(config).await;
        }

        #[cfg(not(feature = "dynamodb"))]
        if store.is_some() {
            tracing::warn!("Built without the dynamodb feature - ignoring store configuration.");
        }
        if store.is_none() {
            tracing::warn!("POSTS_TABLE not set. Running with the in-memory store.");
        }

        Self::in_memory()
    }

    #[cfg(feature = "dynamodb")]
    async fn dynamo(config: &StoreConfig) -> Self {
        use helpboard_infra::{DynamoConfig, DynamoPostStore, DynamoSettingsStore};

        let dynamo = DynamoConfig {
            posts_table: config.posts_table.clone(),
            settings_table: config.settings_table.clone(),
            endpoint_url: config.endpoint_url.clone(),
        };
        let client = dynamo.connect().await;

        tracing::info!(
            posts_table = %dynamo.posts_table,
            settings_table = %dynamo.settings_table,
            "DynamoDB store initialized"
        );

        Self {
            posts: PostService::new(Arc::new(DynamoPostStore::new(
                client.clone(),
                dynamo.posts_table,
            ))),
            settings: Arc::new(DynamoSettingsStore::new(client, dynamo.settings_table)),
        }
    }

    fn in_memory() -> Self {
        let settings = InMemorySettingsStore::new()
            .with_entries(TYPES_PARTITION, default_types())
            .with_entries(LOCATIONS_PARTITION, default_locations());

        Self {
            posts: PostService::new(Arc::new(InMemoryPostStore::new())),
            settings: Arc::new(settings),
        }
    }
}

fn default_types() -> Vec<Setting> {
    [
        ("tools", "Tools & Equipment"),
        ("errands", "Errands & Deliveries"),
        ("childcare", "Childcare"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(id, name)| Setting {
        id: id.into(),
        name: name.into(),
    })
    .collect()
}

fn default_locations() -> Vec<Setting> {
    [("north", "North End"), ("south", "South End"), ("central", "Central")]
        .into_iter()
        .map(|(id, name)| Setting {
            id: id.into(),
            name: name.into(),
        })
        .collect()
}
