//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: Option<StoreConfig>,
}

/// Item-store configuration. Absent when `POSTS_TABLE` is not set, in which
/// case the server runs against the in-memory store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub posts_table: String,
    pub settings_table: String,
    /// Override for local development (e.g. DynamoDB Local).
    pub endpoint_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store = env::var("POSTS_TABLE").ok().map(|posts_table| StoreConfig {
            posts_table,
            settings_table: env::var("SETTINGS_TABLE")
                .unwrap_or_else(|_| "helpboard-settings".to_string()),
            endpoint_url: env::var("DYNAMODB_ENDPOINT").ok(),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store,
        }
    }
}
