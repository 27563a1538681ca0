//! Application state wiring the client together.
//!
//! Loads configuration from the data directory, applies environment
//! overrides, builds the HTTP client, and restores any saved login token.

use std::path::PathBuf;

use nyayguru_infra::config::{apply_env_overrides, load_client_config, resolve_data_dir};
use nyayguru_infra::http::HttpApiClient;
use nyayguru_infra::token::TokenStore;
use nyayguru_types::config::ClientConfig;

/// Shared application state used by all command handlers.
pub struct AppState {
    pub config: ClientConfig,
    pub client: HttpApiClient,
    pub token_store: TokenStore,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: config, HTTP client, saved token.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_client_config(&data_dir).await;
        let config = apply_env_overrides(config, |key| std::env::var(key).ok());

        let client = HttpApiClient::from_config(&config);

        let token_store = TokenStore::new(&data_dir);
        if let Some(token) = token_store.load().await? {
            client.set_token(token);
        }

        Ok(Self {
            config,
            client,
            token_store,
            data_dir,
        })
    }
}
