//! Client configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.nyayguru/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! sensible defaults when the file is missing or malformed, then applies
//! environment overrides.

use std::path::{Path, PathBuf};

use nyayguru_types::config::ClientConfig;

/// Environment variable overriding `api_base_url`.
pub const ENV_API_URL: &str = "NYAYGURU_API_URL";

/// Environment variable overriding `google_client_id`.
pub const ENV_GOOGLE_CLIENT_ID: &str = "NYAYGURU_GOOGLE_CLIENT_ID";

/// Resolve the client data directory.
///
/// `NYAYGURU_DATA_DIR` overrides; otherwise `~/.nyayguru`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NYAYGURU_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".nyayguru");
    }

    // Last resort: current directory
    PathBuf::from(".nyayguru")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Apply environment overrides to a loaded configuration.
///
/// Takes the lookup as a closure so tests do not mutate process-wide
/// environment state.
pub fn apply_env_overrides<F>(mut config: ClientConfig, get: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get(ENV_API_URL) {
        if !url.trim().is_empty() {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
    }
    if let Some(id) = get(ENV_GOOGLE_CLIENT_ID) {
        if !id.trim().is_empty() {
            config.google_client_id = Some(id.trim().to_string());
        }
    }
    config
}
